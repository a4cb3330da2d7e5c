//! WebAssembly entry point for the text selection bridge.
//!
//! Loading the module installs the console logger and registers
//! `window.dash_clientside.clientside.handleTextSelection` with default
//! settings. Call `registerTextSelection(config)` to change them.

use wasm_bindgen::prelude::*;

pub use web::{handle_text_selection, register_text_selection, selection_from_event};

#[wasm_bindgen(start)]
pub fn start() {
    web::install_default();
}
