//! Browser side of the selection bridge.
//!
//! [`WebDocument`] implements [`selection_core::SelectionHost`] over the live
//! DOM. [`register`] installs the resolver where the host framework looks for
//! clientside functions, `window.dash_clientside[namespace][functionName]`.

mod convert;
mod exports;
mod host;
mod logger;
mod register;

pub use convert::{config_from_js, identifier_to_value, result_to_js};
pub use exports::{handle_text_selection, register_text_selection, selection_from_event};
pub use host::WebDocument;
pub use logger::init_logger;
pub use register::{CLIENTSIDE_ROOT, RegisterError, install_default, register};
