//! Functions exported to JS.

use selection_core::EventSelection;
use wasm_bindgen::prelude::*;

use crate::convert::{config_from_js, result_to_js};
use crate::register::{active_collapsed_policy, handle_active, register};

/// Report the selection of the text field identified by `identifier`.
///
/// Returns `{start, end}` or `null`; never throws.
#[wasm_bindgen(js_name = handleTextSelection)]
pub fn handle_text_selection(identifier: JsValue) -> JsValue {
    handle_active(&identifier)
}

/// Apply `config` (a plain object, or `undefined` for defaults) and register
/// the resolver under its namespace/function name.
#[wasm_bindgen(js_name = registerTextSelection)]
pub fn register_text_selection(config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(config).map_err(to_js_error)?;
    register(config).map_err(to_js_error)
}

/// Offsets from an event-listener payload (`srcElement.selectionStart`, ...).
#[wasm_bindgen(js_name = selectionFromEvent)]
pub fn selection_from_event(event: JsValue) -> JsValue {
    let Ok(event) = serde_wasm_bindgen::from_value::<EventSelection>(event) else {
        return JsValue::NULL;
    };
    result_to_js(event.to_result(active_collapsed_policy()))
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
