//! Crossing the JS boundary.

use selection_core::{ConfigError, ResolverConfig, SelectionResult};
use serde_json::Value;
use wasm_bindgen::JsValue;

/// Decode whatever the host passed as identifier: a string, a structured id
/// object or a props object.
pub fn identifier_to_value(identifier: &JsValue) -> Option<Value> {
    if let Some(s) = identifier.as_string() {
        return Some(Value::String(s));
    }
    match serde_wasm_bindgen::from_value::<Value>(identifier.clone()) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!(target: "selection.web", "undecodable identifier: {err}");
            None
        }
    }
}

/// `{start, end}` as a plain object, or `null`.
pub fn result_to_js(result: SelectionResult) -> JsValue {
    let Some(offsets) = result else {
        return JsValue::NULL;
    };
    serde_wasm_bindgen::to_value(&offsets).unwrap_or_else(|err| {
        log::warn!(target: "selection.web", "failed to encode selection: {err}");
        JsValue::NULL
    })
}

/// `undefined`/`null` mean defaults.
pub fn config_from_js(config: JsValue) -> Result<ResolverConfig, ConfigError> {
    if config.is_undefined() || config.is_null() {
        return Ok(ResolverConfig::default());
    }
    serde_wasm_bindgen::from_value::<ResolverConfig>(config)
        .map_err(|err| ConfigError::Invalid(err.to_string()))?
        .validate()
}
