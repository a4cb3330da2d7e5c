use std::cell::RefCell;

use js_sys::{Object, Reflect};
use selection_core::{CollapsedPolicy, ResolverConfig, resolve_value};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::convert::{identifier_to_value, result_to_js};
use crate::host::{WebDocument, describe};
use crate::logger::init_logger;

/// Global object the host framework searches for clientside namespaces.
pub const CLIENTSIDE_ROOT: &str = "dash_clientside";

thread_local! {
    /// Settings of the last successful [`register`]. Every installed function
    /// and export reads them from here.
    static ACTIVE: RefCell<ResolverConfig> = RefCell::new(ResolverConfig::default());
}

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("no window to register on")]
    NoWindow,
    #[error("failed to install `{path}`: {message}")]
    Install { path: String, message: String },
}

/// Install the resolver at `window.dash_clientside[namespace][function_name]`.
///
/// Missing objects along the path are created; functions already registered
/// in the same namespace are kept. The logger level and active settings change
/// only once the function is installed.
pub fn register(config: ResolverConfig) -> Result<(), RegisterError> {
    let window = web_sys::window().ok_or(RegisterError::NoWindow)?;
    let root = ensure_object(window.as_ref(), CLIENTSIDE_ROOT, CLIENTSIDE_ROOT)?;
    let path = format!("{CLIENTSIDE_ROOT}.{}", config.namespace);
    let namespace = ensure_object(&root, &config.namespace, &path)?;

    let name = &config.function_name;
    let handler = Closure::<dyn Fn(JsValue) -> JsValue>::new(|identifier: JsValue| {
        handle_active(&identifier)
    });
    set_property(
        &namespace,
        &JsValue::from_str(name),
        &handler.into_js_value(),
        &format!("{path}.{name}"),
    )?;

    init_logger(config.log_level);
    log::info!(target: "selection.web", "registered {path}.{name}");
    ACTIVE.with(|active| *active.borrow_mut() = config);
    Ok(())
}

/// Register with default settings, logging instead of failing.
pub fn install_default() {
    let config = ResolverConfig::default();
    let level = config.log_level;
    if let Err(err) = register(config) {
        init_logger(level);
        log::error!(target: "selection.web", "{err}");
    }
}

/// Resolve with the active settings.
pub(crate) fn handle_active(identifier: &JsValue) -> JsValue {
    ACTIVE.with(|config| handle_with(identifier, &config.borrow()))
}

pub(crate) fn active_collapsed_policy() -> CollapsedPolicy {
    ACTIVE.with(|config| config.borrow().collapsed)
}

/// Resolve against the live document. Never throws.
fn handle_with(identifier: &JsValue, config: &ResolverConfig) -> JsValue {
    let Some(mut host) = WebDocument::current() else {
        return JsValue::NULL;
    };
    let Some(identifier) = identifier_to_value(identifier) else {
        return JsValue::NULL;
    };
    result_to_js(resolve_value(&mut host, identifier, config))
}

fn ensure_object(target: &JsValue, key: &str, path: &str) -> Result<Object, RegisterError> {
    let key = JsValue::from_str(key);
    let existing = Reflect::get(target, &key).map_err(|err| install_error(path, describe(&err)))?;
    if existing.is_object() {
        return Ok(existing.unchecked_into());
    }

    let fresh = Object::new();
    set_property(target, &key, &fresh, path)?;
    Ok(fresh)
}

// `Reflect.set` reports a frozen or read-only target with `false`, not a throw.
fn set_property(
    target: &JsValue,
    key: &JsValue,
    value: &JsValue,
    path: &str,
) -> Result<(), RegisterError> {
    match Reflect::set(target, key, value) {
        Ok(true) => Ok(()),
        Ok(false) => Err(install_error(path, "target is not writable".to_string())),
        Err(err) => Err(install_error(path, describe(&err))),
    }
}

fn install_error(path: &str, message: String) -> RegisterError {
    RegisterError::Install {
        path: path.to_string(),
        message,
    }
}
