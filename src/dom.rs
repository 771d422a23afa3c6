//! DOM Helpers
//!
//! Thin wrappers over `web_sys` for the few document-level effects the app needs.

use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human-readable text for a thrown JS value
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Add or remove a class on `<html>`
pub fn set_root_class(class: &str, enabled: bool) -> Result<(), String> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or("document element unavailable")?;
    let classes = root.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    result.map_err(|e| js_error_message(&e))
}

/// Full page reload, re-running every mount-time fetch
pub fn reload_page() -> Result<(), String> {
    let window = web_sys::window().ok_or("window unavailable")?;
    window.location().reload().map_err(|e| js_error_message(&e))
}
