//! Users API
//!
//! One GET against the users endpoint through `window.fetch`.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::dom::js_error_message;
use crate::error::FetchError;
use crate::models::User;

/// Fetch and decode the user collection at `url`
pub async fn fetch_users(url: &str) -> Result<Vec<User>, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("window unavailable".into()))?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Network(js_error_message(&e)))?
        .dyn_into()
        .map_err(|_| FetchError::Body("unexpected fetch result".into()))?;

    check_status(response.ok(), response.status())?;

    let text_promise = response.text().map_err(|e| FetchError::Body(js_error_message(&e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::Body(js_error_message(&e)))?
        .as_string()
        .ok_or_else(|| FetchError::Body("response body is not text".into()))?;

    decode_users(&body)
}

/// Reject anything outside the 2xx range
pub fn check_status(ok: bool, status: u16) -> Result<(), FetchError> {
    if ok {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

/// Parse a JSON array of users
pub fn decode_users(body: &str) -> Result<Vec<User>, FetchError> {
    Ok(serde_json::from_str(body)?)
}
