//! Backend Command Wrappers
//!
//! Frontend bindings to the Task Store HTTP API.

mod task;

use serde::de::DeserializeOwned;

use crate::models::ErrorBody;

pub use task::*;

/// Absolute URL for an API path on the page's own origin.
/// reqwest needs absolute URLs even when running in the browser.
fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, path)
}

/// Decode a success body, or turn an error response into its message.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(|e| e.to_string());
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    Err(message)
}
