//! Access to the page location through `web-sys`.

use wasm_bindgen::JsValue;

use crate::error::{LocationError, LocationResult};

/// Hostname of the page currently loaded, e.g. `localhost` or `your-app.railway.app`.
pub fn current_hostname() -> LocationResult<String> {
    let window = web_sys::window().ok_or(LocationError::NoWindow)?;

    window
        .location()
        .hostname()
        .map_err(|e| LocationError::Hostname(describe_js_error(&e)))
}

fn describe_js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
