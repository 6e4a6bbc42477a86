//! City Roulette - Frontend API configuration
//!
//! A WebAssembly module that decides, once per page load, which backend
//! the travel-city recommendation client talks to.
//!
//! # Resolution
//!
//! ```text
//! window.location.hostname ──▶ Environment ──▶ ApiConfig { apiBaseUrl, environment }
//!   "localhost", "127.0.0.1",     Development     http://localhost:8000
//!   "*localhost*"
//!   anything else                 Production      CITY_ROULETTE_API_URL (build time)
//! ```
//!
//! Rust callers resolve with [`ApiConfig::resolve`] and pass the value
//! along. Page scripts read the active configuration through the
//! `apiConfig()` and `apiEndpoint()` exports.
//!
//! # Modules
//!
//! - [`config`] - Constants and the resolved [`ApiConfig`]
//! - [`environment`] - Hostname classification
//! - [`services`] - Browser access (page location)
//! - [`error`] - Browser boundary errors

use once_cell::sync::OnceCell;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod environment;
pub mod error;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use environment::Environment;

// Errors
pub use error::{LocationError, LocationResult};

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Configuration selected for this page. Written once, never replaced.
static ACTIVE_CONFIG: OnceCell<ApiConfig> = OnceCell::new();

/// WASM entry point - called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(config::log_level());

    active_config();
}

/// Configuration for the current page, resolving it on first use.
pub fn active_config() -> &'static ApiConfig {
    ACTIVE_CONFIG.get_or_init(ApiConfig::from_location)
}

/// Active configuration as `{ apiBaseUrl, environment }`.
#[wasm_bindgen(js_name = apiConfig)]
pub fn api_config() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(active_config()).map_err(JsValue::from)
}

/// Full backend URL for `path` under the active configuration.
#[wasm_bindgen(js_name = apiEndpoint)]
pub fn api_endpoint(path: &str) -> String {
    active_config().endpoint(path)
}
