//! Application configuration.
//!
//! Centralized configuration for the City Roulette frontend.
//! The backend URL is picked once per page load from the hostname the
//! page is served on. The production URL is baked in at build time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::environment::Environment;
use crate::error::LocationResult;
use crate::services::location;

/// Backend API base URL for local development.
///
/// The city recommendation backend started on a developer machine.
pub const DEV_API_BASE_URL: &str = "http://localhost:8000";

/// Production URL used when the build does not provide one.
pub const DEFAULT_PROD_API_BASE_URL: &str = "https://your-app.railway.app";

/// Backend API base URL for the deployed site.
///
/// Set `CITY_ROULETTE_API_URL` when building to point at the real deployment.
pub const PROD_API_BASE_URL: &str = match option_env!("CITY_ROULETTE_API_URL") {
    Some(url) => url,
    None => DEFAULT_PROD_API_BASE_URL,
};

/// Console log level used when the build does not provide one.
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

/// Console log level, from `CITY_ROULETTE_LOG_LEVEL` at build time.
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("CITY_ROULETTE_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|level| level.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Resolved backend configuration for the current page.
///
/// Serializes to `{ "apiBaseUrl": ..., "environment": ... }` for JavaScript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// Base URL every API path is appended to
    pub api_base_url: String,
    /// Environment the base URL was chosen for
    pub environment: Environment,
}

impl ApiConfig {
    /// Preset for a local backend.
    pub fn development() -> Self {
        Self {
            api_base_url: DEV_API_BASE_URL.to_string(),
            environment: Environment::Development,
        }
    }

    /// Preset for the deployed backend.
    pub fn production() -> Self {
        Self {
            api_base_url: PROD_API_BASE_URL.to_string(),
            environment: Environment::Production,
        }
    }

    /// Preset for an environment.
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
        }
    }

    /// Pick the configuration for a page hostname.
    ///
    /// Pure: no logging, same input gives the same output.
    pub fn resolve(hostname: &str) -> Self {
        Self::for_environment(Environment::from_hostname(hostname))
    }

    /// Resolve from `window.location` and announce the result.
    ///
    /// Never fails. When the hostname cannot be read the page is treated
    /// as deployed.
    pub fn from_location() -> Self {
        Self::from_hostname_result(location::current_hostname())
    }

    /// Resolve from the outcome of a hostname lookup and announce the result.
    ///
    /// A failed lookup logs a warning and resolves as an empty hostname.
    pub fn from_hostname_result(hostname: LocationResult<String>) -> Self {
        let hostname = hostname.unwrap_or_else(|e| {
            log::warn!("⚠️  Could not read page hostname, assuming production: {}", e);
            String::new()
        });

        let config = Self::resolve(&hostname);
        log::info!("🌐 API config loaded: {}", config);
        config
    }

    /// Full URL for an API path, e.g. `endpoint("/api/cities?count=10")`.
    ///
    /// Exactly one `/` separates base and path. The path is not validated.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Display for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.environment, self.api_base_url)
    }
}
