//! Error types for the browser boundary.
//!
//! Resolution itself cannot fail. The only fallible step is reading the
//! page location from the host environment:
//!
//! - [`LocationError`] - `window.location` is missing or unreadable

use thiserror::Error;

// =============================================================================
// Location Errors
// =============================================================================

/// Errors while reading the page location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// No global `window` (worker or non-browser host).
    #[error("No global window available")]
    NoWindow,

    /// `location.hostname` threw. Holds the thrown string, or its debug form.
    #[error("Failed to read location hostname: {0}")]
    Hostname(String),
}

/// Result type alias for browser boundary operations.
pub type LocationResult<T> = Result<T, LocationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(LocationError::NoWindow.to_string(), "No global window available");

        let err = LocationError::Hostname("SecurityError".into());
        assert!(err.to_string().contains("SecurityError"));
    }
}
