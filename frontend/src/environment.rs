//! Deployment environment detection.
//!
//! The frontend is served either from a developer machine or from the
//! deployed site. The hostname of the page is the only signal used to
//! tell the two apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hostnames that always mean a local development server.
const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Deployment environment the page is running in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Served from localhost, talks to a local backend
    Development,
    /// Anything else
    Production,
}

impl Environment {
    /// Classify a page hostname.
    ///
    /// Total over every string: a host that is not recognised as local
    /// is production. Matching is case-sensitive.
    pub fn from_hostname(hostname: &str) -> Self {
        if LOCAL_HOSTS.contains(&hostname) || hostname.contains("localhost") {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    /// Lowercase label, as exposed to JavaScript.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// True for a local development server.
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// True for the deployed site.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(not(target_arch = "wasm32"))]
    use proptest::prelude::*;

    #[test]
    fn test_local_hosts_are_development() {
        assert_eq!(Environment::from_hostname("localhost"), Environment::Development);
        assert_eq!(Environment::from_hostname("127.0.0.1"), Environment::Development);
        assert_eq!(Environment::from_hostname("app.localhost"), Environment::Development);
        assert_eq!(Environment::from_hostname("localhost.lan"), Environment::Development);
    }

    #[test]
    fn test_other_hosts_are_production() {
        assert_eq!(Environment::from_hostname("your-app.railway.app"), Environment::Production);
        assert_eq!(Environment::from_hostname("your-app.onrender.com"), Environment::Production);
        assert_eq!(Environment::from_hostname(""), Environment::Production);
        // Only the exact loopback literal counts
        assert_eq!(Environment::from_hostname("127.0.0.2"), Environment::Production);
        assert_eq!(Environment::from_hostname("0.0.0.0"), Environment::Production);
        assert_eq!(Environment::from_hostname("LOCALHOST"), Environment::Production);
    }

    #[test]
    fn test_serialized_labels() {
        assert_eq!(serde_json::to_string(&Environment::Development).unwrap(), "\"development\"");
        assert_eq!(serde_json::to_string(&Environment::Production).unwrap(), "\"production\"");
        assert_eq!(Environment::Production.to_string(), "production");
        assert!(Environment::Development.is_development());
        assert!(Environment::Production.is_production());
    }

    #[cfg(not(target_arch = "wasm32"))]
    proptest! {
        #[test]
        fn prop_containing_localhost_is_development(prefix in "[a-z0-9.-]{0,16}", suffix in "[a-z0-9.-]{0,16}") {
            let host = format!("{}localhost{}", prefix, suffix);
            prop_assert_eq!(Environment::from_hostname(&host), Environment::Development);
        }

        #[test]
        fn prop_without_localhost_is_production(host in "[a-z0-9.-]{0,32}") {
            prop_assume!(!host.contains("localhost") && host != "127.0.0.1");
            prop_assert_eq!(Environment::from_hostname(&host), Environment::Production);
        }
    }
}
