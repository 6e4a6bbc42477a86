//! Host environment services.
//!
//! # Services
//!
//! - [`location`] - Hostname of the current page (`window.location`)

pub mod location;

pub use location::*;
