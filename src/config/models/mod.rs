//! Configuration data models
//!
//! This module defines the configuration structures used by the executor,
//! the HTTP adapter and the logging setup.

#![allow(missing_docs)]

pub mod executor;
pub mod logging;
pub mod remote;

pub use executor::*;
pub use logging::*;
pub use remote::*;

/// Default pause between items in milliseconds
pub fn default_inter_item_delay_ms() -> u64 {
    1500
}

/// Upper bound for the inter-item delay in milliseconds
pub const MAX_INTER_ITEM_DELAY_MS: u64 = 60_000;

/// Default per-request timeout in seconds
pub fn default_timeout_seconds() -> u64 {
    60
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
