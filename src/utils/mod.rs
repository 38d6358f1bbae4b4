//! Utility modules for bulkrun
//!
//! - **error**: crate error type and its conversions
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{BulkError, Result};
pub use logging::init_tracing;
