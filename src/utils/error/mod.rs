//! Error handling for bulkrun
//!
//! This module defines the crate error type, its helper constructors and the
//! conversions that normalize errors into per-item failure reasons.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod types;

pub use types::{BulkError, Result};
