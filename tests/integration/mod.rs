//! Integration tests for bulkrun
//!
//! These tests drive the public API the way a caller would.

pub mod executor_tests;
pub mod http_operation_tests;
