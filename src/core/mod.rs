//! Core functionality
//!
//! This module contains the batch executor, the traits it is wired through,
//! the stock observers and the concrete remote operations.

pub mod batch;
pub mod observers;
pub mod operations;
pub mod traits;
