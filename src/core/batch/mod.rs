//! Sequential bulk operation execution
//!
//! This module runs a slow, failure-prone remote operation over a batch of
//! items one at a time, keeping a per-run outcome ledger and allowing the
//! failed subset to be retried.

mod executor;
mod ledger;
mod types;


// Re-export all public types
pub use executor::{BatchExecutor, DEFAULT_INTER_ITEM_DELAY};
pub use ledger::{Outcome, OutcomeLedger, ProgressSnapshot};
pub use types::{FailureReason, FailureRecord, ItemDescriptor, RunState, RunSummary};

/// Stop signal accepted by the cancellable run entry points
pub use tokio_util::sync::CancellationToken;
