//! # bulkrun
//!
//! Sequential bulk operation executor for slow, rate-limited remote calls.
//!
//! Given a batch of items and a [`RemoteOperation`], a [`BatchExecutor`]
//! calls the operation once per item, strictly in order and with a courtesy
//! pause between calls, while a [`ProgressObserver`] receives live progress.
//! Per-item failures are recorded in an outcome ledger instead of aborting
//! the batch, and the failed subset can be retried on its own.
//!
//! ```rust,no_run
//! use bulkrun::{BatchExecutor, FailureReason, FnOperation, ItemDescriptor, TracingObserver};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let operation = FnOperation::new(|item: ItemDescriptor| async move {
//!         if item.id.is_empty() {
//!             Err(FailureReason::new("missing id"))
//!         } else {
//!             Ok(())
//!         }
//!     });
//!
//!     let mut executor = BatchExecutor::new(operation)
//!         .with_observer(Arc::new(TracingObserver::new("stats")));
//!
//!     let batch = vec![ItemDescriptor::new("ch-1"), ItemDescriptor::new("ch-2")];
//!     if let Some(outcome) = executor.run(batch).await {
//!         println!("{}: {} failed", outcome.summary, outcome.failed);
//!         if outcome.has_failures() {
//!             executor.retry_failures().await;
//!         }
//!     }
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{BulkError, Result};

pub use core::batch::{
    BatchExecutor, CancellationToken, FailureReason, FailureRecord, ItemDescriptor, Outcome,
    OutcomeLedger, ProgressSnapshot, RunState, RunSummary,
};
pub use core::observers::{
    ChannelObserver, FnObserver, NoopObserver, ObserverSet, RecordingObserver, TracingObserver,
};
pub use core::operations::{HttpOperation, OperationKind};
pub use core::traits::{FnOperation, ProgressEvent, ProgressObserver, RemoteOperation};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
