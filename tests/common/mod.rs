//! Common test utilities for bulkrun
//!
//! - Batch fixtures with realistic item descriptors
//! - A scripted remote operation with per-item outcomes and a call log

pub mod operations;

pub use fixtures::BatchFactory;
pub use operations::ScriptedOperation;

use bulkrun::{BatchExecutor, RecordingObserver, RemoteOperation};
use std::sync::Arc;
use std::time::Duration;

/// Executor with no pacing delay and a recording observer attached
pub fn recorded_executor<O: RemoteOperation>(
    operation: O,
) -> (BatchExecutor<O>, Arc<RecordingObserver>) {
    let recorder = Arc::new(RecordingObserver::new());
    let executor = BatchExecutor::new(operation)
        .with_inter_item_delay(Duration::ZERO)
        .with_observer(recorder.clone());
    (executor, recorder)
}
