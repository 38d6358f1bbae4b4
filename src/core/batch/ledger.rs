//! Per-run outcome accounting

use super::types::{FailureReason, FailureRecord, ItemDescriptor, RunState, RunSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Working state of one run
///
/// Invariants: `completed <= total`, `succeeded + failed == completed` and
/// `failures.len() == failed`. A cancelled run parks the items it never
/// reached in `pending`. Only the executor's run loop writes to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeLedger {
    total: usize,
    completed: usize,
    succeeded: usize,
    failed: usize,
    current_item: Option<ItemDescriptor>,
    failures: Vec<FailureRecord>,
    pending: Vec<ItemDescriptor>,
}

impl OutcomeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh run over `total` items
    pub(crate) fn reset(&mut self, total: usize) {
        self.total = total;
        self.completed = 0;
        self.succeeded = 0;
        self.failed = 0;
        self.current_item = None;
        self.failures.clear();
        self.pending.clear();
    }

    pub(crate) fn begin_item(&mut self, item: ItemDescriptor) {
        self.current_item = Some(item);
    }

    pub(crate) fn record_success(&mut self) {
        self.succeeded += 1;
        self.completed += 1;
    }

    pub(crate) fn record_failure(&mut self, item: ItemDescriptor, reason: FailureReason) {
        self.failed += 1;
        self.completed += 1;
        self.failures.push(FailureRecord { item, reason });
    }

    pub(crate) fn clear_current(&mut self) {
        self.current_item = None;
    }

    /// Park items a cancelled run never attempted
    pub(crate) fn defer(&mut self, items: impl IntoIterator<Item = ItemDescriptor>) {
        self.pending.extend(items);
    }

    /// Drain failures, then pending items, into a retry batch
    ///
    /// Failure reasons are dropped. Input order is preserved since pending
    /// items always come after every attempted one.
    pub(crate) fn take_retry_batch(&mut self) -> Vec<ItemDescriptor> {
        let mut batch: Vec<ItemDescriptor> =
            self.failures.drain(..).map(|record| record.item).collect();
        batch.append(&mut self.pending);
        batch
    }

    /// Anything left for [`BatchExecutor::retry_failures`](super::BatchExecutor::retry_failures)
    pub fn has_retryable(&self) -> bool {
        !self.failures.is_empty() || !self.pending.is_empty()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn current_item(&self) -> Option<&ItemDescriptor> {
        self.current_item.as_ref()
    }

    pub fn failures(&self) -> &[FailureRecord] {
        &self.failures
    }

    pub fn pending(&self) -> &[ItemDescriptor] {
        &self.pending
    }

    /// `floor(completed / total * 100)`, zero for an empty ledger
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.completed * 100 / self.total) as u8
    }

    pub fn summary(&self) -> Option<RunSummary> {
        RunSummary::from_counts(self.succeeded, self.failed)
    }
}

/// Point-in-time view of the ledger handed to observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub state: RunState,
    pub total: usize,
    pub completed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub current_item: Option<ItemDescriptor>,
    pub progress_percent: u8,
}

impl ProgressSnapshot {
    pub(crate) fn capture(state: RunState, ledger: &OutcomeLedger) -> Self {
        Self {
            state,
            total: ledger.total,
            completed: ledger.completed,
            succeeded: ledger.succeeded,
            failed: ledger.failed,
            current_item: ledger.current_item.clone(),
            progress_percent: ledger.progress_percent(),
        }
    }
}

/// Final ledger snapshot of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub run_id: Uuid,
    pub total: usize,
    pub completed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<FailureRecord>,
    /// Items never attempted because the run was cancelled
    #[serde(default)]
    pub pending: Vec<ItemDescriptor>,
    pub summary: RunSummary,
    /// The run stopped early on a cancellation request
    pub cancelled: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl Outcome {
    pub(crate) fn from_ledger(
        run_id: Uuid,
        ledger: &OutcomeLedger,
        cancelled: bool,
        started_at: DateTime<Utc>,
    ) -> Self {
        // A run always records at least one item before it can stop
        let summary = ledger.summary().unwrap_or(RunSummary::AllSucceeded);
        Self {
            run_id,
            total: ledger.total,
            completed: ledger.completed,
            succeeded: ledger.succeeded,
            failed: ledger.failed,
            failures: ledger.failures.clone(),
            pending: ledger.pending.clone(),
            summary,
            cancelled,
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Items that failed, in discovery order
    pub fn failed_items(&self) -> impl Iterator<Item = &ItemDescriptor> {
        self.failures.iter().map(|record| &record.item)
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Items left unprocessed because the run was cancelled
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
