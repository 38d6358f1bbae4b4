//! Sequential batch executor
//!
//! Runs one remote operation per item, strictly in batch order, pausing
//! between items so the remote side is never hit faster than the configured
//! pace. Per-item failures are recorded and never abort the batch.

use super::ledger::{Outcome, OutcomeLedger, ProgressSnapshot};
use super::types::{FailureReason, ItemDescriptor, RunState};
use crate::config::ExecutorConfig;
use crate::core::observers::NoopObserver;
use crate::core::traits::{ProgressEvent, ProgressObserver, RemoteOperation};
use chrono::Utc;
use futures::FutureExt;
use std::any::Any;
use std::collections::VecDeque;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Default pause between two consecutive remote calls
pub const DEFAULT_INTER_ITEM_DELAY: Duration = Duration::from_millis(1500);

/// Batch executor for one kind of remote operation
///
/// An executor is reusable across runs. Every run resets the ledger, so
/// nothing leaks from one run into the next. Runs take `&mut self`: a second
/// run cannot start while one is in progress.
///
/// Dropping a run future before it resolves abandons the run: the executor
/// ends up `Completed`, the item in flight and the unattempted ones are kept
/// as pending, and no `RunFinished` event is emitted.
pub struct BatchExecutor<O> {
    operation: O,
    observer: Arc<dyn ProgressObserver>,
    inter_item_delay: Duration,
    state: RunState,
    ledger: OutcomeLedger,
}

impl<O: RemoteOperation> BatchExecutor<O> {
    /// Create an executor with the default pacing and no observer
    pub fn new(operation: O) -> Self {
        Self {
            operation,
            observer: Arc::new(NoopObserver),
            inter_item_delay: DEFAULT_INTER_ITEM_DELAY,
            state: RunState::Idle,
            ledger: OutcomeLedger::new(),
        }
    }

    /// Create an executor paced according to `config`
    pub fn from_config(operation: O, config: &ExecutorConfig) -> Self {
        Self::new(operation).with_inter_item_delay(config.inter_item_delay())
    }

    /// Set the observer that receives progress events
    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Set the pause between consecutive items
    pub fn with_inter_item_delay(mut self, delay: Duration) -> Self {
        self.inter_item_delay = delay;
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn ledger(&self) -> &OutcomeLedger {
        &self.ledger
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::capture(self.state, &self.ledger)
    }

    pub fn operation(&self) -> &O {
        &self.operation
    }

    pub fn inter_item_delay(&self) -> Duration {
        self.inter_item_delay
    }

    /// Run the operation over every item of `batch`, in order
    ///
    /// Returns `None` without touching any state when the batch is empty.
    pub async fn run(&mut self, batch: impl IntoIterator<Item = ItemDescriptor>) -> Option<Outcome> {
        self.run_cancellable(batch, &CancellationToken::new()).await
    }

    /// Like [`run`](Self::run), stopping early once `token` is cancelled
    pub async fn run_cancellable(
        &mut self,
        batch: impl IntoIterator<Item = ItemDescriptor>,
        token: &CancellationToken,
    ) -> Option<Outcome> {
        let batch: Vec<ItemDescriptor> = batch.into_iter().collect();
        if batch.is_empty() {
            info!("Bulk run requested with an empty batch, nothing selected");
            self.observer.on_event(&ProgressEvent::NothingSelected);
            return None;
        }
        Some(self.execute_batch(batch, token).await)
    }

    /// Re-run only the items that failed in the last run
    ///
    /// Items a cancelled run never reached are retried too, after the
    /// failures. The retry is a fresh run: its ledger starts at
    /// `total = previous failures + pending` and does not carry prior
    /// successes.
    pub async fn retry_failures(&mut self) -> Option<Outcome> {
        self.retry_failures_cancellable(&CancellationToken::new())
            .await
    }

    /// Like [`retry_failures`](Self::retry_failures), stopping early once `token` is cancelled
    pub async fn retry_failures_cancellable(
        &mut self,
        token: &CancellationToken,
    ) -> Option<Outcome> {
        if !self.ledger.has_retryable() {
            info!("Retry requested but the last run left nothing to retry");
            self.observer.on_event(&ProgressEvent::NothingToRetry);
            return None;
        }
        info!(
            failed = self.ledger.failures().len(),
            pending = self.ledger.pending().len(),
            "Retrying failed items"
        );
        let batch = self.ledger.take_retry_batch();
        Some(self.execute_batch(batch, token).await)
    }

    async fn execute_batch(
        &mut self,
        batch: Vec<ItemDescriptor>,
        token: &CancellationToken,
    ) -> Outcome {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let total = batch.len();

        self.state = RunState::Running;
        self.ledger.reset(total);
        info!(%run_id, total, "Bulk run started");
        self.emit(|snapshot| ProgressEvent::RunStarted { run_id, snapshot });

        let mut run = ActiveRun::new(self, run_id, batch);
        let mut cancelled = false;
        while let Some(item) = run.start_next() {
            let index = total - run.queue.len() - 1;
            let executor = &mut *run.executor;
            executor.ledger.begin_item(item.clone());
            debug!(%run_id, index, item = %item, "Processing item");
            executor.emit(|snapshot| ProgressEvent::ItemStarted { run_id, snapshot });

            let failure = match executor.invoke(&item).await {
                Ok(()) => {
                    executor.ledger.record_success();
                    None
                }
                Err(reason) => {
                    warn!(%run_id, index, item = %item, reason = %reason, "Item failed");
                    executor.ledger.record_failure(item.clone(), reason.clone());
                    Some(reason)
                }
            };
            run.in_flight = None;
            run.executor.emit(|snapshot| ProgressEvent::ItemFinished {
                run_id,
                item,
                failure,
                snapshot,
            });

            if run.queue.is_empty() {
                break;
            }
            if token.is_cancelled() || !run.executor.pause(token).await {
                let rest = std::mem::take(&mut run.queue);
                info!(
                    %run_id,
                    completed = run.executor.ledger.completed(),
                    pending = rest.len(),
                    total,
                    "Bulk run cancelled"
                );
                run.executor.ledger.defer(rest);
                cancelled = true;
                break;
            }
        }
        run.finished = true;
        drop(run);

        self.ledger.clear_current();
        self.state = RunState::Completed;
        let outcome = Outcome::from_ledger(run_id, &self.ledger, cancelled, started_at);
        info!(
            %run_id,
            total,
            succeeded = outcome.succeeded,
            failed = outcome.failed,
            summary = %outcome.summary,
            "Bulk run finished"
        );
        let finished = outcome.clone();
        self.emit(|snapshot| ProgressEvent::RunFinished {
            run_id,
            snapshot,
            outcome: finished,
        });
        outcome
    }

    /// Call the operation, converting an escaped panic into a failure
    async fn invoke(&self, item: &ItemDescriptor) -> Result<(), FailureReason> {
        match AssertUnwindSafe(self.operation.execute(item))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(item = %item, "Remote operation panicked: {}", message);
                Err(FailureReason::with_code(
                    format!("remote operation panicked: {}", message),
                    "adapter_panic",
                ))
            }
        }
    }

    /// Wait out the inter-item delay; `false` if cancelled meanwhile
    async fn pause(&self, token: &CancellationToken) -> bool {
        if self.inter_item_delay.is_zero() {
            return !token.is_cancelled();
        }
        tokio::select! {
            _ = tokio::time::sleep(self.inter_item_delay) => true,
            _ = token.cancelled() => false,
        }
    }

    fn emit(&self, event: impl FnOnce(ProgressSnapshot) -> ProgressEvent) {
        let snapshot = ProgressSnapshot::capture(self.state, &self.ledger);
        self.observer.on_event(&event(snapshot));
    }
}

/// Guard over a run in progress
///
/// If the run future is dropped early, parks the in-flight and queued items
/// as pending and leaves the executor `Completed` with no current item.
struct ActiveRun<'a, O> {
    executor: &'a mut BatchExecutor<O>,
    run_id: Uuid,
    queue: VecDeque<ItemDescriptor>,
    in_flight: Option<ItemDescriptor>,
    finished: bool,
}

impl<'a, O> ActiveRun<'a, O> {
    fn new(executor: &'a mut BatchExecutor<O>, run_id: Uuid, batch: Vec<ItemDescriptor>) -> Self {
        Self {
            executor,
            run_id,
            queue: batch.into(),
            in_flight: None,
            finished: false,
        }
    }

    fn start_next(&mut self) -> Option<ItemDescriptor> {
        let item = self.queue.pop_front()?;
        self.in_flight = Some(item.clone());
        Some(item)
    }
}

impl<O> Drop for ActiveRun<'_, O> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let abandoned: Vec<ItemDescriptor> = self
            .in_flight
            .take()
            .into_iter()
            .chain(self.queue.drain(..))
            .collect();
        warn!(
            run_id = %self.run_id,
            pending = abandoned.len(),
            "Bulk run dropped before finishing"
        );
        self.executor.ledger.defer(abandoned);
        self.executor.ledger.clear_current();
        self.executor.state = RunState::Completed;
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
