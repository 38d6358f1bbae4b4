//! Scripted remote operations

use async_trait::async_trait;
use bulkrun::{FailureReason, ItemDescriptor, RemoteOperation};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Remote operation whose per-item results are set up front
///
/// Items without a scripted failure succeed. Clones share the script and
/// the call log, so a test can keep a handle after moving one into an
/// executor.
#[derive(Clone, Default)]
pub struct ScriptedOperation {
    failures: Arc<Mutex<HashMap<String, FailureReason>>>,
    fail_all: Arc<Mutex<Option<FailureReason>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedOperation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` fail with `reason`
    pub fn fail(self, id: &str, reason: &str) -> Self {
        self.failures
            .lock()
            .insert(id.to_string(), FailureReason::new(reason));
        self
    }

    /// Make every item fail with `reason`
    pub fn fail_everything(self, reason: &str) -> Self {
        *self.fail_all.lock() = Some(FailureReason::new(reason));
        self
    }

    /// Let `id` succeed from now on
    pub fn recover(&self, id: &str) {
        self.failures.lock().remove(id);
    }

    /// Clear every scripted failure
    pub fn heal(&self) {
        self.failures.lock().clear();
        *self.fail_all.lock() = None;
    }

    /// Ids passed to `execute`, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

#[async_trait]
impl RemoteOperation for ScriptedOperation {
    async fn execute(&self, item: &ItemDescriptor) -> Result<(), FailureReason> {
        self.calls.lock().push(item.id.clone());
        tokio::task::yield_now().await;

        if let Some(reason) = self.fail_all.lock().clone() {
            return Err(reason);
        }
        match self.failures.lock().get(&item.id) {
            Some(reason) => Err(reason.clone()),
            None => Ok(()),
        }
    }
}
