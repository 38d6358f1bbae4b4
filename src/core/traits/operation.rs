//! Remote operation trait definitions
//!
//! Defines the unit of remote work the batch executor performs once per item

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

use crate::core::batch::{FailureReason, ItemDescriptor};

/// One slow, failure-prone remote call per batch item
///
/// # Contract
///
/// 1. **Normalized failures**: every transport, status and parsing problem is
///    returned as a [`FailureReason`]; nothing escapes as a panic
/// 2. **No retries**: retrying is a batch-level decision made by the caller
/// 3. **No timeouts in the core**: timeout policy belongs to the adapter
/// 4. **Independent calls**: no state is carried from one item to the next
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
///
/// #[async_trait]
/// impl RemoteOperation for ScreenshotCapture {
///     async fn execute(&self, item: &ItemDescriptor) -> Result<(), FailureReason> {
///         self.client.capture(&item.id).await.map_err(FailureReason::from)
///     }
/// }
/// ```
#[async_trait]
pub trait RemoteOperation: Send + Sync {
    /// Perform the operation for one item
    async fn execute(&self, item: &ItemDescriptor) -> Result<(), FailureReason>;
}

#[async_trait]
impl<T: RemoteOperation + ?Sized> RemoteOperation for Box<T> {
    async fn execute(&self, item: &ItemDescriptor) -> Result<(), FailureReason> {
        (**self).execute(item).await
    }
}

#[async_trait]
impl<T: RemoteOperation + ?Sized> RemoteOperation for Arc<T> {
    async fn execute(&self, item: &ItemDescriptor) -> Result<(), FailureReason> {
        (**self).execute(item).await
    }
}

/// Adapts an async closure into a [`RemoteOperation`]
///
/// The closure receives an owned clone of the item so the returned future
/// does not borrow from the batch.
pub struct FnOperation<F> {
    operation: F,
}

impl<F, Fut> FnOperation<F>
where
    F: Fn(ItemDescriptor) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), FailureReason>> + Send,
{
    pub fn new(operation: F) -> Self {
        Self { operation }
    }
}

#[async_trait]
impl<F, Fut> RemoteOperation for FnOperation<F>
where
    F: Fn(ItemDescriptor) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), FailureReason>> + Send,
{
    async fn execute(&self, item: &ItemDescriptor) -> Result<(), FailureReason> {
        (self.operation)(item.clone()).await
    }
}
