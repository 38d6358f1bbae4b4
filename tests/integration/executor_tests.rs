//! Executor integration tests
//!
//! End-to-end runs through the public API: outcome ledgers, ordering,
//! retry scoping and the empty-batch guard.

#[cfg(test)]
mod tests {
    use crate::common::{BatchFactory, ScriptedOperation, recorded_executor};
    use async_trait::async_trait;
    use bulkrun::{
        BatchExecutor, FailureReason, ItemDescriptor, ProgressEvent, RemoteOperation, RunState,
        RunSummary,
    };
    use mockall::{Sequence, mock};
    use std::time::Duration;

    mock! {
        pub Operation {}

        #[async_trait]
        impl RemoteOperation for Operation {
            async fn execute(&self, item: &ItemDescriptor) -> Result<(), FailureReason>;
        }
    }

    // ==================== End-to-End Scenarios ====================

    /// Three items, the second one rate limited
    #[tokio::test]
    async fn test_scenario_mixed_outcome() {
        let op = ScriptedOperation::new().fail("item2", "rate limited");
        let (mut executor, recorder) = recorded_executor(op.clone());

        let outcome = executor
            .run(BatchFactory::ids(&["item1", "item2", "item3"]))
            .await
            .expect("non-empty batch runs");

        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.completed, 3);
        assert_eq!(outcome.succeeded, 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].item.id, "item2");
        assert_eq!(outcome.failures[0].reason.message, "rate limited");
        assert_eq!(outcome.summary, RunSummary::Mixed);

        match recorder.events().last() {
            Some(ProgressEvent::RunFinished { outcome: reported, .. }) => {
                assert_eq!(*reported, outcome)
            }
            other => panic!("expected RunFinished, got {:?}", other),
        }
    }

    /// Five items that all fail, then succeed on retry
    #[tokio::test]
    async fn test_scenario_all_failed_then_retried() {
        let op = ScriptedOperation::new().fail_everything("backend unavailable");
        let (mut executor, _) = recorded_executor(op.clone());

        let first = executor.run(BatchFactory::channels(5)).await.unwrap();
        assert_eq!(first.summary, RunSummary::AllFailed);
        assert_eq!(first.failures.len(), 5);

        op.heal();
        op.clear_calls();
        let retry = executor.retry_failures().await.unwrap();

        assert_eq!(op.calls(), vec!["ch-1", "ch-2", "ch-3", "ch-4", "ch-5"]);
        assert_eq!(retry.total, 5);
        assert_eq!(retry.succeeded, 5);
        assert_eq!(retry.failed, 0);
        assert_eq!(retry.summary, RunSummary::AllSucceeded);
    }

    /// Empty batch on a fresh executor
    #[tokio::test]
    async fn test_scenario_empty_batch() {
        let op = ScriptedOperation::new();
        let (mut executor, recorder) = recorded_executor(op.clone());

        assert!(executor.run(Vec::new()).await.is_none());

        assert_eq!(executor.state(), RunState::Idle);
        assert_eq!(executor.ledger().completed(), 0);
        assert!(op.calls().is_empty());
        assert_eq!(recorder.events(), vec![ProgressEvent::NothingSelected]);
    }

    // ==================== Retry Scoping ====================

    #[tokio::test]
    async fn test_retry_leaves_successes_untouched() {
        let op = ScriptedOperation::new()
            .fail("ch-2", "timeout")
            .fail("ch-4", "timeout");
        let (mut executor, _) = recorded_executor(op.clone());

        let first = executor.run(BatchFactory::channels(5)).await.unwrap();
        assert_eq!(first.succeeded, 3);

        op.clear_calls();
        let retry = executor.retry_failures().await.unwrap();

        assert_eq!(op.calls(), vec!["ch-2", "ch-4"]);
        assert_eq!(retry.total, 2);
        // The earlier outcome is a snapshot and is not rewritten by the retry
        assert_eq!(first.succeeded, 3);
        assert_eq!(first.failed, 2);
    }

    #[tokio::test]
    async fn test_repeated_retries_shrink_the_batch() {
        let op = ScriptedOperation::new()
            .fail("a", "x")
            .fail("b", "x")
            .fail("c", "x");
        let (mut executor, _) = recorded_executor(op.clone());
        executor.run(BatchFactory::ids(&["a", "b", "c", "d"])).await.unwrap();

        op.recover("a");
        let retry = executor.retry_failures().await.unwrap();
        assert_eq!(retry.total, 3);
        assert_eq!(retry.failed, 2);

        op.heal();
        let retry = executor.retry_failures().await.unwrap();
        assert_eq!(retry.total, 2);
        assert_eq!(retry.summary, RunSummary::AllSucceeded);
        assert!(executor.retry_failures().await.is_none());
    }

    // ==================== Mocked Operation ====================

    #[tokio::test]
    async fn test_calls_follow_batch_order() {
        let mut mock = MockOperation::new();
        let mut seq = Sequence::new();
        for id in ["z", "x", "y"] {
            mock.expect_execute()
                .withf(move |item: &ItemDescriptor| item.id == id)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }

        let mut executor = BatchExecutor::new(mock).with_inter_item_delay(Duration::ZERO);
        let outcome = executor.run(BatchFactory::ids(&["z", "x", "y"])).await.unwrap();
        assert_eq!(outcome.summary, RunSummary::AllSucceeded);
    }

    #[tokio::test]
    async fn test_empty_batch_never_calls_operation() {
        let mut mock = MockOperation::new();
        mock.expect_execute().never();

        let mut executor = BatchExecutor::new(mock);
        assert!(executor.run(Vec::new()).await.is_none());
        assert!(executor.retry_failures().await.is_none());
    }

    #[tokio::test]
    async fn test_failure_code_is_preserved() {
        let mut mock = MockOperation::new();
        mock.expect_execute()
            .returning(|_| Err(FailureReason::with_code("Too many requests", "rate_limited")));

        let mut executor = BatchExecutor::new(mock).with_inter_item_delay(Duration::ZERO);
        let outcome = executor.run(BatchFactory::ids(&["a", "b"])).await.unwrap();

        assert_eq!(outcome.summary, RunSummary::AllFailed);
        assert!(
            outcome
                .failures
                .iter()
                .all(|f| f.reason.code.as_deref() == Some("rate_limited"))
        );
    }
}
