//! HTTP adapter integration tests
//!
//! Runs `HttpOperation` against a wiremock backend and checks that every
//! failure mode is normalized into a failure reason with a stable code.

#[cfg(test)]
mod tests {
    use crate::common::BatchFactory;
    use bulkrun::config::RemoteConfig;
    use bulkrun::{
        BatchExecutor, HttpOperation, ItemDescriptor, OperationKind, RemoteOperation, RunSummary,
    };
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn remote(server: &MockServer) -> RemoteConfig {
        RemoteConfig {
            base_url: server.uri(),
            api_key: Some("service-key".to_string()),
            timeout_seconds: 5,
            ..RemoteConfig::default()
        }
    }

    fn stats_operation(server: &MockServer) -> HttpOperation {
        HttpOperation::new(OperationKind::StatsFetch, &remote(server)).unwrap()
    }

    fn channel() -> ItemDescriptor {
        ItemDescriptor::new("ch-1")
            .with_label("Channel 1")
            .with_attribute("url", "https://video.example.com/@one")
    }

    // ==================== Success Paths ====================

    #[tokio::test]
    async fn test_success_sends_item_and_bearer_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/functions/v1/fetch-channel-stats"))
            .and(header("authorization", "Bearer service-key"))
            .and(body_partial_json(json!({
                "id": "ch-1",
                "label": "Channel 1",
                "attributes": {"url": "https://video.example.com/@one"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let result = stats_operation(&server).execute(&channel()).await;
        assert!(result.is_ok(), "unexpected failure: {:?}", result);
    }

    #[tokio::test]
    async fn test_empty_body_counts_as_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        assert!(stats_operation(&server).execute(&channel()).await.is_ok());
    }

    #[tokio::test]
    async fn test_function_override_changes_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/functions/v1/shoot-v2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = remote(&server);
        config
            .functions
            .insert("screenshot".to_string(), "shoot-v2".to_string());
        let op = HttpOperation::new(OperationKind::ScreenshotCapture, &config).unwrap();

        assert!(op.execute(&channel()).await.is_ok());
    }

    // ==================== Failure Normalization ====================

    #[tokio::test]
    async fn test_rate_limit_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let reason = stats_operation(&server)
            .execute(&channel())
            .await
            .unwrap_err();
        assert_eq!(reason.message, "rate limited");
        assert_eq!(reason.code.as_deref(), Some("rate_limited"));
    }

    #[tokio::test]
    async fn test_server_error_uses_body_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "quota exhausted"})),
            )
            .mount(&server)
            .await;

        let reason = stats_operation(&server)
            .execute(&channel())
            .await
            .unwrap_err();
        assert_eq!(reason.message, "quota exhausted");
        assert_eq!(reason.code.as_deref(), Some("http_500"));
    }

    #[tokio::test]
    async fn test_success_false_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": false, "error": "channel is private"})),
            )
            .mount(&server)
            .await;

        let reason = stats_operation(&server)
            .execute(&channel())
            .await
            .unwrap_err();
        assert_eq!(reason.message, "channel is private");
        assert_eq!(reason.code.as_deref(), Some("remote_rejected"));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let reason = stats_operation(&server)
            .execute(&channel())
            .await
            .unwrap_err();
        assert_eq!(reason.code.as_deref(), Some("malformed_response"));
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let config = RemoteConfig {
            timeout_seconds: 1,
            ..remote(&server)
        };
        let op = HttpOperation::new(OperationKind::TypeGeneration, &config).unwrap();

        let reason = op.execute(&channel()).await.unwrap_err();
        assert_eq!(reason.code.as_deref(), Some("timeout"));
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let config = RemoteConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_seconds: 2,
            ..RemoteConfig::default()
        };
        let op = HttpOperation::new(OperationKind::KeywordGeneration, &config).unwrap();

        let reason = op.execute(&channel()).await.unwrap_err();
        assert_eq!(reason.code.as_deref(), Some("network"));
    }

    // ==================== Executor over HTTP ====================

    #[tokio::test]
    async fn test_batch_over_http_records_rate_limited_item() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"id": "ch-2"})))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error": "rate limited"})))
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let mut executor =
            BatchExecutor::new(stats_operation(&server)).with_inter_item_delay(Duration::ZERO);
        let outcome = executor.run(BatchFactory::channels(3)).await.unwrap();

        assert_eq!(outcome.succeeded, 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.failures[0].item.id, "ch-2");
        assert_eq!(outcome.failures[0].reason.message, "rate limited");
        assert_eq!(outcome.summary, RunSummary::Mixed);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
    }
}
