//! Integration tests for the readiness probe.
//!
//! These tests require a running server (cargo run -p kitchenhub-server).
//!
//! Run with: cargo test -p kitchenhub-integration-tests -- --ignored

use kitchenhub_integration_tests::{base_url, client};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
#[ignore = "Requires running kitchenhub-server"]
async fn test_health_reports_ready_with_version() {
    let resp = client()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
    assert!(body["version"].is_string());
    assert!(
        body["timestamp"]
            .as_str()
            .is_some_and(|t| t.contains('T')),
        "timestamp should be RFC 3339"
    );
}
