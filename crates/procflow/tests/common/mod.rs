//! Common test utilities and helpers

use std::sync::Arc;
use std::time::Duration;

use procflow::{Client, RecordingNotifier};
use wiremock::MockServer;

/// Base path under the mock server, mirroring the real `/api` prefix
#[allow(dead_code)]
pub fn base_path(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

/// Client pointing at `server` that records every notification
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> (Client, Arc<RecordingNotifier>) {
    test_client_with_timeout(server, Duration::from_secs(5))
}

/// Like [`test_client`] with a custom per-call timeout
#[allow(dead_code)]
pub fn test_client_with_timeout(
    server: &MockServer,
    timeout: Duration,
) -> (Client, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let client = Client::builder()
        .base_path(base_path(server))
        .timeout(timeout)
        .notifier(notifier.clone())
        .build()
        .expect("Failed to build client");
    (client, notifier)
}

/// A stored process definition as the server returns it
#[allow(dead_code)]
pub fn definition_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": "employee onboarding",
        "version": "1.0.0",
        "status": "DRAFT",
        "createTime": "2024-03-01T10:00:00",
        "updateTime": "2024-03-02T08:30:00"
    })
}

/// A stored process node as the server returns it
#[allow(dead_code)]
pub fn node_json(id: i64, process_definition_id: i64, sort: i32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "processDefinitionId": process_definition_id,
        "name": format!("step-{}", sort),
        "type": "task",
        "config": {"assignee": "hr"},
        "sort": sort
    })
}
