//! Health endpoint integration tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{build_app, test_config};

#[tokio::test]
async fn test_health_returns_ok_with_timestamp() {
    let (server, _reporter) = build_app(test_config("http://127.0.0.1:1"));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");

    let timestamp = body["timestamp"].as_str().expect("timestamp is a string");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_health_has_no_extra_fields() {
    let (server, _reporter) = build_app(test_config("http://127.0.0.1:1"));

    let body: Value = server.get("/health").await.json();
    let object = body.as_object().expect("health body is an object");

    assert_eq!(object.len(), 2);
}

#[tokio::test]
async fn test_wrong_method_on_health_is_not_found() {
    let (server, reporter) = build_app(test_config("http://127.0.0.1:1"));

    let response = server.post("/health").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), serde_json::json!({"error": "Not found"}));
    assert_eq!(reporter.count(), 0);
}
