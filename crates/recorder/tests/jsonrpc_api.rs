//! Integration tests for `POST /jsonrpc` paths that never reach a live
//! database.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{body_json, build_test_app, get, post_json};

#[tokio::test]
async fn unknown_method_gets_structured_error_keyed_by_id() {
    let body = json!({ "jsonrpc": "2.0", "id": 99, "method": "deleteEverything", "params": {} });
    let response = post_json(build_test_app(), "/jsonrpc", body.to_string()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "jsonrpc": "2.0",
            "error": { "code": -32601, "message": "Unknown method" },
            "id": 99
        })
    );
}

#[tokio::test]
async fn missing_method_is_unknown() {
    let body = json!({ "jsonrpc": "2.0", "id": "req-1" });
    let response = post_json(build_test_app(), "/jsonrpc", body.to_string()).await;

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], -32601);
    assert_eq!(json["id"], "req-1");
}

#[tokio::test]
async fn record_without_object_params_is_invalid() {
    let body = json!({ "jsonrpc": "2.0", "id": 5, "method": "recordChrono", "params": [1, 2] });
    let response = post_json(build_test_app(), "/jsonrpc", body.to_string()).await;

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], -32602);
    assert_eq!(json["id"], 5);
    assert!(json.get("result").is_none());
}

#[tokio::test]
async fn storage_failure_is_reported_with_driver_message() {
    let body = json!({
        "jsonrpc": "2.0",
        "id": 1715938200000_i64,
        "method": "recordChrono",
        "params": { "filter": { "userId": "all" }, "data": { "timelogs": [] } }
    });
    let response = post_json(build_test_app(), "/jsonrpc", body.to_string()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], -32000);
    assert!(!json["error"]["message"].as_str().unwrap().is_empty());
    assert_eq!(json["id"], 1715938200000_i64);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let big = "x".repeat(4096);
    let body = json!({ "jsonrpc": "2.0", "id": 1, "method": "recordChrono", "params": { "blob": big } });
    let response = post_json(build_test_app(), "/jsonrpc", body.to_string()).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn health_reports_degraded_when_database_unreachable() {
    let response = get(build_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}
