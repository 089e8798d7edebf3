mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

use common::{CountingLogger, DenyingHook, test_server};
use gatehook::prelude::*;

#[tokio::test]
async fn granted_request_reaches_the_handler() {
    let server = test_server(Arc::new(PassHook::default()));

    let response = server.get("/echo").add_query_param("foo", "bar").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({"foo": "bar"}));
}

#[tokio::test]
async fn log_runs_exactly_once_per_successful_request() {
    let logger = Arc::new(CountingLogger::default());
    let server = test_server(Arc::new(PassHook::new(logger.clone())));

    server.get("/echo").await.assert_status_ok();
    assert_eq!(logger.calls(), 1);

    server.get("/echo").await.assert_status_ok();
    assert_eq!(logger.calls(), 2);
}

#[tokio::test]
async fn refusal_returns_403_with_the_model_body() {
    let server = test_server(Arc::new(DenyingHook));

    let response = server.get("/echo").await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<serde_json::Value>(), json!({"PASS": "N"}));
}

#[tokio::test]
async fn fault_is_translated_into_the_error_envelope() {
    let logger = Arc::new(CountingLogger::default());
    let server = test_server(Arc::new(PassHook::new(logger.clone())));

    let response = server.get("/fail").add_query_param("id", "42").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], "42");
    assert_eq!(body["errorMessage"], "echo backend rejected the request");
    assert_eq!(body["errorType"], "EchoUnavailable");
    assert!(body["errorCause"].is_string());

    // log is a success-path step only
    assert_eq!(logger.calls(), 0);
}

#[tokio::test]
async fn health_is_not_subject_to_hook_dispatch() {
    let server = test_server(Arc::new(DenyingHook));

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}
