use axum::http::Method;
use serde_json::json;
use std::net::SocketAddr;

use gatehook::hook::pass_hook::{ERROR_CAUSE_KEY, ERROR_MESSAGE_KEY, ERROR_TYPE_KEY};
use gatehook::prelude::*;

fn request_parts() -> RequestParts {
    RequestParts::new(Method::GET, "/echo", SocketAddr::from(([127, 0, 0, 1], 8080)))
}

#[tokio::test]
async fn pre_handle_returns_the_literal_pass_grant() {
    let hook = PassHook::default();
    let mut envelope = DataWrapper::from_query(Some("a=1&b=2"));

    let model = hook
        .pre_handle(&mut envelope, &request_parts())
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&model).unwrap(), json!({"PASS": "Y"}));
}

#[tokio::test]
async fn authorize_returns_the_literal_pass_grant() {
    let hook = PassHook::default();
    let mut envelope = DataWrapper::new();

    let model = hook
        .authorize(&mut envelope, &request_parts())
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&model).unwrap(), json!({"PASS": "Y"}));
    assert!(model.is_pass());
}

#[tokio::test]
async fn grants_do_not_mutate_the_envelope() {
    let hook = PassHook::default();
    let mut envelope = DataWrapper::from_query(Some("a=1"));
    let before = envelope.clone();

    hook.pre_handle(&mut envelope, &request_parts()).await.unwrap();
    hook.authorize(&mut envelope, &request_parts()).await.unwrap();

    assert_eq!(envelope, before);
}

#[tokio::test]
async fn translate_error_extracts_message_cause_and_type() {
    let hook = PassHook::default();
    let fault = Fault::with_cause("IllegalState", "boom", std::io::Error::other("root"));

    let translated = hook
        .translate_error(&fault, DataWrapper::new(), &request_parts())
        .await;

    assert_eq!(translated.get(ERROR_MESSAGE_KEY), Some(&json!("boom")));
    assert_eq!(translated.get(ERROR_CAUSE_KEY), Some(&json!("root")));
    assert_eq!(translated.get(ERROR_TYPE_KEY), Some(&json!("IllegalState")));
}

// A fault without a distinct cause must not blow up inside error
// translation; it substitutes its own display form as the cause.
#[tokio::test]
async fn translate_error_without_a_cause_uses_the_fault_itself() {
    let hook = PassHook::default();
    let fault = Fault::new("IllegalState", "boom");

    let translated = hook
        .translate_error(&fault, DataWrapper::new(), &request_parts())
        .await;

    assert_eq!(translated.get(ERROR_MESSAGE_KEY), Some(&json!("boom")));
    assert_eq!(
        translated.get(ERROR_CAUSE_KEY),
        Some(&json!("IllegalState: boom"))
    );
    assert_eq!(translated.get(ERROR_TYPE_KEY), Some(&json!("IllegalState")));
}

#[tokio::test]
async fn translate_error_appends_after_existing_entries() {
    let hook = PassHook::default();
    let mut envelope = DataWrapper::new();
    envelope.put("userId", json!("u-1"));

    let fault = Fault::new("Timeout", "deadline exceeded");
    let translated = hook
        .translate_error(&fault, envelope, &request_parts())
        .await;

    let keys: Vec<&str> = translated.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec!["userId", ERROR_MESSAGE_KEY, ERROR_CAUSE_KEY, ERROR_TYPE_KEY]
    );
}
