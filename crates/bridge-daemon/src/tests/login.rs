//! Wire-level scenarios for the `logIn` method.

use super::harness::{wait_until, TestBridge};
use bridge_ipc::Method;
use login_sdk::sandbox::SandboxDecision;
use login_sdk::{LoginBehavior, LoginSdk, UiEvent, LOGIN_REQUEST_CODE, RESULT_OK};
use serde_json::json;

#[tokio::test]
async fn test_log_in_reports_logged_in_with_token() {
    let bridge = TestBridge::start(SandboxDecision::Grant).await;

    let reply = bridge
        .client()
        .call_with_args(
            Method::LogIn,
            json!({
                "behavior": "nativeWithFallback",
                "permissions": ["email", "public_profile"],
            }),
        )
        .await
        .unwrap();

    assert!(reply.is_success());
    let result = reply.result.unwrap();
    assert_eq!(result["status"], "loggedIn");
    assert_eq!(
        result["accessToken"]["permissions"],
        json!(["email", "public_profile"])
    );
    assert!(result["accessToken"]["expires"].is_i64());
    assert!(result["accessToken"]["userId"]
        .as_str()
        .unwrap()
        .starts_with("sandbox-user-"));
}

#[tokio::test]
async fn test_log_in_configures_requested_behavior() {
    let bridge = TestBridge::start(SandboxDecision::Grant).await;

    bridge
        .client()
        .call_with_args(Method::LogIn, json!({ "behavior": "webViewOnly" }))
        .await
        .unwrap();

    assert_eq!(
        bridge.sdk.configured_behavior(),
        Some(LoginBehavior::WebViewOnly)
    );
}

#[tokio::test]
async fn test_log_in_cancelled_by_user() {
    let bridge = TestBridge::start(SandboxDecision::Cancel).await;

    let reply = bridge
        .client()
        .call_with_args(Method::LogIn, json!({ "behavior": "nativeWithFallback" }))
        .await
        .unwrap();

    assert!(reply.is_success());
    assert_eq!(reply.result.unwrap(), json!({ "status": "cancelledByUser" }));
}

#[tokio::test]
async fn test_log_in_failure_carries_vendor_code() {
    let bridge = TestBridge::start(SandboxDecision::Fail).await;

    let reply = bridge
        .client()
        .call_with_args(Method::LogIn, json!({ "behavior": "nativeWithFallback" }))
        .await
        .unwrap();

    assert!(!reply.is_success());
    let error = reply.error.unwrap();
    assert_eq!(error.code, "sandbox_login_failed");
    assert!(!error.message.is_empty());
}

#[tokio::test]
async fn test_log_in_rejects_unknown_behavior() {
    let bridge = TestBridge::start(SandboxDecision::Grant).await;

    let reply = bridge
        .client()
        .call_with_args(Method::LogIn, json!({ "behavior": "dialogOnly" }))
        .await
        .unwrap();

    let error = reply.error.unwrap();
    assert_eq!(error.code, "unknown_login_behavior");
    assert!(error.message.contains("dialogOnly"));
}

#[tokio::test]
async fn test_log_in_requires_behavior() {
    let bridge = TestBridge::start(SandboxDecision::Grant).await;

    let reply = bridge.client().call_method(Method::LogIn).await.unwrap();
    assert_eq!(reply.error.unwrap().code, "invalid_arguments");

    let reply = bridge
        .client()
        .call_with_args(Method::LogIn, json!({ "permissions": ["email"] }))
        .await
        .unwrap();
    assert_eq!(reply.error.unwrap().code, "invalid_arguments");
}

#[tokio::test]
async fn test_log_in_rejects_malformed_permissions() {
    let bridge = TestBridge::start(SandboxDecision::Grant).await;

    for args in [
        json!({ "behavior": "nativeOnly", "permissions": "email" }),
        json!({ "behavior": "nativeOnly", "permissions": [1, 2] }),
    ] {
        let reply = bridge
            .client()
            .call_with_args(Method::LogIn, args)
            .await
            .unwrap();
        assert_eq!(reply.error.unwrap().code, "invalid_arguments");
    }
}

#[tokio::test]
async fn test_null_permissions_mean_none_requested() {
    let bridge = TestBridge::start(SandboxDecision::Grant).await;

    let reply = bridge
        .client()
        .call_with_args(
            Method::LogIn,
            json!({ "behavior": "nativeOnly", "permissions": null }),
        )
        .await
        .unwrap();

    assert!(reply.is_success());
    assert_eq!(reply.result.unwrap()["accessToken"]["permissions"], json!([]));
}

#[tokio::test]
async fn test_second_log_in_rejected_while_first_pending() {
    let bridge = TestBridge::start(SandboxDecision::Defer).await;

    let first = {
        let client = bridge.client();
        tokio::spawn(async move {
            client
                .call_with_args(
                    Method::LogIn,
                    json!({ "behavior": "nativeWithFallback", "permissions": ["email"] }),
                )
                .await
                .unwrap()
        })
    };
    let session = bridge.state.session.clone();
    wait_until(move || session.login_pending()).await;

    let second = bridge
        .client()
        .call_with_args(Method::LogIn, json!({ "behavior": "nativeWithFallback" }))
        .await
        .unwrap();
    assert_eq!(second.error.unwrap().code, "login_already_in_progress");

    // Let the first attempt finish through the vendor's UI path.
    bridge
        .sdk
        .handle_ui_event(&UiEvent::new(LOGIN_REQUEST_CODE, RESULT_OK));

    let first = first.await.unwrap();
    assert_eq!(first.result.unwrap()["status"], "loggedIn");
}

#[tokio::test]
async fn test_no_ui_host_is_a_synchronous_error() {
    let bridge = TestBridge::start(SandboxDecision::Grant).await;
    bridge.state.session.detach_ui();

    let reply = bridge
        .client()
        .call_with_args(Method::LogIn, json!({ "behavior": "nativeWithFallback" }))
        .await
        .unwrap();

    assert_eq!(reply.error.unwrap().code, "no_ui_host");
}
