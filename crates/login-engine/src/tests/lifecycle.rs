//! UI host lifecycle, logout, and token snapshot behavior.

use super::harness::{attached_session, sample_token, spawn_log_in, wait_until, MockLoginSdk};
use crate::LoginSession;
use bridge_protocol_types::LoginReplyBody;
use login_sdk::{LoginOutcome, UiEvent, UiHost, LOGIN_REQUEST_CODE, RESULT_OK};

#[tokio::test]
async fn test_attach_detach_reattach() {
    let mock = MockLoginSdk::new();
    let session = LoginSession::new(mock.clone());
    assert!(!session.has_ui());

    session.attach_ui(UiHost::new("window-1"));
    assert!(session.has_ui());

    session.detach_ui();
    assert!(!session.has_ui());

    session.attach_ui(UiHost::new("window-2"));
    assert!(session.has_ui());
}

#[tokio::test]
async fn test_detach_keeps_pending_login_alive() {
    let mock = MockLoginSdk::new();
    let session = attached_session(&mock);

    let call = spawn_log_in(&session, "nativeWithFallback", &["email"]);
    let waiter = mock.clone();
    wait_until(move || waiter.begin_count() == 1).await;

    session.detach_ui();
    assert!(session.login_pending());

    mock.deliver(LoginOutcome::Success(sample_token(&["email"])));
    assert!(matches!(
        call.await.unwrap(),
        Ok(LoginReplyBody::LoggedIn { .. })
    ));
}

#[tokio::test]
async fn test_login_after_reattach_presents_through_new_host() {
    let mock = MockLoginSdk::new();
    let session = attached_session(&mock);

    let call = spawn_log_in(&session, "nativeWithFallback", &[]);
    let waiter = mock.clone();
    wait_until(move || waiter.begin_count() == 1).await;
    mock.deliver(LoginOutcome::Cancelled);
    call.await.unwrap().unwrap();

    session.detach_ui();
    session.attach_ui(UiHost::new("second-window"));

    let call = spawn_log_in(&session, "nativeWithFallback", &[]);
    let waiter = mock.clone();
    wait_until(move || waiter.begin_count() == 2).await;
    mock.deliver(LoginOutcome::Cancelled);
    call.await.unwrap().unwrap();

    let begins = mock.begins.lock().unwrap().clone();
    assert_eq!(begins[0].0, "main-window");
    assert_eq!(begins[1].0, "second-window");
}

#[tokio::test]
async fn test_log_out_clears_vendor_session() {
    let mock = MockLoginSdk::new();
    let session = attached_session(&mock);
    *mock.token.lock().unwrap() = Some(sample_token(&["email"]));
    assert!(session.current_access_token().is_some());

    session.log_out();

    assert_eq!(*mock.logouts.lock().unwrap(), 1);
    assert_eq!(session.current_access_token(), None);
}

#[tokio::test]
async fn test_token_snapshot_matches_vendor_token() {
    let mock = MockLoginSdk::new();
    let session = attached_session(&mock);
    let token = sample_token(&["email", "public_profile"]);
    *mock.token.lock().unwrap() = Some(token.clone());

    let snapshot = session.current_access_token().unwrap();

    assert_eq!(snapshot.token, token.token);
    assert_eq!(snapshot.user_id, token.user_id);
    assert_eq!(snapshot.expires, token.expires_at);
    assert_eq!(snapshot.permissions, token.permissions);
    assert_eq!(snapshot.declined_permissions, token.declined_permissions);
}

#[tokio::test]
async fn test_token_snapshot_is_none_when_logged_out() {
    let mock = MockLoginSdk::new();
    let session = attached_session(&mock);

    assert_eq!(session.current_access_token(), None);
}

#[tokio::test]
async fn test_ui_events_forwarded_to_vendor() {
    let mock = MockLoginSdk::new();
    let session = attached_session(&mock);

    assert!(session.handle_ui_event(&UiEvent::new(LOGIN_REQUEST_CODE, RESULT_OK)));
    assert!(!session.handle_ui_event(&UiEvent::new(42, RESULT_OK)));

    assert_eq!(*mock.ui_events.lock().unwrap(), vec![LOGIN_REQUEST_CODE, 42]);
}
