//! Types shared across the vendor SDK boundary.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// How the vendor presents its login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginBehavior {
    /// Prefer the native vendor app, fall back to a browser flow.
    #[default]
    NativeWithFallback,
    /// Native vendor app only.
    NativeOnly,
    /// Browser flow only.
    WebOnly,
    /// Embedded web view only.
    WebViewOnly,
}

impl LoginBehavior {
    /// Parse a wire token sent by a host. `None` for anything outside the
    /// four recognized tokens.
    pub fn from_wire(token: &str) -> Option<Self> {
        match token {
            "nativeWithFallback" => Some(LoginBehavior::NativeWithFallback),
            "nativeOnly" => Some(LoginBehavior::NativeOnly),
            "webOnly" => Some(LoginBehavior::WebOnly),
            "webViewOnly" => Some(LoginBehavior::WebViewOnly),
            _ => None,
        }
    }

    /// The wire token for this behavior.
    pub fn as_wire(&self) -> &'static str {
        match self {
            LoginBehavior::NativeWithFallback => "nativeWithFallback",
            LoginBehavior::NativeOnly => "nativeOnly",
            LoginBehavior::WebOnly => "webOnly",
            LoginBehavior::WebViewOnly => "webViewOnly",
        }
    }
}

/// An access token as the vendor reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessToken {
    pub token: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub permissions: Vec<String>,
    pub declined_permissions: Vec<String>,
}

/// A failure reported by the vendor SDK.
///
/// The code travels to hosts verbatim, so it stays whatever string the
/// vendor produced.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code}: {message}")]
pub struct SdkError {
    pub code: String,
    pub message: String,
}

impl SdkError {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// Terminal outcome of one login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success(AccessToken),
    Cancelled,
    Failure(SdkError),
}

/// A live foreground surface the vendor can present its login UI through.
#[derive(Debug, Clone)]
pub struct UiHost {
    id: Uuid,
    label: String,
}

impl UiHost {
    pub fn new(label: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.to_string(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Request code the vendor multiplexes its login UI results under.
pub const LOGIN_REQUEST_CODE: i32 = 64206;

/// Platform result code for a completed UI flow.
pub const RESULT_OK: i32 = -1;

/// Platform result code for a dismissed UI flow.
pub const RESULT_CANCELLED: i32 = 0;

/// A platform-level UI result event.
///
/// When the vendor login UI runs out of process, its outcome comes back as
/// one of these instead of a direct observer call.
#[derive(Debug, Clone)]
pub struct UiEvent {
    pub request_code: i32,
    pub result_code: i32,
    /// Vendor-specific data accompanying the result.
    pub payload: Option<serde_json::Value>,
}

impl UiEvent {
    pub fn new(request_code: i32, result_code: i32) -> Self {
        Self {
            request_code,
            result_code,
            payload: None,
        }
    }

    pub fn with_payload(
        request_code: i32,
        result_code: i32,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            request_code,
            result_code,
            payload: Some(payload),
        }
    }
}
