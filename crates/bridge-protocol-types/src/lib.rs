//! Wire protocol types for the Softgate bridge.
//!
//! A JSON-RPC-like protocol over Unix domain sockets: one [`MethodCall`] per
//! line in, one [`Reply`] per line out. These types are pure data; the
//! transport lives in `bridge-ipc`.

mod login;

pub use login::{AccessTokenSnapshot, LoginReplyBody};

use serde::{Deserialize, Serialize};

/// Methods the bridge dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Start an interactive vendor login.
    LogIn,
    /// Clear the vendor session.
    LogOut,
    /// Read the current access token without side effects.
    GetCurrentAccessToken,
    /// Daemon liveness probe.
    Health,
    /// Ask the daemon to exit.
    Shutdown,
}

impl Method {
    /// Wire name of this method.
    pub fn name(&self) -> &'static str {
        match self {
            Method::LogIn => "logIn",
            Method::LogOut => "logOut",
            Method::GetCurrentAccessToken => "getCurrentAccessToken",
            Method::Health => "health",
            Method::Shutdown => "shutdown",
        }
    }

    /// Look up a wire name. `None` means the method is not implemented.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "logIn" => Some(Method::LogIn),
            "logOut" => Some(Method::LogOut),
            "getCurrentAccessToken" => Some(Method::GetCurrentAccessToken),
            "health" => Some(Method::Health),
            "shutdown" => Some(Method::Shutdown),
            _ => None,
        }
    }
}

/// A single method invocation sent by a host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    /// Call ID, echoed back in the reply.
    pub id: String,
    /// Wire method name. Kept as a raw string so an unrecognized method can
    /// be answered with `not_implemented` instead of failing to parse.
    pub method: String,
    /// Method arguments (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<serde_json::Value>,
}

impl MethodCall {
    /// Create a call with an auto-generated ID.
    pub fn new(method: Method) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            method: method.name().to_string(),
            args: None,
        }
    }

    /// Create a call with arguments.
    pub fn with_args(method: Method, args: serde_json::Value) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            method: method.name().to_string(),
            args: Some(args),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Reply to a method call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// ID of the call this answers.
    pub id: String,
    /// Result payload. A null payload is still a success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error information (if failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReplyError>,
}

/// Error carried in a failed reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyError {
    /// Machine-readable code, e.g. `unknown_login_behavior`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Reply {
    /// Create a successful reply.
    pub fn success(id: &str, result: serde_json::Value) -> Self {
        Self {
            id: id.to_string(),
            result: Some(result),
            error: None,
        }
    }

    /// Create an error reply.
    pub fn error(id: &str, code: &str, message: &str) -> Self {
        Self {
            id: id.to_string(),
            result: None,
            error: Some(ReplyError {
                code: code.to_string(),
                message: message.to_string(),
                details: None,
            }),
        }
    }

    /// Create an error reply with structured details.
    pub fn error_with_details(
        id: &str,
        code: &str,
        message: &str,
        details: serde_json::Value,
    ) -> Self {
        Self {
            id: id.to_string(),
            result: None,
            error: Some(ReplyError {
                code: code.to_string(),
                message: message.to_string(),
                details: Some(details),
            }),
        }
    }

    /// Reply for a method name outside the bridge surface.
    pub fn not_implemented(id: &str, method: &str) -> Self {
        Self::error(
            id,
            error_codes::NOT_IMPLEMENTED,
            &format!("Method not implemented: {}", method),
        )
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check whether the reply is a success.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Protocol-level error codes. Domain codes come from the login engine.
pub mod error_codes {
    /// The request line was not valid JSON or not a method call.
    pub const PARSE_ERROR: &str = "parse_error";
    /// The method name is not part of the bridge surface.
    pub const NOT_IMPLEMENTED: &str = "not_implemented";
    /// Required arguments were missing or of the wrong shape.
    pub const INVALID_ARGUMENTS: &str = "invalid_arguments";
    /// The bridge failed internally while handling the call.
    pub const INTERNAL_ERROR: &str = "internal_error";
}
