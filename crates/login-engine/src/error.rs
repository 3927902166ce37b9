//! Engine error taxonomy.

use thiserror::Error;

/// Errors surfaced by the login engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The behavior token in a login call is not one the vendor knows.
    #[error("unknown login behavior: {token}")]
    UnknownLoginBehavior { token: String },

    /// A login attempt is already waiting for its outcome.
    #[error("a login attempt is already in progress")]
    LoginInProgress,

    /// No UI host is attached, so the vendor has nowhere to present.
    #[error("no UI host is attached")]
    NoUiHost,

    /// The vendor SDK reported a failure.
    #[error("{message}")]
    Sdk { code: String, message: String },

    /// The engine went away while a login attempt was waiting.
    #[error("the login attempt was interrupted")]
    LoginInterrupted,
}

impl EngineError {
    /// Stable error code a host sees in an error reply. Vendor failures
    /// keep the vendor's own code.
    pub fn code(&self) -> &str {
        match self {
            EngineError::UnknownLoginBehavior { .. } => "unknown_login_behavior",
            EngineError::LoginInProgress => "login_already_in_progress",
            EngineError::NoUiHost => "no_ui_host",
            EngineError::Sdk { code, .. } => code,
            EngineError::LoginInterrupted => "login_interrupted",
        }
    }
}

impl From<login_sdk::SdkError> for EngineError {
    fn from(err: login_sdk::SdkError) -> Self {
        EngineError::Sdk {
            code: err.code,
            message: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = EngineError::UnknownLoginBehavior {
            token: "dialogOnly".to_string(),
        };
        assert_eq!(err.code(), "unknown_login_behavior");
        assert_eq!(EngineError::LoginInProgress.code(), "login_already_in_progress");
        assert_eq!(EngineError::NoUiHost.code(), "no_ui_host");
        assert_eq!(EngineError::LoginInterrupted.code(), "login_interrupted");
    }

    #[test]
    fn test_sdk_error_keeps_vendor_code() {
        let err: EngineError = login_sdk::SdkError::new("net_down", "network unreachable").into();
        assert_eq!(err.code(), "net_down");
        assert_eq!(err.to_string(), "network unreachable");
    }

    #[test]
    fn test_unknown_behavior_message_names_the_token() {
        let err = EngineError::UnknownLoginBehavior {
            token: "dialogOnly".to_string(),
        };
        assert_eq!(err.to_string(), "unknown login behavior: dialogOnly");
    }
}
