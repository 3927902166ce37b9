//! Translation from vendor outcomes to the wire reply shapes.

use crate::EngineError;
use bridge_protocol_types::{AccessTokenSnapshot, LoginReplyBody};
use login_sdk::{AccessToken, LoginOutcome};

/// The reply a resolved login attempt produces.
pub type LoginReply = Result<LoginReplyBody, EngineError>;

/// Snapshot an SDK token into its wire shape.
pub fn token_snapshot(token: &AccessToken) -> AccessTokenSnapshot {
    AccessTokenSnapshot {
        token: token.token.clone(),
        user_id: token.user_id.clone(),
        expires: token.expires_at,
        permissions: token.permissions.clone(),
        declined_permissions: token.declined_permissions.clone(),
    }
}

/// Map a terminal vendor outcome to the reply the waiting call gets.
///
/// Success and user cancellation are both successful replies; only a
/// vendor failure becomes an error, and it keeps the vendor's code.
pub fn login_reply(outcome: LoginOutcome) -> LoginReply {
    match outcome {
        LoginOutcome::Success(token) => Ok(LoginReplyBody::LoggedIn {
            access_token: token_snapshot(&token),
        }),
        LoginOutcome::Cancelled => Ok(LoginReplyBody::CancelledByUser),
        LoginOutcome::Failure(err) => Err(err.into()),
    }
}
