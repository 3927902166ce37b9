//! Host-facing login reply shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time wire projection of the SDK's current access token.
///
/// `expires` travels as epoch milliseconds so hosts can revive it directly
/// into their native datetime type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenSnapshot {
    pub token: String,
    pub user_id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expires: DateTime<Utc>,
    pub permissions: Vec<String>,
    pub declined_permissions: Vec<String>,
}

/// Body of a successful `logIn` reply.
///
/// User cancellation is a success on the wire, not an error; SDK failures
/// travel as a `ReplyError` carrying the SDK's own code and message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LoginReplyBody {
    LoggedIn { access_token: AccessTokenSnapshot },
    CancelledByUser,
}
