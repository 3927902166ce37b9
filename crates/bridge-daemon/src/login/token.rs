//! The `getCurrentAccessToken` handler.

use crate::state::BridgeState;
use bridge_ipc::{error_codes, BridgeServer, Method, Reply};
use serde_json::Value;

/// Register the current-token handler. Replies with the token snapshot, or
/// a null payload when nobody is logged in. No side effects either way.
pub async fn register(server: &BridgeServer, state: BridgeState) {
    server
        .register_handler(Method::GetCurrentAccessToken, move |call| {
            let session = state.session.clone();
            async move {
                match session.current_access_token() {
                    Some(snapshot) => match serde_json::to_value(&snapshot) {
                        Ok(value) => Reply::success(&call.id, value),
                        Err(e) => Reply::error(
                            &call.id,
                            error_codes::INTERNAL_ERROR,
                            &format!("Failed to encode reply: {}", e),
                        ),
                    },
                    None => Reply::success(&call.id, Value::Null),
                }
            }
        })
        .await;
}
