//! The `logOut` handler.

use crate::state::BridgeState;
use bridge_ipc::{BridgeServer, Method, Reply};
use serde_json::Value;

/// Register the logout handler. Always succeeds, with a null payload.
pub async fn register(server: &BridgeServer, state: BridgeState) {
    server
        .register_handler(Method::LogOut, move |call| {
            let session = state.session.clone();
            async move {
                session.log_out();
                Reply::success(&call.id, Value::Null)
            }
        })
        .await;
}
