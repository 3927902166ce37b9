//! The `logIn` handler.

use crate::state::BridgeState;
use bridge_ipc::{error_codes, BridgeServer, Method, Reply};
use serde_json::Value;

/// Register the interactive login handler.
///
/// The reply resolves only once the vendor reports an outcome, so a call
/// can stay open for as long as the user keeps the login UI around.
pub async fn register(server: &BridgeServer, state: BridgeState) {
    server
        .register_handler(Method::LogIn, move |call| {
            let session = state.session.clone();
            async move {
                let behavior = call
                    .args
                    .as_ref()
                    .and_then(|a| a.get("behavior"))
                    .and_then(|v| v.as_str())
                    .map(String::from);

                let Some(behavior) = behavior else {
                    return Reply::error(
                        &call.id,
                        error_codes::INVALID_ARGUMENTS,
                        "behavior is required",
                    );
                };

                let permissions = match call.args.as_ref().and_then(|a| a.get("permissions")) {
                    None | Some(Value::Null) => Vec::new(),
                    Some(value) => {
                        let Some(items) = value.as_array() else {
                            return Reply::error(
                                &call.id,
                                error_codes::INVALID_ARGUMENTS,
                                "permissions must be an array of strings",
                            );
                        };
                        let mut permissions = Vec::with_capacity(items.len());
                        for item in items {
                            let Some(name) = item.as_str() else {
                                return Reply::error(
                                    &call.id,
                                    error_codes::INVALID_ARGUMENTS,
                                    "permissions must be an array of strings",
                                );
                            };
                            permissions.push(name.to_string());
                        }
                        permissions
                    }
                };

                match session.log_in(&behavior, permissions).await {
                    Ok(body) => match serde_json::to_value(&body) {
                        Ok(value) => Reply::success(&call.id, value),
                        Err(e) => Reply::error(
                            &call.id,
                            error_codes::INTERNAL_ERROR,
                            &format!("Failed to encode reply: {}", e),
                        ),
                    },
                    Err(e) => Reply::error(&call.id, e.code(), &e.to_string()),
                }
            }
        })
        .await;
}
