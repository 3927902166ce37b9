//! Health and shutdown handlers.

use bridge_ipc::{BridgeServer, Method, Reply};
use tracing::info;

/// Register health and shutdown handlers.
pub async fn register(server: &BridgeServer) {
    // Health check
    server
        .register_handler(Method::Health, |call| async move {
            Reply::success(
                &call.id,
                serde_json::json!({
                    "status": "ok",
                    "version": env!("CARGO_PKG_VERSION"),
                }),
            )
        })
        .await;

    // Shutdown
    let shutdown_tx = server.shutdown_sender();
    server
        .register_handler(Method::Shutdown, move |call| {
            let tx = shutdown_tx.clone();
            async move {
                let _ = tx.send(());
                Reply::success(&call.id, serde_json::json!({ "status": "shutting_down" }))
            }
        })
        .await;

    info!("Registered health handlers");
}
