//! Handler registration for the bridge server.

use crate::ipc::health;
use crate::login;
use crate::state::BridgeState;
use bridge_ipc::BridgeServer;
use tracing::info;

/// Register all bridge handlers.
pub async fn register_handlers(server: &BridgeServer, state: BridgeState) {
    health::register(server).await;
    login::register_handlers(server, state).await;

    info!("All bridge handlers registered");
}
