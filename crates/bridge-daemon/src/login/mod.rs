//! Handlers for the vendor login surface.

pub mod log_in;
pub mod log_out;
pub mod token;

use crate::state::BridgeState;
use bridge_ipc::BridgeServer;

/// Register the three login surface handlers.
pub async fn register_handlers(server: &BridgeServer, state: BridgeState) {
    log_in::register(server, state.clone()).await;
    log_out::register(server, state.clone()).await;
    token::register(server, state).await;
}
