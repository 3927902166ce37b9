//! CLI command implementations.

mod bridge;
mod login;

pub use bridge::{bridge_status, bridge_stop};
pub use login::{log_in, log_out, token};

use anyhow::Result;
use bridge_ipc::{default_socket_path, BridgeClient};
use std::path::PathBuf;
use tracing::debug;

/// Build a client for the bridge socket.
pub fn get_bridge_client(socket: Option<&str>) -> Result<BridgeClient> {
    let path = match socket {
        Some(path) => PathBuf::from(path),
        None => default_socket_path()?,
    };
    debug!(socket = %path.display(), "Using bridge socket");
    Ok(BridgeClient::new(&path))
}

/// Connect to the bridge, or fail with a hint when it is not running.
pub async fn require_bridge(socket: Option<&str>) -> Result<BridgeClient> {
    let client = get_bridge_client(socket)?;

    if !client.is_bridge_running().await {
        anyhow::bail!("Bridge is not running. Start it with 'softgate-bridge'");
    }

    Ok(client)
}
