//! Runtime path resolution for the bridge socket.

use crate::{ChannelError, ChannelResult};
use std::path::PathBuf;

/// Base runtime directory name under the home directory.
const BASE_DIR_NAME: &str = ".softgate";
/// Socket filename under the base runtime directory.
const SOCKET_NAME: &str = "bridge.sock";
/// Environment variable overriding the socket path entirely.
const SOCKET_ENV: &str = "SOFTGATE_SOCKET";

/// Resolve the bridge socket path (`~/.softgate/bridge.sock`).
///
/// `SOFTGATE_SOCKET` overrides the default when set to a non-empty value.
pub fn default_socket_path() -> ChannelResult<PathBuf> {
    socket_path_from(std::env::var(SOCKET_ENV).ok().as_deref(), dirs::home_dir())
}

fn socket_path_from(env_value: Option<&str>, home: Option<PathBuf>) -> ChannelResult<PathBuf> {
    if let Some(value) = env_value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    let home = home
        .ok_or_else(|| ChannelError::Path("Could not determine home directory".to_string()))?;
    Ok(home.join(BASE_DIR_NAME).join(SOCKET_NAME))
}
