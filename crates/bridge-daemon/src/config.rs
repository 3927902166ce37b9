//! Daemon configuration.

use anyhow::{anyhow, Result};
use bridge_ipc::default_socket_path;
use login_sdk::sandbox::SandboxDecision;
use std::path::PathBuf;

/// Bridge daemon configuration.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Path to the bridge Unix socket.
    pub socket_path: PathBuf,

    /// How the sandbox SDK completes login attempts.
    pub sandbox_decision: SandboxDecision,
}

impl BridgeConfig {
    /// Build a config from CLI values. The socket falls back to
    /// `SOFTGATE_SOCKET`, then to `~/.softgate/bridge.sock`.
    pub fn new(socket: Option<String>, sandbox_decision: &str) -> Result<Self> {
        let socket_path = match socket {
            Some(path) => PathBuf::from(path),
            None => default_socket_path()?,
        };

        Ok(Self {
            socket_path,
            sandbox_decision: parse_decision(sandbox_decision)?,
        })
    }
}

fn parse_decision(value: &str) -> Result<SandboxDecision> {
    match value {
        "grant" => Ok(SandboxDecision::Grant),
        "cancel" => Ok(SandboxDecision::Cancel),
        "fail" => Ok(SandboxDecision::Fail),
        "defer" => Ok(SandboxDecision::Defer),
        other => Err(anyhow!(
            "unknown sandbox decision '{}', expected grant, cancel, fail, or defer",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_socket_wins() {
        let config = BridgeConfig::new(Some("/tmp/test-bridge.sock".to_string()), "grant").unwrap();
        assert_eq!(config.socket_path, PathBuf::from("/tmp/test-bridge.sock"));
        assert_eq!(config.sandbox_decision, SandboxDecision::Grant);
    }

    #[test]
    fn test_every_decision_parses() {
        for (value, expected) in [
            ("grant", SandboxDecision::Grant),
            ("cancel", SandboxDecision::Cancel),
            ("fail", SandboxDecision::Fail),
            ("defer", SandboxDecision::Defer),
        ] {
            let config = BridgeConfig::new(Some("/tmp/b.sock".to_string()), value).unwrap();
            assert_eq!(config.sandbox_decision, expected);
        }
    }

    #[test]
    fn test_unknown_decision_is_rejected() {
        let err = BridgeConfig::new(Some("/tmp/b.sock".to_string()), "maybe").unwrap_err();
        assert!(err.to_string().contains("unknown sandbox decision"));
    }
}
