//! Softgate bridge daemon entry point.
//!
//! Usage: softgate-bridge [--socket <path>] [--sandbox-decision <decision>]
//!
//! If --socket is not provided, the daemon listens on `SOFTGATE_SOCKET` or
//! falls back to `~/.softgate/bridge.sock`.

use bridge_daemon::{ipc, BridgeConfig, BridgeState};
use bridge_ipc::BridgeServer;
use clap::Parser;
use login_sdk::sandbox::SandboxLoginSdk;
use login_sdk::UiHost;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::prelude::*;

/// Softgate bridge: vendor login over a local socket.
#[derive(Parser, Debug)]
#[command(name = "softgate-bridge")]
#[command(about = "Exposes vendor login, logout, and token queries over a local socket")]
struct Args {
    /// Path to the bridge socket.
    #[arg(long, env = "SOFTGATE_SOCKET")]
    socket: Option<String>,

    /// How the sandbox SDK completes logins (grant, cancel, fail, defer).
    #[arg(long, default_value = "grant")]
    sandbox_decision: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Softgate bridge starting...");

    let config = BridgeConfig::new(args.socket, &args.sandbox_decision)?;
    info!(
        socket = %config.socket_path.display(),
        decision = ?config.sandbox_decision,
        "Configuration loaded"
    );

    let sdk = SandboxLoginSdk::with_decision(config.sandbox_decision);
    let state = BridgeState::new(Arc::new(sdk));

    // The daemon process is the foreground surface logins present through.
    state.session.attach_ui(UiHost::new("softgate-bridge"));

    let server = BridgeServer::new(&config.socket_path);
    ipc::register::register_handlers(&server, state.clone()).await;

    let ctrl_c = tokio::signal::ctrl_c();

    tokio::select! {
        result = server.run() => {
            if let Err(e) = result {
                error!(error = %e, "Bridge exited with error");
                return Err(e.into());
            }
        }
        _ = ctrl_c => {
            info!("Received shutdown signal, exiting...");
        }
    }

    state.session.detach_ui();

    Ok(())
}
