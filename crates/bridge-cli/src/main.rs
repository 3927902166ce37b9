//! Softgate CLI - Command-line interface for the Softgate bridge.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

/// Softgate CLI - Drive vendor login through a running bridge.
#[derive(Parser)]
#[command(name = "softgate")]
#[command(about = "Softgate CLI for vendor login, logout, and token queries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the bridge socket.
    #[arg(long, env = "SOFTGATE_SOCKET", global = true)]
    socket: Option<String>,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: output::OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in through the vendor's interactive flow
    Login {
        /// Login behavior (nativeWithFallback, nativeOnly, webOnly, webViewOnly)
        #[arg(long, default_value = "nativeWithFallback")]
        behavior: String,

        /// Permissions to request, comma separated
        #[arg(long, value_delimiter = ',')]
        permissions: Vec<String>,
    },

    /// Log out and clear the vendor session
    Logout,

    /// Show the current access token
    Token,

    /// Manage the bridge daemon
    Bridge {
        #[command(subcommand)]
        command: BridgeCommands,
    },
}

#[derive(Subcommand)]
enum BridgeCommands {
    /// Check bridge status
    Status,
    /// Stop the bridge
    Stop,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Login {
            behavior,
            permissions,
        } => commands::log_in(cli.socket.as_deref(), &behavior, permissions, &cli.format).await,
        Commands::Logout => commands::log_out(cli.socket.as_deref(), &cli.format).await,
        Commands::Token => commands::token(cli.socket.as_deref(), &cli.format).await,
        Commands::Bridge { command } => match command {
            BridgeCommands::Status => {
                commands::bridge_status(cli.socket.as_deref(), &cli.format).await
            }
            BridgeCommands::Stop => commands::bridge_stop(cli.socket.as_deref(), &cli.format).await,
        },
    };

    if let Err(e) = result {
        output::print_error(&e.to_string(), &cli.format);
        std::process::exit(1);
    }
}
