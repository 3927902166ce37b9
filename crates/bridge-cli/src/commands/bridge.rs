//! Bridge daemon commands.

use super::get_bridge_client;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use bridge_ipc::Method;

/// Check whether the bridge is running and report its version.
pub async fn bridge_status(socket: Option<&str>, format: &OutputFormat) -> Result<()> {
    let client = get_bridge_client(socket)?;

    if !client.is_bridge_running().await {
        match format {
            OutputFormat::Text => println!("Bridge:   not running"),
            OutputFormat::Json => println!(r#"{{"running":false}}"#),
        }
        return Ok(());
    }

    let reply = client.call_method(Method::Health).await?;
    let version = reply
        .result
        .as_ref()
        .and_then(|r| r.get("version"))
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string();

    match format {
        OutputFormat::Text => {
            println!("Bridge:   running");
            println!("Version:  {}", version);
        }
        OutputFormat::Json => {
            println!(r#"{{"running":true,"version":"{}"}}"#, version);
        }
    }

    Ok(())
}

/// Ask the bridge to shut down.
pub async fn bridge_stop(socket: Option<&str>, format: &OutputFormat) -> Result<()> {
    let client = get_bridge_client(socket)?;

    if !client.is_bridge_running().await {
        output::print_error("Bridge is not running", format);
        return Ok(());
    }

    client.call_method(Method::Shutdown).await?;
    output::print_success("Bridge stopping", format);

    Ok(())
}
