//! Login surface commands.

use super::require_bridge;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use bridge_ipc::Method;
use serde_json::json;

/// Run an interactive login through the bridge.
pub async fn log_in(
    socket: Option<&str>,
    behavior: &str,
    permissions: Vec<String>,
    format: &OutputFormat,
) -> Result<()> {
    let client = require_bridge(socket).await?;

    let args = json!({
        "behavior": behavior,
        "permissions": permissions,
    });

    if matches!(format, OutputFormat::Text) {
        println!("Waiting for the vendor login flow...");
    }

    let reply = client.call_with_args(Method::LogIn, args).await?;

    if let Some(error) = &reply.error {
        output::print_error(
            &format!("Login failed ({}): {}", error.code, error.message),
            format,
        );
        return Ok(());
    }

    match reply.result {
        Some(result) => match result.get("status").and_then(|v| v.as_str()) {
            Some("loggedIn") => match format {
                OutputFormat::Text => {
                    println!("Logged in.");
                    print_token(&result["accessToken"]);
                }
                OutputFormat::Json => output::print_value(&result),
            },
            Some("cancelledByUser") => match format {
                OutputFormat::Text => println!("Login cancelled by user."),
                OutputFormat::Json => output::print_value(&result),
            },
            _ => output::print_error("Unexpected reply from bridge", format),
        },
        None => output::print_error("Unexpected reply from bridge", format),
    }

    Ok(())
}

/// Log out and clear the vendor session.
pub async fn log_out(socket: Option<&str>, format: &OutputFormat) -> Result<()> {
    let client = require_bridge(socket).await?;

    let reply = client.call_method(Method::LogOut).await?;

    if reply.is_success() {
        output::print_success("Logged out", format);
    } else if let Some(error) = &reply.error {
        output::print_error(&error.message, format);
    }

    Ok(())
}

/// Show the current access token.
pub async fn token(socket: Option<&str>, format: &OutputFormat) -> Result<()> {
    let client = require_bridge(socket).await?;

    let reply = client.call_method(Method::GetCurrentAccessToken).await?;

    if let Some(error) = &reply.error {
        output::print_error(&error.message, format);
        return Ok(());
    }

    match reply.result {
        Some(token) => match format {
            OutputFormat::Text => {
                println!("Logged in.");
                print_token(&token);
            }
            OutputFormat::Json => output::print_value(&token),
        },
        None => match format {
            OutputFormat::Text => println!("Not logged in."),
            OutputFormat::Json => println!("null"),
        },
    }

    Ok(())
}

fn print_token(token: &serde_json::Value) {
    output::print_row("User ID", token["userId"].as_str().unwrap_or("unknown"));
    output::print_row("Expires", &format_expiry(token["expires"].as_i64()));
    output::print_row("Permissions", &join_list(&token["permissions"]));
    let declined = join_list(&token["declinedPermissions"]);
    if !declined.is_empty() {
        output::print_row("Declined", &declined);
    }
}

fn format_expiry(expires_ms: Option<i64>) -> String {
    expires_ms
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "unknown".to_string())
}

fn join_list(value: &serde_json::Value) -> String {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}
