//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::time::Duration;

use bytesize::ByteSize;
use chrono::{DateTime, Utc};

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal to prompt on, refuses instead of hanging.
pub fn confirm(action: &str, message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Seconds as a short human duration, e.g. `1h 2m 5s`.
pub fn format_seconds(secs: u64) -> String {
    humantime::format_duration(Duration::from_secs(secs)).to_string()
}

pub fn format_bytes(bytes: u64) -> String {
    ByteSize::b(bytes).to_string()
}

/// Bits per second as kbps.
pub fn format_bitrate(bps: u64) -> String {
    if bps == 0 {
        return "-".into();
    }
    format!("{} kbps", bps / 1000)
}

pub fn format_time(ts: Option<&DateTime<Utc>>) -> String {
    ts.map_or_else(
        || "-".into(),
        |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

/// Empty strings shown as `-`.
pub fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
