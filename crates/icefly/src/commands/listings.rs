//! Listing command handlers: `mounts` and `clients`.

use tabled::Tabled;

use icefly_core::{Admin, Listener, Mount};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util::{format_bytes, format_seconds, or_dash};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct MountRow {
    #[tabled(rename = "Mount")]
    path: String,
    #[tabled(rename = "Listeners")]
    listeners: u64,
    #[tabled(rename = "Connected")]
    connected: String,
    #[tabled(rename = "Content Type")]
    content_type: String,
}

impl From<&Mount> for MountRow {
    fn from(m: &Mount) -> Self {
        Self {
            path: m.path.clone(),
            listeners: m.listeners,
            connected: format_seconds(m.connected),
            content_type: or_dash(&m.content_type).into(),
        }
    }
}

#[derive(Tabled)]
struct ListenerRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "User Agent")]
    user_agent: String,
    #[tabled(rename = "Connected")]
    connected: String,
    #[tabled(rename = "Lag")]
    lag: String,
}

impl From<&Listener> for ListenerRow {
    fn from(l: &Listener) -> Self {
        Self {
            id: l.id,
            ip: l.ip.clone(),
            user_agent: or_dash(&l.user_agent).into(),
            connected: format_seconds(l.connected),
            lag: format_bytes(l.lag),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn mounts(admin: &Admin, global: &GlobalOpts) -> Result<(), CliError> {
    let mut mounts = admin.list_mounts().await?;
    mounts.sort_by(|a, b| a.path.cmp(&b.path));
    let out = output::render_list(
        output::format(global),
        &mounts,
        |m| MountRow::from(m),
        |m| m.path.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn clients(admin: &Admin, mount: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let listeners = admin.list_clients(mount).await?;
    let out = output::render_list(
        output::format(global),
        &listeners,
        |l| ListenerRow::from(l),
        |l| l.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
