//! Command dispatch: bridges CLI args -> core `Admin` calls -> output formatting.

pub mod config_cmd;
pub mod control;
pub mod listings;
pub mod stats;
pub mod util;

use icefly_core::Admin;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, admin: &Admin, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Stats => stats::server(admin, global).await,
        Command::Source { mount } => stats::source(admin, &mount, global).await,
        Command::Mounts => listings::mounts(admin, global).await,
        Command::Clients { mount } => listings::clients(admin, &mount, global).await,
        Command::Metadata(args) => control::metadata(admin, args, global).await,
        Command::Fallback { mount, fallback } => {
            control::fallback(admin, &mount, &fallback, global).await
        }
        Command::Move { mount, destination } => {
            control::move_clients(admin, &mount, &destination, global).await
        }
        Command::KillClient { mount, id } => control::kill_client(admin, &mount, id, global).await,
        Command::KillSource { mount } => control::kill_source(admin, &mount, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
