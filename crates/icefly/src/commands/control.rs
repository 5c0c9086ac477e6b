//! Control command handlers: metadata, fallback, move, kill-client, kill-source.

use icefly_core::{Admin, TrackMetadataUpdate};

use crate::cli::{GlobalOpts, MetadataArgs};
use crate::error::CliError;
use crate::output;

use super::util;

impl From<MetadataArgs> for TrackMetadataUpdate {
    fn from(args: MetadataArgs) -> Self {
        Self {
            song: args.song,
            title: args.title,
            artist: args.artist,
            url: args.url,
            artwork: args.artwork,
            charset: args.charset,
            intro: args.intro,
        }
    }
}

pub async fn metadata(admin: &Admin, args: MetadataArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mount = args.mount.clone();
    let meta = TrackMetadataUpdate::from(args);
    if meta.is_empty() {
        tracing::warn!(mount = %mount, "no metadata fields given, sending song=Unknown");
    }
    admin.update_metadata(&mount, &meta).await?;
    output::success(&format!("Metadata updated on {mount}"), global);
    Ok(())
}

pub async fn fallback(
    admin: &Admin,
    mount: &str,
    fallback: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    admin.update_fallback(mount, fallback).await?;
    output::success(&format!("Fallback of {mount} set to {fallback}"), global);
    Ok(())
}

pub async fn move_clients(
    admin: &Admin,
    mount: &str,
    destination: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !util::confirm(
        "move",
        &format!("Move all listeners from {mount} to {destination}?"),
        global.yes,
    )? {
        return Ok(());
    }
    admin.move_clients(mount, destination).await?;
    output::success(&format!("Listeners moved from {mount} to {destination}"), global);
    Ok(())
}

pub async fn kill_client(
    admin: &Admin,
    mount: &str,
    id: u64,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !util::confirm(
        "kill-client",
        &format!("Disconnect listener {id} from {mount}?"),
        global.yes,
    )? {
        return Ok(());
    }
    admin.kill_client(mount, id).await?;
    output::success(&format!("Listener {id} disconnected from {mount}"), global);
    Ok(())
}

pub async fn kill_source(admin: &Admin, mount: &str, global: &GlobalOpts) -> Result<(), CliError> {
    if !util::confirm(
        "kill-source",
        &format!("Disconnect the source on {mount}? Listeners fall back or drop."),
        global.yes,
    )? {
        return Ok(());
    }
    admin.kill_source(mount).await?;
    output::success(&format!("Source on {mount} disconnected"), global);
    Ok(())
}
