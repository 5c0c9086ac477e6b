//! Statistics command handlers: `stats` and `source`.

use tabled::Tabled;

use icefly_core::{Admin, ServerSnapshot, SourceSnapshot};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util::{format_bitrate, format_bytes, format_seconds, format_time, or_dash};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SourceRow {
    #[tabled(rename = "Mount")]
    mount: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Format")]
    format: String,
    #[tabled(rename = "Bitrate")]
    bitrate: String,
    #[tabled(rename = "Listeners")]
    listeners: u64,
    #[tabled(rename = "Peak")]
    peak: u64,
    #[tabled(rename = "Uptime")]
    uptime: String,
}

impl SourceRow {
    fn new(mount: &str, s: &SourceSnapshot) -> Self {
        Self {
            mount: mount.into(),
            name: or_dash(&s.info.name).into(),
            format: or_dash(&s.info.content_type).into(),
            bitrate: format_bitrate(s.audio.bitrate),
            listeners: s.stats.listeners,
            peak: s.stats.listener_peak,
            uptime: format_seconds(s.stats.connected),
        }
    }
}

// ── Detail views ────────────────────────────────────────────────────

fn server_detail(snap: &ServerSnapshot) -> String {
    let st = &snap.stats;
    let mut out = [
        format!("Server:       {}", or_dash(&snap.info.id)),
        format!("Host:         {}", or_dash(&snap.host)),
        format!("Location:     {}", or_dash(&snap.location)),
        format!("Admin:        {}", or_dash(&snap.admin)),
        format!("Started:      {}", format_time(snap.start.as_ref())),
        format!("Listeners:    {} ({} connections)", st.listeners, st.listener_connections),
        format!("Clients:      {} ({} connections)", st.clients, st.client_connections),
        format!("Sources:      {} ({} connections)", st.sources, st.source_total_connections),
        format!("Outgoing:     {}", format_bitrate(st.outgoing_bitrate)),
        format!("Read:         {}", format_bytes(st.stream_bytes_read)),
        format!("Sent:         {}", format_bytes(st.stream_bytes_sent)),
    ]
    .join("\n");

    if let Some(ref sources) = snap.sources {
        let rows: Vec<SourceRow> = snap
            .mounts()
            .into_iter()
            .filter_map(|m| sources.get(m).map(|s| SourceRow::new(m, s)))
            .collect();
        out.push_str("\n\n");
        out.push_str(&output::render_table(&rows));
    }
    out
}

fn source_detail(mount: &str, s: &SourceSnapshot) -> String {
    let limit = s
        .stats
        .listener_limit()
        .map_or_else(|| "unlimited".into(), |n| n.to_string());
    let mut lines = vec![
        format!("Mount:        {mount}"),
        format!("Name:         {}", or_dash(&s.info.name)),
        format!("Description:  {}", or_dash(&s.info.description)),
        format!("Genre:        {}", or_dash(&s.genre)),
        format!("Format:       {}", or_dash(&s.info.content_type)),
        format!("Listen URL:   {}", or_dash(&s.listen_url)),
        format!("Public:       {}", s.public),
        format!(
            "Audio:        {}, {} ch, {} Hz",
            format_bitrate(s.audio.bitrate),
            s.audio.channels,
            s.audio.sample_rate
        ),
        format!("Listeners:    {} (peak {}, max {limit})", s.stats.listeners, s.stats.listener_peak),
        format!("Outgoing:     {}", format_bitrate(s.stats.outgoing_bitrate)),
        format!("Connected:    {}", format_seconds(s.stats.connected)),
        format!("Started:      {}", format_time(s.stream_started.as_ref())),
        format!("Source:       {} {}", or_dash(&s.source_ip), s.user_agent),
    ];
    if !s.track.artist.is_empty() || !s.track.title.is_empty() {
        lines.push(format!(
            "Playing:      {} - {}",
            or_dash(&s.track.artist),
            or_dash(&s.track.title)
        ));
    } else if !s.track.raw_info.is_empty() {
        lines.push(format!("Playing:      {}", s.track.raw_info));
    }
    if s.metadata_updated.is_some() {
        lines.push(format!("Updated:      {}", format_time(s.metadata_updated.as_ref())));
    }
    lines.join("\n")
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn server(admin: &Admin, global: &GlobalOpts) -> Result<(), CliError> {
    let snap = admin.stats().await?;
    let out = output::render_single(output::format(global), &snap, server_detail, |s| {
        s.mounts().join("\n")
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn source(admin: &Admin, mount: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let src = admin.source(mount).await?;
    let out = output::render_single(
        output::format(global),
        &src,
        |s| source_detail(mount, s),
        |s| s.listen_url.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
