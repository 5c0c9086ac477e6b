//! Clap derive structures for the `icefly` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// icefly -- administer Icecast servers from the command line
#[derive(Debug, Parser)]
#[command(
    name = "icefly",
    version,
    about = "Administer Icecast streaming servers from the command line",
    long_about = "Inspect server and source statistics, list mounts and listeners,\n\
        and drive the admin interface of an Icecast server: metadata updates,\n\
        fallbacks, moving listeners, and disconnecting clients or sources.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "ICEFLY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server URL (overrides profile)
    #[arg(long, short = 's', env = "ICEFLY_SERVER", global = true)]
    pub server: Option<String>,

    /// Admin username (overrides profile)
    #[arg(long, short = 'u', env = "ICEFLY_USER", global = true)]
    pub user: Option<String>,

    /// Admin password
    #[arg(long, env = "ICEFLY_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format [default: config `defaults.output`, else table]
    #[arg(long, short = 'o', env = "ICEFLY_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: config `defaults.color`, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ICEFLY_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "ICEFLY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show server statistics and a summary of every source
    #[command(alias = "st")]
    Stats,

    /// Show the full statistics of one source
    #[command(alias = "src")]
    Source {
        /// Mount path, with or without the leading '/'
        mount: String,
    },

    /// List mounted sources
    #[command(alias = "ls")]
    Mounts,

    /// List listeners connected to a mount
    #[command(alias = "cl")]
    Clients {
        /// Mount path
        mount: String,
    },

    /// Update the track metadata of a mount
    #[command(alias = "meta")]
    Metadata(MetadataArgs),

    /// Change the fallback mount of a source
    Fallback {
        /// Mount path
        mount: String,

        /// Fallback mount path
        fallback: String,
    },

    /// Move every listener of a mount to another mount
    Move {
        /// Mount path to move listeners away from
        mount: String,

        /// Mount path to move listeners to
        destination: String,
    },

    /// Disconnect one listener
    KillClient {
        /// Mount path
        mount: String,

        /// Listener ID (see `icefly clients <mount>`)
        id: u64,
    },

    /// Disconnect the source feeding a mount
    KillSource {
        /// Mount path
        mount: String,
    },

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  METADATA
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MetadataArgs {
    /// Mount path
    pub mount: String,

    /// Combined "Artist - Title" string
    #[arg(long)]
    pub song: Option<String>,

    /// Track title
    #[arg(long)]
    pub title: Option<String>,

    /// Track artist
    #[arg(long)]
    pub artist: Option<String>,

    /// Track URL
    #[arg(long)]
    pub url: Option<String>,

    /// Artwork URL
    #[arg(long)]
    pub artwork: Option<String>,

    /// Character set of the metadata (e.g. utf-8)
    #[arg(long)]
    pub charset: Option<String>,

    /// Intro file to play before the next track
    #[arg(long)]
    pub intro: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (secrets masked)
    Show,

    /// Print the config file location
    Path,

    /// Store a password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
