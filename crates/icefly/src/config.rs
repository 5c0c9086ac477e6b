//! CLI configuration: thin wrapper around `icefly_config`.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--server, --user, --password, ...).

use std::time::Duration;

use clap::ValueEnum;
use secrecy::SecretString;

use icefly_core::{AdminConfig, TlsVerification};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use icefly_config::{
    Config, Defaults, Profile, config_path, load_config_or_default, save_config,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Comma-separated profile names for error help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Fill `--output` / `--color` from the config `[defaults]` when not given.
pub fn apply_display_defaults(global: &mut GlobalOpts, defaults: &Defaults) -> Result<(), CliError> {
    if global.output.is_none() {
        let format = OutputFormat::from_str(&defaults.output, true).map_err(|_| {
            CliError::Validation {
                field: "defaults.output".into(),
                reason: format!(
                    "expected table, json, json-compact, yaml or plain, got '{}'",
                    defaults.output
                ),
            }
        })?;
        global.output = Some(format);
    }
    if global.color.is_none() {
        let mode = ColorMode::from_str(&defaults.color, true).map_err(|_| CliError::Validation {
            field: "defaults.color".into(),
            reason: format!("expected auto, always or never, got '{}'", defaults.color),
        })?;
        global.color = Some(mode);
    }
    Ok(())
}

/// Build an `AdminConfig` from the loaded config, profile, and CLI overrides.
pub fn build_admin_config(cfg: &Config, global: &GlobalOpts) -> Result<AdminConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    match cfg.profiles.get(&profile_name) {
        Some(profile) => resolve_profile(profile, &profile_name, &cfg.defaults, global),
        None if global.profile.is_some() => Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available_profiles(cfg),
        }),
        None => resolve_flags_only(&profile_name, &cfg.defaults, global),
    }
}

/// Translate a `Profile` + global flags into an `AdminConfig`.
///
/// CLI flag overrides take priority over profile values.
fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<AdminConfig, CliError> {
    // 1. Server URL (flag > env > profile)
    let url = icefly_config::parse_server_url(global.server.as_deref().unwrap_or(&profile.server))?;

    // 2. Credentials
    let username = global.user.clone().unwrap_or_else(|| profile.username.clone());
    let password = match global.password {
        Some(ref pw) => SecretString::from(pw.clone()),
        None => icefly_config::resolve_password(profile, profile_name)?,
    };

    // 3. TLS verification
    let tls = if global.insecure || profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    // 4. Timeout (flag > profile > defaults)
    let timeout = global
        .timeout
        .or(profile.timeout)
        .unwrap_or(defaults.timeout);

    let mut config = AdminConfig::new(url, username, password);
    config.tls = tls;
    config.timeout = Duration::from_secs(timeout);
    Ok(config)
}

/// No profile on disk: everything must come from flags / env vars.
fn resolve_flags_only(
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<AdminConfig, CliError> {
    let server = global.server.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;
    let url = icefly_config::parse_server_url(server)?;

    let password = global
        .password
        .clone()
        .map(SecretString::from)
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.into(),
        })?;

    let mut config = AdminConfig::new(
        url,
        global.user.clone().unwrap_or_else(|| "admin".into()),
        password,
    );
    if global.insecure || defaults.insecure {
        config.tls = TlsVerification::DangerAcceptInvalid;
    }
    config.timeout = Duration::from_secs(global.timeout.unwrap_or(defaults.timeout));
    Ok(config)
}
