//! CLI configuration: thin wrapper around `kong_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--admin-url, --insecure, --timeout, --output).

use clap::ValueEnum;

use kong_api::ClientConfig;
use kong_config::ConfigError;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use kong_config::{
    Config, DEFAULT_ADMIN_URL, Profile, config_path, load_config, load_config_or_default,
    save_config, to_toml,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.active_profile_name().to_owned())
}

/// Output format: `--output` flag, else the config default, else table.
pub fn resolve_output(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global.output.clone().unwrap_or_else(|| {
        OutputFormat::from_str(&config.defaults.output, true).unwrap_or(OutputFormat::Table)
    })
}

/// Translate the active profile + global flags into a `ClientConfig`.
///
/// CLI flag overrides take priority over profile values. `--admin-url`
/// alone is enough when the default profile isn't configured.
pub fn resolve_client_config(global: &GlobalOpts, config: &Config) -> Result<ClientConfig, CliError> {
    let name = active_profile_name(global, config);

    let mut profile = match config.profile(&name) {
        Ok(profile) => profile,
        Err(ConfigError::ProfileNotFound { .. })
            if global.admin_url.is_some() && global.profile.is_none() =>
        {
            Profile::default()
        }
        Err(ConfigError::ProfileNotFound { name }) => {
            return Err(CliError::ProfileNotFound {
                name,
                available: available_profiles(config),
            });
        }
        Err(other) => return Err(other.into()),
    };

    if let Some(ref url) = global.admin_url {
        profile.admin_url.clone_from(url);
    }
    if global.insecure {
        profile.verify_tls = Some(false);
    } else if global.verify_tls {
        profile.verify_tls = Some(true);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }

    Ok(kong_config::profile_to_client_config(&profile, &config.defaults)?)
}

fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
