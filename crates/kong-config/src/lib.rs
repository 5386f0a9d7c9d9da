//! Shared configuration for kongctl.
//!
//! TOML profiles naming one admin API each, layered under environment
//! overrides, and translation to `kong_api::ClientConfig`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use kong_api::ClientConfig;

/// Admin URL used when no profile names one.
pub const DEFAULT_ADMIN_URL: &str = "https://localhost:8444";

/// Profile used when neither the command line nor the file picks one.
pub const DEFAULT_PROFILE: &str = "default";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found in config")]
    ProfileNotFound { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named admin API profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some(DEFAULT_PROFILE.into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Name of the profile to use when none is given explicitly.
    pub fn active_profile_name(&self) -> &str {
        self.default_profile.as_deref().unwrap_or(DEFAULT_PROFILE)
    }

    /// Look up a profile by name.
    ///
    /// The `default` profile always exists: if the file doesn't define it,
    /// the built-in local admin API profile is returned.
    pub fn profile(&self, name: &str) -> Result<Profile, ConfigError> {
        match self.profiles.get(name) {
            Some(profile) => Ok(profile.clone()),
            None if name == DEFAULT_PROFILE => Ok(Profile::default()),
            None => Err(ConfigError::ProfileNotFound { name: name.into() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    /// Local admin APIs usually run with a self-signed certificate.
    #[serde(default)]
    pub verify_tls: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            verify_tls: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named admin API profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Admin API base URL (e.g., "https://localhost:8444").
    pub admin_url: String,

    /// Override the global TLS verification setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_tls: Option<bool>,

    /// Override the global timeout, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            admin_url: DEFAULT_ADMIN_URL.into(),
            verify_tls: None,
            timeout: None,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "kongctl").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("kongctl");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file, then apply `KONG_*` environment overrides.
///
/// Nested keys use a double underscore: `KONG_DEFAULTS__TIMEOUT=5`,
/// `KONG_PROFILES__PROD__ADMIN_URL=...`. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("KONG_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is invalid.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_toml(cfg)?)?;
    Ok(())
}

/// Render config as it would be written to disk.
pub fn to_toml(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}

// ── Client construction ─────────────────────────────────────────────

/// Build a `ClientConfig` from a profile, falling back to global defaults.
pub fn profile_to_client_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    let admin_url: url::Url = profile
        .admin_url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "admin_url".into(),
            reason: format!("invalid URL: {}", profile.admin_url),
        })?;

    if !matches!(admin_url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "admin_url".into(),
            reason: format!("expected http or https, got '{}'", admin_url.scheme()),
        });
    }

    let mut config = ClientConfig::new(admin_url);
    config.verify_tls = profile.verify_tls.unwrap_or(defaults.verify_tls);
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn write(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.active_profile_name(), "default");
        assert_eq!(cfg.defaults.output, "table");
        assert_eq!(cfg.defaults.timeout, 30);
        assert!(!cfg.defaults.verify_tls);
        assert_eq!(cfg.profile("default").unwrap().admin_url, DEFAULT_ADMIN_URL);
    }

    #[test]
    fn reads_profiles_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            r#"
default_profile = "prod"

[defaults]
output = "json"
verify_tls = false
timeout = 20

[profiles.prod]
admin_url = "https://kong-admin.prod.example.com:8444"
verify_tls = true
timeout = 5

[profiles.local]
admin_url = "http://localhost:8001"
"#,
        );

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.active_profile_name(), "prod");
        assert_eq!(cfg.defaults.output, "json");

        let prod = profile_to_client_config(&cfg.profile("prod").unwrap(), &cfg.defaults).unwrap();
        assert!(prod.verify_tls);
        assert_eq!(prod.timeout, Duration::from_secs(5));

        let local =
            profile_to_client_config(&cfg.profile("local").unwrap(), &cfg.defaults).unwrap();
        assert!(!local.verify_tls);
        assert_eq!(local.timeout, Duration::from_secs(20));
        assert_eq!(local.admin_url.as_str(), "http://localhost:8001/");
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let cfg = Config::default();
        assert!(matches!(
            cfg.profile("staging"),
            Err(ConfigError::ProfileNotFound { name }) if name == "staging"
        ));
    }

    #[test]
    fn rejects_bad_admin_urls() {
        let defaults = Defaults::default();
        for bad in ["not a url", "ftp://kong.example.com"] {
            let profile = Profile {
                admin_url: bad.into(),
                ..Profile::default()
            };
            assert!(matches!(
                profile_to_client_config(&profile, &defaults),
                Err(ConfigError::Validation { .. })
            ));
        }
    }

    #[test]
    fn save_then_load_keeps_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "edge".into(),
            Profile {
                admin_url: "https://edge.example.com:8444".into(),
                verify_tls: Some(true),
                timeout: None,
            },
        );
        save_config_to(&cfg, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[profiles.edge]"));

        let back = load_config_from(&path).unwrap();
        assert_eq!(back.profiles, cfg.profiles);
    }
}
