//! CLI error types with miette diagnostics.
//!
//! Maps `kong_api::Error` and `kong_config::ConfigError` into user-facing
//! errors with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use kong_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the admin API at {url}")]
    #[diagnostic(
        code(kongctl::connection_failed),
        help(
            "Check that Kong is running and the admin listener is reachable.\n\
             URL: {url}\n\
             Self-signed certificate? Try: kongctl info --insecure"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: kong_api::Error,
    },

    #[error("Request to {url} timed out")]
    #[diagnostic(
        code(kongctl::timeout),
        help("Increase the timeout with --timeout or check the admin API's responsiveness.")
    )]
    Timeout { url: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(kongctl::not_found),
        help("Run: kongctl {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("{resource_type} '{identifier}' conflicts with an existing entity")]
    #[diagnostic(code(kongctl::conflict), help("{message}"))]
    Conflict {
        resource_type: String,
        identifier: String,
        message: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Admin API error: {source}")]
    #[diagnostic(code(kongctl::api_error))]
    Api {
        #[source]
        source: kong_api::Error,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(kongctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(kongctl::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: kongctl config init --name {name} --url <ADMIN_URL>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(kongctl::config_exists),
        help("Pass --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(kongctl::config))]
    Config(ConfigError),

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    #[diagnostic(code(kongctl::json), help("Check the JSON input and try again."))]
    Json(#[from] serde_json::Error),

    #[error("YAML rendering failed: {0}")]
    #[diagnostic(code(kongctl::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Validation { .. } | Self::ConfigExists { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Attach resource context to an admin API error: 404 becomes
    /// `NotFound` and 409 becomes `Conflict`.
    pub fn for_resource(err: kong_api::Error, resource_type: &str, identifier: &str) -> Self {
        match err.status() {
            Some(404) => Self::NotFound {
                resource_type: resource_type.into(),
                identifier: identifier.into(),
                list_command: format!("{resource_type}s list"),
            },
            Some(409) => Self::Conflict {
                resource_type: resource_type.into(),
                identifier: identifier.into(),
                message: err.to_string(),
            },
            _ => err.into(),
        }
    }
}

// ── kong_api::Error → CliError mapping ───────────────────────────────

impl From<kong_api::Error> for CliError {
    fn from(err: kong_api::Error) -> Self {
        if let kong_api::Error::Transport(ref e) = err {
            let url = e.url().map(ToString::to_string).unwrap_or_default();
            if e.is_timeout() {
                return Self::Timeout { url };
            }
            if e.is_connect() {
                return Self::ConnectionFailed { url, source: err };
            }
        }
        match err {
            kong_api::Error::InvalidPayload(reason) => Self::Validation {
                field: "payload".into(),
                reason,
            },
            kong_api::Error::InvalidUrl(e) => Self::Validation {
                field: "admin-url".into(),
                reason: e.to_string(),
            },
            other => Self::Api { source: other },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::ProfileNotFound { name } => Self::ProfileNotFound {
                name,
                available: String::new(),
            },
            other => Self::Config(other),
        }
    }
}
