//! Clap derive structures for the `kongctl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Only depends on clap + clap_complete so `build.rs` can include it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// kongctl -- manage a Kong Gateway through its admin API
#[derive(Debug, Parser)]
#[command(
    name = "kongctl",
    version,
    about = "Manage Kong Gateway services, routes and plugins from the command line",
    long_about = "A CLI for the Kong Gateway admin API.\n\n\
        Every command maps to one admin API request: list, inspect, create,\n\
        update and delete services, routes, consumers, plugins, certificates,\n\
        SNIs, upstreams and targets.",
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
    /// Config profile to use
    #[arg(long, short = 'p', env = "KONG_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Admin API URL (overrides profile)
    #[arg(long, short = 'u', env = "KONG_ADMIN_URL", global = true)]
    pub admin_url: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "KONG_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Verify the admin API's TLS certificate
    #[arg(long, global = true, conflicts_with = "insecure")]
    pub verify_tls: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "KONG_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "KONG_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    pub fn format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
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
    /// Manage services (upstream APIs)
    #[command(alias = "svc", alias = "s")]
    Services(ServicesArgs),

    /// Manage routes
    #[command(alias = "rt", alias = "r")]
    Routes(RoutesArgs),

    /// Manage consumers
    #[command(alias = "c")]
    Consumers(ConsumersArgs),

    /// Manage plugin instances
    #[command(alias = "pl")]
    Plugins(PluginsArgs),

    /// Manage TLS certificates
    #[command(alias = "certs")]
    Certificates(CertificatesArgs),

    /// Manage SNIs
    Snis(SnisArgs),

    /// Manage upstreams (load-balancer pools)
    #[command(alias = "up")]
    Upstreams(UpstreamsArgs),

    /// Manage upstream targets
    Targets(TargetsArgs),

    /// Browse tags
    Tags(TagsArgs),

    /// Show node information
    Info,

    /// Show node status
    Status,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Arguments ─────────────────────────────────────────────────

/// Shared filtering arguments for list commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Tag filter, e.g. "edge" or "admin,example" (AND) or "a/b" (OR)
    #[arg(long, short = 't')]
    pub tags: Option<String>,
}

/// Shared arguments for update commands.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Entity ID or name
    pub id: String,

    /// Field assignment; the value is parsed as JSON when possible
    #[arg(long = "set", short = 's', value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Read changes from a JSON object file
    #[arg(long, short = 'F', conflicts_with = "set")]
    pub from_file: Option<PathBuf>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SERVICES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ServicesArgs {
    #[command(subcommand)]
    pub command: ServicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ServicesCommand {
    /// List services
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get service details
    Get {
        /// Service ID or name
        service: String,
    },

    /// Create a service
    Create {
        /// Service name
        name: String,

        /// Full upstream URL; replaces --protocol/--host/--port/--path
        #[arg(long, conflicts_with_all = ["protocol", "host", "port", "path"])]
        url: Option<String>,

        /// Upstream protocol
        #[arg(long, default_value = "http")]
        protocol: String,

        /// Upstream host
        #[arg(long, required_unless_present = "url")]
        host: Option<String>,

        /// Upstream port
        #[arg(long, default_value = "80")]
        port: u16,

        /// Upstream path
        #[arg(long)]
        path: Option<String>,

        /// Number of retries on proxy failure
        #[arg(long, default_value = "5")]
        retries: u32,

        /// Connect timeout in milliseconds
        #[arg(long, default_value = "60000")]
        connect_timeout: u64,

        /// Write timeout in milliseconds
        #[arg(long, default_value = "60000")]
        write_timeout: u64,

        /// Read timeout in milliseconds
        #[arg(long, default_value = "60000")]
        read_timeout: u64,

        /// Certificate ID presented to the upstream (mTLS)
        #[arg(long)]
        client_certificate: Option<String>,

        /// Tag (repeatable); defaults to the service name
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Update a service
    Update(UpdateArgs),

    /// Delete a service
    #[command(alias = "rm")]
    Delete {
        /// Service ID or name
        service: String,
    },

    /// List routes attached to a service
    Routes {
        /// Service ID or name
        service: String,
    },

    /// List plugins scoped to a service
    Plugins {
        /// Service ID or name
        service: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ROUTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RoutesArgs {
    #[command(subcommand)]
    pub command: RoutesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoutesCommand {
    /// List routes
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only routes of this service
        #[arg(long, conflicts_with = "tags")]
        service: Option<String>,
    },

    /// Get route details
    Get {
        /// Route ID or name
        route: String,
    },

    /// Create a route
    Create {
        /// Route name
        name: String,

        /// Service ID or name the route forwards to
        #[arg(long)]
        service: Option<String>,

        /// Host to match (repeatable)
        #[arg(long = "host")]
        hosts: Vec<String>,

        /// Path prefix to match (repeatable)
        #[arg(long = "path")]
        paths: Vec<String>,

        /// HTTP method to match (repeatable) [default: all]
        #[arg(long = "method")]
        methods: Vec<String>,

        /// Protocol to accept (repeatable) [default: http, https]
        #[arg(long = "protocol")]
        protocols: Vec<String>,

        /// SNI to match (repeatable)
        #[arg(long = "sni")]
        snis: Vec<String>,

        /// Strip the matched path prefix before proxying
        #[arg(long)]
        strip_path: bool,

        /// Keep the client's Host header when proxying
        #[arg(long, default_value = "true", action = clap::ArgAction::Set)]
        preserve_host: bool,

        /// Regex priority among routes with regex paths
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        regex_priority: i64,

        /// Status used to redirect plain HTTP when only HTTPS is allowed
        #[arg(long, default_value = "426")]
        https_redirect_status_code: u16,

        /// Tag (repeatable); defaults to the route name
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Update a route
    Update(UpdateArgs),

    /// Delete a route
    #[command(alias = "rm")]
    Delete {
        /// Route ID or name
        route: String,
    },

    /// Show the service a route forwards to
    Service {
        /// Route ID or name
        route: String,
    },

    /// List plugins scoped to a route
    Plugins {
        /// Route ID or name
        route: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONSUMERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConsumersArgs {
    #[command(subcommand)]
    pub command: ConsumersCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConsumersCommand {
    /// List consumers
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get consumer details
    Get {
        /// Consumer ID or username
        consumer: String,
    },

    /// Create a consumer (needs --username or --custom-id)
    Create {
        /// Unique username
        #[arg(long, required_unless_present = "custom_id")]
        username: Option<String>,

        /// Identifier from an external user store
        #[arg(long)]
        custom_id: Option<String>,

        /// Tag (repeatable); defaults to the username or custom ID
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Update a consumer
    Update(UpdateArgs),

    /// Delete a consumer
    #[command(alias = "rm")]
    Delete {
        /// Consumer ID or username
        consumer: String,
    },

    /// List plugins scoped to a consumer
    Plugins {
        /// Consumer ID or username
        consumer: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PLUGINS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PluginsArgs {
    #[command(subcommand)]
    pub command: PluginsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PluginsCommand {
    /// List plugin instances
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get plugin instance details
    Get {
        /// Plugin ID
        plugin: String,
    },

    /// Create a plugin instance (global unless scoped)
    Create {
        /// Plugin name, e.g. "rate-limiting"
        name: String,

        /// Scope to a route
        #[arg(long)]
        route: Option<String>,

        /// Scope to a service
        #[arg(long)]
        service: Option<String>,

        /// Scope to a consumer
        #[arg(long)]
        consumer: Option<String>,

        /// Config entry (repeatable); the value is parsed as JSON when possible
        #[arg(long = "config", short = 'c', value_name = "KEY=VALUE")]
        config: Vec<String>,

        /// Read the plugin config from a JSON object file
        #[arg(long, conflicts_with = "config")]
        config_file: Option<PathBuf>,

        /// Create the plugin disabled
        #[arg(long)]
        disabled: bool,

        /// Tag (repeatable); defaults to the plugin name
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Update a plugin instance
    Update(UpdateArgs),

    /// Delete a plugin instance
    #[command(alias = "rm")]
    Delete {
        /// Plugin ID
        plugin: String,
    },

    /// List plugins available on this node
    Enabled,

    /// Show the config schema of a plugin
    Schema {
        /// Plugin name
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CERTIFICATES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CertificatesArgs {
    #[command(subcommand)]
    pub command: CertificatesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CertificatesCommand {
    /// List certificates
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get certificate details
    Get {
        /// Certificate ID
        certificate: String,
    },

    /// Upload a certificate and key
    Create {
        /// PEM-encoded certificate file
        #[arg(long)]
        cert_file: PathBuf,

        /// PEM-encoded private key file
        #[arg(long)]
        key_file: PathBuf,

        /// SNI to attach (repeatable)
        #[arg(long = "sni")]
        snis: Vec<String>,

        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Update a certificate
    Update(UpdateArgs),

    /// Delete a certificate
    #[command(alias = "rm")]
    Delete {
        /// Certificate ID
        certificate: String,
    },

    /// List SNIs of a certificate
    Snis {
        /// Certificate ID
        certificate: String,
    },

    /// List services presenting a certificate
    Services {
        /// Certificate ID
        certificate: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SNIS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SnisArgs {
    #[command(subcommand)]
    pub command: SnisCommand,
}

#[derive(Debug, Subcommand)]
pub enum SnisCommand {
    /// List SNIs
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only SNIs of this certificate
        #[arg(long, conflicts_with = "tags")]
        certificate: Option<String>,
    },

    /// Get SNI details
    Get {
        /// SNI ID or name
        sni: String,
    },

    /// Create an SNI
    Create {
        /// Hostname
        name: String,

        /// Certificate ID
        #[arg(long)]
        certificate: String,

        /// Tag (repeatable); defaults to the hostname
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Update an SNI
    Update(UpdateArgs),

    /// Delete an SNI
    #[command(alias = "rm")]
    Delete {
        /// SNI ID or name
        sni: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  UPSTREAMS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UpstreamsArgs {
    #[command(subcommand)]
    pub command: UpstreamsCommand,
}

#[derive(Debug, Subcommand)]
pub enum UpstreamsCommand {
    /// List upstreams
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get upstream details
    Get {
        /// Upstream ID or name
        upstream: String,
    },

    /// Create an upstream
    Create {
        /// Upstream name (matches a service host)
        name: String,

        /// Balancing algorithm
        #[arg(long, default_value = "round-robin")]
        algorithm: String,

        /// Hash input: none, consumer, ip, header or cookie
        #[arg(long, default_value = "none")]
        hash_on: String,

        /// Hash fallback input
        #[arg(long, default_value = "none")]
        hash_fallback: String,

        /// Number of slots in the balancer ring
        #[arg(long, default_value = "10000")]
        slots: u32,

        /// Host header sent to targets
        #[arg(long)]
        host_header: Option<String>,

        /// Tag (repeatable); defaults to the upstream name
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Update an upstream
    Update(UpdateArgs),

    /// Delete an upstream
    #[command(alias = "rm")]
    Delete {
        /// Upstream ID or name
        upstream: String,
    },

    /// Show per-target health
    Health {
        /// Upstream ID or name
        upstream: String,
    },

    /// List targets of an upstream
    Targets {
        /// Upstream ID or name
        upstream: String,

        /// Include disabled (weight 0) targets
        #[arg(long, short = 'a')]
        all: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TARGETS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TargetsArgs {
    #[command(subcommand)]
    pub command: TargetsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TargetsCommand {
    /// List targets of an upstream
    #[command(alias = "ls")]
    List {
        /// Upstream ID or name
        upstream: String,

        /// Include disabled (weight 0) targets
        #[arg(long, short = 'a')]
        all: bool,
    },

    /// Add a target to an upstream
    Create {
        /// Upstream ID or name
        upstream: String,

        /// Target address (host:port)
        target: String,

        /// Balancer weight, 0-1000
        #[arg(long, short = 'w', default_value = "100")]
        weight: u32,

        /// Tag (repeatable); defaults to the target address
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Update a target
    Update {
        /// Upstream ID or name
        upstream: String,

        #[command(flatten)]
        update: UpdateArgs,
    },

    /// Remove a target from an upstream
    #[command(alias = "rm")]
    Delete {
        /// Upstream ID or name
        upstream: String,

        /// Target ID or address
        target: String,
    },

    /// Mark a target (or one of its addresses) healthy
    Healthy(TargetHealthArgs),

    /// Mark a target (or one of its addresses) unhealthy
    Unhealthy(TargetHealthArgs),

    /// Show the upstream a target belongs to
    Upstream {
        /// Target ID
        target: String,
    },
}

#[derive(Debug, Args)]
pub struct TargetHealthArgs {
    /// Upstream ID or name
    pub upstream: String,

    /// Target ID or address
    pub target: String,

    /// Only this resolved address (ip:port) of the target
    #[arg(long)]
    pub address: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TAGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TagsArgs {
    #[command(subcommand)]
    pub command: TagsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TagsCommand {
    /// List every tag on every entity
    #[command(alias = "ls")]
    List,

    /// List entities carrying a tag
    Get {
        /// Tag name
        tag: String,
    },
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
    /// Write a config file with one profile
    Init {
        /// Profile name
        #[arg(long = "name", default_value = "default")]
        name: String,

        /// Admin API URL for the profile [default: https://localhost:8444]
        #[arg(long = "url")]
        url: Option<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
