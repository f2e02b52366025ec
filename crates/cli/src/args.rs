//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read every global option from its `CONTROL_*` environment variable as a fallback.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge configuration sources (see `main`).

use clap::{Parser, Subcommand};
use control_config::constants::{DEFAULT_LIST_LIMIT, DEFAULT_LOG_LINES};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "control-cli")]
#[command(about = "Administer a firewall appliance through its JSON-RPC API", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  control-cli -s fw.example.com -u admin info\n  control-cli --profile branch users --limit 20\n  control-cli dhcp leases --scope 1 -o json\n  control-cli logs security --count 50\n  control-cli call ProductInfo.getUptime\n  control-cli call Session.getSessionVariable --params '{\"name\":\"theme\"}'\n"
)]
pub struct Cli {
    /// Appliance address: host, host:port or IPv6 literal (default port 4081)
    #[arg(short, long, global = true, env = "CONTROL_SERVER")]
    pub server: Option<String>,

    /// Admin user name
    #[arg(short, long, global = true, env = "CONTROL_USERNAME")]
    pub username: Option<String>,

    /// Admin password
    #[arg(short, long, global = true, env = "CONTROL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "CONTROL_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "CONTROL_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Profile name to load from the config file
    #[arg(long, global = true, env = "CONTROL_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file (overrides default location)
    #[arg(long, global = true, env = "CONTROL_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Full endpoint URL, used instead of the one derived from --server
    #[arg(long, global = true, env = "CONTROL_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true, env = "CONTROL_OUTPUT", default_value = "table")]
    pub output: String,

    /// OTLP collector endpoint for trace export (e.g. http://localhost:4317)
    #[arg(long, global = true, env = "CONTROL_OTLP_ENDPOINT", value_name = "URL")]
    pub otlp_endpoint: Option<String>,

    /// Serve Prometheus metrics on this address (e.g. 127.0.0.1:9090)
    #[arg(long, global = true, env = "CONTROL_METRICS_BIND", value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show product information, host name and uptime
    Info,

    /// List users of a domain
    Users {
        /// Domain id ("local" for the internal user database)
        #[arg(short, long, default_value = "local")]
        domain: String,

        /// Maximum number of users to list (0 for all)
        #[arg(short, long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: i64,
    },

    /// Inspect the DHCP server
    Dhcp {
        #[command(subcommand)]
        command: commands::dhcp::DhcpCommand,
    },

    /// Inspect the DNS forwarder
    Dns {
        #[command(subcommand)]
        command: commands::dns::DnsCommand,
    },

    /// Read appliance logs
    #[command(args_conflicts_with_subcommands = true)]
    Logs {
        #[command(subcommand)]
        command: Option<commands::logs::LogsCommand>,

        /// Log to read (e.g. "security", "debug"); see `logs list`
        name: Option<String>,

        /// First line to read
        #[arg(long, default_value_t = 0)]
        from: i64,

        /// Number of lines to read
        #[arg(short, long, default_value_t = DEFAULT_LOG_LINES)]
        count: i64,
    },

    /// Call any API method and print its result
    Call {
        /// Method name, e.g. "ProductInfo.get"
        method: String,

        /// Parameters as a JSON object
        #[arg(long, value_name = "JSON")]
        params: Option<String>,
    },
}
