//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the JSON and table output formats.
//! - Implement the `Formatter` trait for the appliance resource types the CLI shows.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | Table | Human message | `No users found.` |

use anyhow::Result;
use control_client::models::{
    DhcpLease, DhcpMode, DhcpScope, DnsConfig, DnsHost, LogItem, LogViewport, ProductInfo, User,
};
use serde::Serialize;

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Output of the `info` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoOutput {
    pub product: ProductInfo,
    pub hostname: String,
    pub uptime_seconds: i64,
}

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_info(&self, info: &InfoOutput) -> Result<String>;

    fn format_users(&self, users: &[User]) -> Result<String>;

    fn format_dhcp_scopes(&self, scopes: &[DhcpScope]) -> Result<String>;

    fn format_dhcp_leases(&self, leases: &[DhcpLease]) -> Result<String>;

    fn format_dhcp_mode(&self, mode: &DhcpMode) -> Result<String>;

    fn format_dns_config(&self, config: &DnsConfig) -> Result<String>;

    fn format_dns_hosts(&self, hosts: &[DnsHost]) -> Result<String>;

    /// Format a window of log lines.
    fn format_log(&self, viewport: &LogViewport) -> Result<String>;

    fn format_log_set(&self, logs: &[LogItem]) -> Result<String>;

    /// Format the untyped result of a raw call.
    fn format_value(&self, value: &serde_json::Value) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// Print formatted output to stdout, ending with exactly one newline.
pub fn output_result(output: &str) {
    println!("{}", output.trim_end_matches('\n'));
}
