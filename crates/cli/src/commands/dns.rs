//! `dns` commands: forwarder configuration, hosts table and cache.

use anyhow::Result;
use clap::Subcommand;
use control_client::Session;
use control_config::Config;
use tracing::info;

use crate::commands::{SessionOptions, with_session};
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum DnsCommand {
    /// Show DNS forwarder configuration
    Config,
    /// List static host entries
    Hosts,
    /// Flush the DNS cache
    ClearCache,
}

pub async fn run(
    config: &Config,
    options: &SessionOptions,
    command: DnsCommand,
    output_format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    match command {
        DnsCommand::Config => {
            let dns = with_session(config, options, async |session: &mut Session| {
                Ok(session.get_dns_config().await?)
            })
            .await?;
            output_result(&formatter.format_dns_config(&dns)?);
        }
        DnsCommand::Hosts => {
            let hosts = with_session(config, options, async |session: &mut Session| {
                Ok(session.get_dns_hosts().await?)
            })
            .await?;
            output_result(&formatter.format_dns_hosts(&hosts)?);
        }
        DnsCommand::ClearCache => {
            info!("Clearing DNS cache");
            with_session(config, options, async |session: &mut Session| {
                Ok(session.clear_dns_cache().await?)
            })
            .await?;
            println!("DNS cache cleared.");
        }
    }
    Ok(())
}
