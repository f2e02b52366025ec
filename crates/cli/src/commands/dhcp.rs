//! `dhcp` commands: scopes, leases and server mode.

use anyhow::Result;
use clap::Subcommand;
use control_client::{SearchQuery, Session};
use control_config::Config;
use tracing::info;

use crate::commands::{SessionOptions, with_session};
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum DhcpCommand {
    /// List DHCP scopes
    Scopes,
    /// List leases and reservations
    Leases {
        /// Scope id to list (repeatable); all scopes when omitted
        #[arg(long)]
        scope: Vec<String>,
    },
    /// Show whether scopes are configured automatically or manually
    Mode,
}

pub async fn run(
    config: &Config,
    options: &SessionOptions,
    command: DhcpCommand,
    output_format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    let output = match command {
        DhcpCommand::Scopes => {
            info!("Listing DHCP scopes");
            let page = with_session(config, options, async |session: &mut Session| {
                Ok(session.get_dhcp_scopes(&SearchQuery::all()).await?)
            })
            .await?;
            formatter.format_dhcp_scopes(&page.list)?
        }
        DhcpCommand::Leases { scope } => {
            info!(scopes = ?scope, "Listing DHCP leases");
            let page = with_session(config, options, async move |session: &mut Session| {
                let scope_ids = if scope.is_empty() {
                    session
                        .get_dhcp_scopes(&SearchQuery::all())
                        .await?
                        .list
                        .into_iter()
                        .map(|s| s.id)
                        .collect()
                } else {
                    scope
                };
                Ok(session
                    .get_dhcp_leases(&SearchQuery::all(), &scope_ids)
                    .await?)
            })
            .await?;
            formatter.format_dhcp_leases(&page.list)?
        }
        DhcpCommand::Mode => {
            let mode = with_session(config, options, async |session: &mut Session| {
                Ok(session.get_dhcp_mode().await?)
            })
            .await?;
            formatter.format_dhcp_mode(&mode)?
        }
    };

    output_result(&output);
    Ok(())
}
