//! `info` command: product information, host name and uptime.

use anyhow::{Context, Result};
use control_client::Session;
use control_config::Config;
use tracing::info;

use crate::commands::{SessionOptions, with_session};
use crate::formatters::{InfoOutput, OutputFormat, get_formatter, output_result};

pub async fn run(config: &Config, options: &SessionOptions, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    info!("Fetching product information");

    let output = with_session(config, options, async |session: &mut Session| {
        let product = session
            .get_product_info()
            .await
            .context("failed to read product information")?;
        let hostname = session.get_system_hostname().await?;
        let uptime_seconds = session.get_uptime().await?;
        Ok(InfoOutput {
            product,
            hostname,
            uptime_seconds,
        })
    })
    .await?;

    output_result(&get_formatter(format).format_info(&output)?);
    Ok(())
}
