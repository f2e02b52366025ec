//! `logs` commands: read a log window or list available logs.
//!
//! Invariants:
//! - Line numbers are those of the appliance; `--from 0` is the oldest kept line.

use anyhow::{Context, Result};
use clap::Subcommand;
use control_client::Session;
use control_config::Config;
use tracing::info;

use crate::commands::{SessionOptions, with_session};
use crate::error::CliError;
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum LogsCommand {
    /// List available logs
    List,
}

pub async fn run(
    config: &Config,
    options: &SessionOptions,
    command: Option<LogsCommand>,
    name: Option<String>,
    from: i64,
    count: i64,
    output_format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    match (command, name) {
        (Some(LogsCommand::List), _) => {
            let logs = with_session(config, options, async |session: &mut Session| {
                Ok(session.get_log_set().await?)
            })
            .await?;
            output_result(&formatter.format_log_set(&logs)?);
        }
        (None, Some(name)) => {
            if from < 0 || count <= 0 {
                return Err(CliError::InvalidInput(
                    "--from must be >= 0 and --count must be > 0".to_string(),
                )
                .into());
            }
            info!(log = %name, from, count, "Reading log");
            let viewport = with_session(config, options, async |session: &mut Session| {
                session
                    .get_log(&name, from, count)
                    .await
                    .with_context(|| format!("failed to read log '{name}'"))
            })
            .await?;
            output_result(&formatter.format_log(&viewport)?);
        }
        (None, None) => {
            return Err(CliError::InvalidInput(
                "specify a log name or `logs list`".to_string(),
            )
            .into());
        }
    }
    Ok(())
}
