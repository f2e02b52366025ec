//! `call` command: invoke any API method with raw JSON parameters.
//!
//! Invariants:
//! - `--params` must be a JSON object; without it the request carries no `params` member.

use anyhow::Result;
use control_client::Session;
use control_config::Config;
use serde_json::Value;
use tracing::info;

use crate::commands::{SessionOptions, with_session};
use crate::error::CliError;
use crate::formatters::{OutputFormat, get_formatter, output_result};

/// Parse `--params`, rejecting anything but a JSON object.
fn parse_params(raw: Option<&str>) -> Result<Option<Value>, CliError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ Value::Object(_)) => Ok(Some(value)),
        Ok(_) => Err(CliError::InvalidInput(
            "--params must be a JSON object".to_string(),
        )),
        Err(e) => Err(CliError::InvalidInput(format!(
            "--params is not valid JSON: {e}"
        ))),
    }
}

pub async fn run(
    config: &Config,
    options: &SessionOptions,
    method: &str,
    params: Option<&str>,
    output_format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let params = parse_params(params)?;
    info!(method, "Calling method");

    let result = with_session(config, options, async |session: &mut Session| {
        let raw = session.invoke(method, params.as_ref()).await?;
        Ok(serde_json::from_str::<Value>(raw.get())?)
    })
    .await?;

    output_result(&get_formatter(format).format_value(&result)?);
    Ok(())
}
