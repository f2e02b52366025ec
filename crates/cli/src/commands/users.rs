//! `users` command: list the users of a domain.
//!
//! Does NOT handle:
//! - Creating or changing users; use `call Users.create` / `call Users.set`.

use anyhow::{Context, Result};
use control_client::{SearchQuery, Session};
use control_client::models::SortDirection;
use control_config::Config;
use tracing::{info, warn};

use crate::commands::{SessionOptions, with_session};
use crate::formatters::{OutputFormat, get_formatter, output_result};

pub async fn run(
    config: &Config,
    options: &SessionOptions,
    domain: &str,
    limit: i64,
    output_format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    info!(domain, limit, "Listing users");

    let query = SearchQuery::all()
        .page(0, limit)
        .order_by("userName", SortDirection::Asc);
    let page = with_session(config, options, async |session: &mut Session| {
        session
            .get_users(&query, domain)
            .await
            .with_context(|| format!("failed to list users of domain '{domain}'"))
    })
    .await?;

    for w in &page.warnings {
        warn!(code = w.code, message = %w.message, "user listing warning");
    }
    output_result(&get_formatter(format).format_users(&page.list)?);
    Ok(())
}
