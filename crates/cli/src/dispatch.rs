//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main`).

use anyhow::Result;
use control_config::Config;

use crate::args::{Cli, Commands};
use crate::commands::{self, SessionOptions};

pub(crate) async fn run_command(cli: Cli, config: Config, options: SessionOptions) -> Result<()> {
    let output = cli.output.as_str();
    match cli.command {
        Commands::Info => commands::info::run(&config, &options, output).await,
        Commands::Users { domain, limit } => {
            commands::users::run(&config, &options, &domain, limit, output).await
        }
        Commands::Dhcp { command } => commands::dhcp::run(&config, &options, command, output).await,
        Commands::Dns { command } => commands::dns::run(&config, &options, command, output).await,
        Commands::Logs {
            command,
            name,
            from,
            count,
        } => commands::logs::run(&config, &options, command, name, from, count, output).await,
        Commands::Call { method, params } => {
            commands::call::run(&config, &options, &method, params.as_deref(), output).await
        }
    }
}
