//! control-cli - command-line interface for firewall appliance administration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Merge configuration from profile file, environment and flags.
//! - Execute commands through the shared client library and print results.
//!
//! Does NOT handle:
//! - JSON-RPC transport or wire types (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Precedence is flags > environment > profile file > defaults.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use commands::SessionOptions;
use control_config::ConfigLoader;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn load_config(cli: &Cli) -> anyhow::Result<control_config::Config> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored so the env var / default location still applies.
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(ref profile_name) = cli.profile {
        loader = loader.with_profile_name(profile_name.clone());
    }

    loader = loader.from_profile()?;
    loader = loader.from_env()?;

    if let Some(ref server) = cli.server {
        loader = loader.with_server(server.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    Ok(loader.build()?)
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let tracing_guard = if let Some(ref endpoint) = cli.otlp_endpoint {
        let config = control_client::TracingConfig::new()
            .with_otlp_endpoint(endpoint)
            .with_service_name("control-cli")
            .with_stderr(true);

        match config.init() {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Failed to initialize OpenTelemetry tracing: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        // Logs go to stderr so stdout stays parseable.
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        None
    };

    let metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match control_client::MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let options = SessionOptions {
        base_url: cli.base_url.clone(),
        metrics: metrics_exporter.is_some(),
    };

    let exit_code = match run_command(cli, config, options).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            let code = e.exit_code();
            if code == ExitCode::Interrupted {
                eprintln!("^C\nOperation cancelled by user");
            } else {
                eprintln!("{:#}", e);
            }
            code
        }
    };

    if let Some(guard) = tracing_guard {
        guard.shutdown();
    }

    std::process::exit(exit_code.as_i32());
}
