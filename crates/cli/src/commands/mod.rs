//! CLI command implementations.
//!
//! Every command runs inside [`with_session`]: build a session from the
//! loaded configuration, log in, run, and log out.
//!
//! Invariants:
//! - Logout is attempted whenever login succeeded, also after a failed or interrupted command.
//! - A logout failure is logged and never replaces the command's own outcome.

pub mod call;
pub mod dhcp;
pub mod dns;
pub mod info;
pub mod logs;
pub mod users;

use anyhow::Result;
use control_client::{MetricsCollector, Session};
use control_config::Config;
use secrecy::ExposeSecret;
use tracing::{info, warn};

use crate::error::CliError;

/// Session options that do not come from the configuration file.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Endpoint URL replacing the one derived from the server address.
    pub base_url: Option<String>,
    /// Record per-call metrics.
    pub metrics: bool,
}

/// Build an unauthenticated session from configuration.
pub fn build_session(config: &Config, options: &SessionOptions) -> Result<Session> {
    let mut builder = Session::builder().from_config(config);
    if let Some(url) = &options.base_url {
        builder = builder.base_url(url.clone());
    }
    if options.metrics {
        builder = builder.metrics(MetricsCollector::new());
    }
    Ok(builder.build()?)
}

/// Log in, run `f`, and log out.
///
/// Ctrl+C while `f` runs drops the in-flight call, logs out, and
/// returns [`CliError::Cancelled`].
pub async fn with_session<T, F>(config: &Config, options: &SessionOptions, f: F) -> Result<T>
where
    F: AsyncFnOnce(&mut Session) -> Result<T>,
{
    let mut session = build_session(config, options)?;
    let username = &config.auth.username;

    session
        .login(username, config.auth.password.expose_secret(), None)
        .await
        .map_err(|source| CliError::LoginFailed {
            username: username.clone(),
            source,
        })?;
    info!(user = %username, "logged in");

    let outcome = tokio::select! {
        res = f(&mut session) => res,
        _ = tokio::signal::ctrl_c() => Err(CliError::Cancelled.into()),
    };

    if let Err(e) = session.logout().await {
        warn!(error = %e, "logout failed");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn config(server: &str) -> Config {
        Config::with_credentials(server, "admin", SecretString::new("secret".into()))
    }

    #[test]
    fn test_build_session_from_server() {
        let session = build_session(&config("fw.example.com"), &SessionOptions::default()).unwrap();
        assert_eq!(
            session.base_url(),
            "https://fw.example.com:4081/admin/api/jsonrpc"
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_base_url_override() {
        let options = SessionOptions {
            base_url: Some("http://127.0.0.1:8080/admin/api/jsonrpc".to_string()),
            metrics: false,
        };
        let session = build_session(&config("ignored.example.com"), &options).unwrap();
        assert_eq!(session.base_url(), "http://127.0.0.1:8080/admin/api/jsonrpc");
    }

    #[test]
    fn test_bad_server_is_rejected() {
        let err = build_session(&config("https://fw/"), &SessionOptions::default()).unwrap_err();
        assert!(err.downcast_ref::<control_client::ClientError>().is_some());
    }
}
