//! `ConfigLoader`: layered configuration for one appliance connection.
//!
//! Layers are applied in call order: typically `from_profile()`, then
//! `from_env()`, then explicit `with_*` overrides from the command line.
//! Parsing of individual sources lives in `env.rs` and `profile.rs`;
//! `.env` files are only read when `load_dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::layer::Layer;
use super::profile::apply_profile;
use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{ApplicationConfig, AuthConfig, Config, ConnectionConfig};

/// Stacks configuration layers and validates the result.
///
/// Each `from_*` call and each `with_*` override is applied in call order;
/// later values replace earlier ones field by field.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    pub(super) values: Layer,
    pub(super) profile_name: Option<String>,
    pub(super) profile_missing: Option<String>,
    pub(super) config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the active profile name to load from the config file.
    pub fn with_profile_name(mut self, name: String) -> Self {
        self.profile_name = Some(name);
        self
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from a profile in the config file.
    ///
    /// If the profile is not found, this records the missing profile name
    /// for later error handling in `build()`.
    pub fn from_profile(mut self) -> Result<Self, ConfigError> {
        apply_profile(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the server address (`host` or `host:port`).
    pub fn with_server(mut self, server: String) -> Self {
        self.values.server = Some(server);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.values.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.values.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.values.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.values.timeout = Some(timeout);
        self
    }

    /// Set the client application identity reported at login.
    pub fn with_application(mut self, name: String, vendor: String, version: String) -> Self {
        self.values.merge(Layer {
            app_name: Some(name),
            app_vendor: Some(vendor),
            app_version: Some(version),
            ..Layer::default()
        });
        self
    }

    /// Validate the merged layers into a [`Config`].
    ///
    /// A profile that could not be found is only an error when the other
    /// layers did not supply a server and both credentials.
    pub fn build(self) -> Result<Config, ConfigError> {
        let Self {
            values,
            profile_missing,
            ..
        } = self;

        if let Some(profile_name) = profile_missing
            && !values.is_complete()
        {
            return Err(ConfigError::ProfileNotFound(profile_name));
        }

        let server = values
            .server
            .as_deref()
            .map(validate_server)
            .transpose()?
            .ok_or(ConfigError::MissingServer)?;

        let username = values
            .username
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingAuth)?;
        let password = values
            .password
            .filter(|p| !p.expose_secret().is_empty())
            .ok_or(ConfigError::MissingAuth)?;

        let timeout = values
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        Ok(Config {
            connection: ConnectionConfig {
                server,
                skip_verify: values.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig { username, password },
            application: ApplicationConfig::new(
                values.app_name.unwrap_or_default(),
                values.app_vendor.unwrap_or_default(),
                values.app_version.unwrap_or_default(),
            ),
        })
    }

    pub fn profile_name(&self) -> Option<&String> {
        self.profile_name.as_ref()
    }
}

/// Timeout must be within `1..=MAX_TIMEOUT_SECS` seconds.
fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    match timeout.as_secs() {
        0 => Err(ConfigError::InvalidTimeout {
            message: "must be at least 1 second".to_string(),
        }),
        secs if secs > MAX_TIMEOUT_SECS => Err(ConfigError::InvalidTimeout {
            message: format!("{secs}s exceeds the {MAX_TIMEOUT_SECS}s maximum"),
        }),
        _ => Ok(()),
    }
}

/// Validates a server address string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing (returns Err(ConfigError::MissingServer))
/// - Reject anything carrying a scheme or a path; only `host` or `host:port` is accepted
fn validate_server(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingServer);
    }

    if trimmed.contains("://") || trimmed.contains('/') {
        return Err(ConfigError::InvalidValue {
            var: "server".into(),
            message: format!(
                "must be a host name or host:port without scheme or path (e.g. fw.example.com:4081), got: {trimmed}"
            ),
        });
    }

    Ok(trimmed.to_string())
}
