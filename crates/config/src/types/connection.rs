//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (server address, TLS verification, timeout).
//! - Define the main `Config` structure combining connection, credentials and application.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Turning the server address into an endpoint URL (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `server` is a host or `host:port`, never a URL with scheme or path.

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::types::application::ApplicationConfig;
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection settings for the appliance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Host name or address, optionally with `:port` (e.g. `fw.example.com:4081`)
    pub server: String,
    /// Whether to skip TLS verification (appliances ship self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl ConnectionConfig {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Login credentials
    pub auth: AuthConfig,
    /// Client application identity reported at login
    #[serde(default)]
    pub application: ApplicationConfig,
}

impl Config {
    /// Create a config for `server` with the given credentials and default settings.
    pub fn with_credentials(
        server: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            connection: ConnectionConfig::new(server),
            auth: AuthConfig::new(username, password),
            application: ApplicationConfig::default(),
        }
    }
}
