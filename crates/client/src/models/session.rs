//! Session-level types: login identity, login kind and configuration timestamps.

use serde::{Deserialize, Serialize};

/// Identity of the client application, reported at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiApplication {
    pub name: String,
    pub vendor: String,
    pub version: String,
}

impl ApiApplication {
    pub fn new(
        name: impl Into<String>,
        vendor: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            vendor: vendor.into(),
            version: version.into(),
        }
    }
}

impl From<&control_config::ApplicationConfig> for ApiApplication {
    fn from(config: &control_config::ApplicationConfig) -> Self {
        Self::new(&config.name, &config.vendor, &config.version)
    }
}

impl Default for ApiApplication {
    fn default() -> Self {
        Self::from(&control_config::ApplicationConfig::default())
    }
}

/// How the current session was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginType {
    /// Credentials entered by the user.
    LoginRegular,
    /// Login by IP address or NTLM.
    LoginAutomatic,
    /// Login from the reactivation page.
    LoginReactivation,
}

/// Last configuration change seen by a named client component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientTimestamp {
    pub name: String,
    pub timestamp: i64,
}

pub type ClientTimestampList = Vec<ClientTimestamp>;
