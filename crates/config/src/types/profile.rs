//! Named connection profiles stored in the config file.

use serde::{Deserialize, Serialize};

use super::auth::secret_string;
use secrecy::SecretString;

/// Profile configuration for storing named connection profiles.
///
/// Every field is optional; missing values fall through to environment
/// variables and built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Server host or `host:port`
    pub server: Option<String>,
    /// Administrator user name
    pub username: Option<String>,
    /// Administrator password
    #[serde(with = "optional_secret", skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretString>,
    /// Whether to skip TLS verification
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Client application name reported at login
    pub app_name: Option<String>,
    /// Client application vendor reported at login
    pub app_vendor: Option<String>,
    /// Client application version reported at login
    pub app_version: Option<String>,
}

mod optional_secret {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match secret {
            Some(value) => super::secret_string::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(|s| SecretString::new(s.into())))
    }
}
