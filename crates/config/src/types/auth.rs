//! Credential types for the appliance administration login.
//!
//! Responsibilities:
//! - Hold the username and password used for `Session.login`.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - The login exchange itself or token storage (see client crate).
//!
//! Invariants:
//! - The password is always a `secrecy::SecretString` and never appears in `Debug` output.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
pub(crate) mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Administrator user name.
    pub username: String,
    /// Administrator password.
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

impl AuthConfig {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}
