//! Identity of the client application reported at login.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_APP_NAME, DEFAULT_APP_VENDOR, DEFAULT_APP_VERSION};

/// Name, vendor and version sent in the `application` field of `Session.login`.
///
/// Empty components are replaced by placeholder defaults, so a constructed
/// value is always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub name: String,
    pub vendor: String,
    pub version: String,
}

impl ApplicationConfig {
    /// Build an application identity, substituting defaults for blank parts.
    pub fn new(
        name: impl Into<String>,
        vendor: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        fn or_default(value: String, default: &str) -> String {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value
            }
        }

        Self {
            name: or_default(name.into(), DEFAULT_APP_NAME),
            vendor: or_default(vendor.into(), DEFAULT_APP_VENDOR),
            version: or_default(version.into(), DEFAULT_APP_VERSION),
        }
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self::new("", "", "")
    }
}
