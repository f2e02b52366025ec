//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `CONTROL_*` environment variables.
//! - Overlay environment values onto a ConfigLoader.
//!
//! Invariants:
//! - Environment variables take precedence over profile settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid boolean or numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use super::layer::Layer;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

fn parse_timeout(var: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be a whole number of seconds".to_string(),
        })
}

/// Settings read from `CONTROL_*` variables.
fn env_layer() -> Result<Layer, ConfigError> {
    Ok(Layer {
        server: env_var_or_none("CONTROL_SERVER"),
        username: env_var_or_none("CONTROL_USERNAME"),
        password: env_var_or_none("CONTROL_PASSWORD").map(|p| SecretString::new(p.into())),
        skip_verify: env_var_or_none("CONTROL_SKIP_VERIFY")
            .map(|v| parse_bool("CONTROL_SKIP_VERIFY", &v))
            .transpose()?,
        timeout: env_var_or_none("CONTROL_TIMEOUT")
            .map(|v| parse_timeout("CONTROL_TIMEOUT", &v))
            .transpose()?,
        app_name: env_var_or_none("CONTROL_APP_NAME"),
        app_vendor: env_var_or_none("CONTROL_APP_VENDOR"),
        app_version: env_var_or_none("CONTROL_APP_VERSION"),
    })
}

/// Overlay the environment onto the loader.
///
/// `CONTROL_PROFILE` and `CONTROL_CONFIG_PATH` only fill in values that were
/// not already chosen through the builder.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let layer = env_layer()?;
    if loader.profile_name.is_none() {
        loader.profile_name = env_var_or_none("CONTROL_PROFILE");
    }
    if loader.config_path.is_none() {
        loader.config_path = env_var_or_none("CONTROL_CONFIG_PATH").map(PathBuf::from);
    }
    loader.values.merge(layer);
    Ok(())
}
