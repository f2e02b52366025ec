//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Load configuration from JSON profile files.
//! - Overlay the selected profile onto a ConfigLoader.
//!
//! Invariants:
//! - Profile settings are applied before environment variables (env vars take precedence).
//! - Missing profiles are recorded for later error handling in build().

use tracing::debug;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use super::layer::Layer;
use crate::persistence::{default_config_path, read_config_file};

/// Apply profile configuration from a profile file to the loader.
///
/// If the profile or the file is not found, this records the missing profile
/// name for later error handling in `build()`.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let Some(profile_name) = loader.profile_name.clone() else {
        return Ok(());
    };

    let config_path = if let Some(path) = &loader.config_path {
        path.clone()
    } else {
        default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?
    };

    if !config_path.exists() {
        debug!(path = %config_path.display(), "config file not found");
        loader.profile_missing = Some(profile_name);
        return Ok(());
    }

    let file = read_config_file(&config_path)?;
    match file.profile(&profile_name) {
        Some(profile) => loader.values.merge(Layer::from(profile)),
        None => {
            debug!(profile = %profile_name, "profile not present in config file");
            loader.profile_missing = Some(profile_name);
        }
    }
    Ok(())
}

