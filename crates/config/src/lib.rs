//! Configuration management for the appliance administration client.
//!
//! This crate provides types and loaders for the connection settings,
//! credentials and client application identity, merged from `.env` files,
//! environment variables and named profiles in a JSON config file.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigFile, default_config_path};
pub use types::{ApplicationConfig, AuthConfig, Config, ConnectionConfig, ProfileConfig};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
