//! Configuration loading errors.
//!
//! Invariants:
//! - No variant carries a password or a raw `.env` line.
//! - Variants name the env var, path or profile that caused them.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::persistence::ConfigFileError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is invalid: {message}")]
    InvalidValue { var: String, message: String },

    #[error("no appliance address configured; pass --server, set CONTROL_SERVER or use a profile")]
    MissingServer,

    #[error("username and password are both required to log in")]
    MissingAuth,

    #[error("cannot locate the platform config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("cannot read profile file {}", path.display())]
    ConfigFileRead { path: PathBuf },

    #[error("profile file {} is not valid JSON", path.display())]
    ConfigFileParse { path: PathBuf },

    #[error("profile '{0}' is not defined")]
    ProfileNotFound(String),

    #[error("timeout out of range: {message}")]
    InvalidTimeout { message: String },

    /// Only the byte offset of the failure is kept.
    #[error(".env syntax error at byte {error_index} (set DOTENV_DISABLED=1 to skip .env loading)")]
    DotenvParse { error_index: usize },

    #[error("cannot read .env: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error(".env could not be loaded (set DOTENV_DISABLED=1 to skip .env loading)")]
    DotenvUnknown,
}

impl From<ConfigFileError> for ConfigError {
    fn from(error: ConfigFileError) -> Self {
        match error {
            ConfigFileError::Read { path, .. } => Self::ConfigFileRead { path },
            ConfigFileError::Parse { path, .. } => Self::ConfigFileParse { path },
        }
    }
}
