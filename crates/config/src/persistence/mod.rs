//! Config file persistence.
//!
//! Responsibilities:
//! - Determine the standard configuration file path.
//! - Read named connection profiles from the JSON config file.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - High-level configuration merging (see `loader`).
//!
//! Invariants:
//! - Profile names are unique within a configuration file (JSON object keys).
//! - A missing `profiles` key reads as an empty profile set.

mod file;
mod path;

pub use file::{ConfigFile, ConfigFileError, read_config_file};
pub use path::default_config_path;
