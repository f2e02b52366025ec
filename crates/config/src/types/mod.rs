//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define configuration types for connections, credentials, application identity and profiles.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod application;
mod auth;
pub(crate) mod connection;
mod profile;

pub use application::ApplicationConfig;
pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
pub use profile::ProfileConfig;
