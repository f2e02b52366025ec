//! Assembling a [`crate::Config`] from `.env`, `CONTROL_*` variables,
//! JSON profiles and explicit overrides.
//!
//! `.env` is never read implicitly: callers opt in with `load_dotenv()`,
//! and `DOTENV_DISABLED=1` turns even that into a no-op.

mod builder;
mod env;
mod error;
mod layer;
mod profile;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
