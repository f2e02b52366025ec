//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `env_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod profile_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable `from_env()` reads, unset.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    [
        "CONTROL_SERVER",
        "CONTROL_USERNAME",
        "CONTROL_PASSWORD",
        "CONTROL_SKIP_VERIFY",
        "CONTROL_TIMEOUT",
        "CONTROL_APP_NAME",
        "CONTROL_APP_VENDOR",
        "CONTROL_APP_VERSION",
        "CONTROL_PROFILE",
        "CONTROL_CONFIG_PATH",
    ]
    .into_iter()
    .map(|k| (k, None))
    .collect()
}
