//! Centralized constants for the control client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Endpoint Defaults
// =============================================================================

/// Default administration port of the appliance.
pub const DEFAULT_PORT: u16 = 4081;

/// Path of the JSON-RPC administration endpoint.
pub const API_PATH: &str = "/admin/api/jsonrpc";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Client Application Identity
// =============================================================================

/// Application name reported at login when none is configured.
pub const DEFAULT_APP_NAME: &str = "TempApp";

/// Application vendor reported at login when none is configured.
pub const DEFAULT_APP_VENDOR: &str = "TempVendor";

/// Application version reported at login when none is configured.
pub const DEFAULT_APP_VERSION: &str = "v1.0.1";

// =============================================================================
// Error Body Handling
// =============================================================================

/// Maximum number of bytes of a non-2xx response body kept in errors.
pub const MAX_ERROR_BODY_BYTES: usize = 1024;

// =============================================================================
// Listing Defaults
// =============================================================================

/// Default number of log lines fetched by the CLI.
pub const DEFAULT_LOG_LINES: i64 = 100;

/// Default page size for CLI listings.
pub const DEFAULT_LIST_LIMIT: i64 = 100;
