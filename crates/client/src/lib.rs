//! JSON-RPC client for the firewall appliance administration API.
//!
//! This crate provides a typed client for the appliance's `/admin/api/jsonrpc`
//! endpoint: the JSON-RPC 2.0 envelope codec, a token-carrying [`Session`]
//! with its cookie jar, and thin wrappers for the Session, Server,
//! ProductInfo, Dns, Dhcp, Users, Logs and IpAddressGroups API groups.
//!
//! Calls are never retried and expired tokens are never refreshed
//! implicitly; callers decide when to log in again.

mod auth;
pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod tracing;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::AuthState;
pub use client::Session;
pub use client::builder::{SessionBuilder, endpoint_url};
pub use error::{ClientError, Result, RpcError, RpcErrorData};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{ApiApplication, BulkResult, CreateResults, ListPage, SearchQuery};
pub use tracing::{TracingConfig, TracingError, TracingGuard};
