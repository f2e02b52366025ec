//! Authenticated JSON-RPC session with the appliance and its API methods.
//!
//! This module provides [`Session`], which owns the HTTP client (with its
//! cookie jar), the endpoint URL, the request id counter and the token
//! issued at login.
//!
//! # Submodules
//! - [`builder`]: Session construction and configuration
//! - `invoke`: Generic call path shared by every API method
//! - `session`: Login, logout and `Session.*` methods
//! - `server`, `product_info`, `dns`, `dhcp`, `users`, `logs`,
//!   `ip_address_groups`: methods of the matching API groups
//!
//! # What this module does NOT handle:
//! - Envelope encoding and decoding (delegated to [`crate::envelope`])
//! - The HTTP exchange itself (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - Request ids start at 1 and increase by one per call, failed calls included
//! - Every method takes `&mut self`, so a session serves one call at a time
//! - No call is ever retried, and an expired token is never refreshed implicitly

pub mod builder;
mod invoke;
mod session;

mod dhcp;
mod dns;
mod ip_address_groups;
mod logs;
mod product_info;
mod server;
mod users;

use crate::auth::AuthState;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::ApiApplication;

/// Session with one appliance.
///
/// # Creating a Session
///
/// ```rust,ignore
/// use control_client::Session;
///
/// let mut session = Session::connect("fw.example.com")?;
/// session.login("admin", "secret", None).await?;
/// let hostname = session.product_info_get_system_hostname().await?;
/// session.logout().await?;
/// ```
#[derive(Debug)]
pub struct Session {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthState,
    pub(crate) next_id: u64,
    pub(crate) application: ApiApplication,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl Session {
    /// Create a new session builder.
    pub fn builder() -> builder::SessionBuilder {
        builder::SessionBuilder::new()
    }

    /// Session for `address` with default settings. Performs no network I/O.
    pub fn connect(address: &str) -> Result<Self> {
        Self::builder().server(address).build()
    }

    /// The JSON-RPC endpoint URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// The token issued at login, if any.
    pub fn token(&self) -> Option<&str> {
        self.auth.token()
    }

    /// Id of the most recent request, 0 before the first call.
    pub fn last_id(&self) -> u64 {
        self.next_id
    }

    /// Client identity sent at login by default.
    pub fn application(&self) -> &ApiApplication {
        &self.application
    }
}
