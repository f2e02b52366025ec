//! Session builder for constructing [`Session`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for session configuration
//! - Turning a server address into the JSON-RPC endpoint URL
//! - Configuring the underlying HTTP client (cookie store, timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`Session`] methods)
//! - Token storage (handled by [`AuthState`] in `auth.rs`)
//!
//! # Invariants
//! - Building a session performs no network I/O
//! - The endpoint is always `https://<host>:<port>/admin/api/jsonrpc` unless
//!   `base_url` overrides it
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use control_config::Config;
use control_config::constants::{API_PATH, DEFAULT_MAX_REDIRECTS, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};
use url::Url;

use crate::auth::AuthState;
use crate::client::Session;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::ApiApplication;

/// Builder for creating a new [`Session`].
///
/// Either `server` or `base_url` is required; everything else has a default.
///
/// # Example
///
/// ```rust,ignore
/// use control_client::Session;
///
/// let session = Session::builder()
///     .server("fw.example.com")
///     .skip_verify(true)
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct SessionBuilder {
    server: Option<String>,
    base_url: Option<String>,
    skip_verify: bool,
    timeout: Duration,
    application: ApiApplication,
    metrics: Option<MetricsCollector>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            server: None,
            base_url: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            application: ApiApplication::default(),
            metrics: None,
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the appliance address: `host`, `host:port`, an IPv6 literal, or
    /// `[v6]:port`. Port 4081 is used when none is given.
    pub fn server(mut self, address: impl Into<String>) -> Self {
        self.server = Some(address.into());
        self
    }

    /// Use a full endpoint URL instead of deriving it from `server`.
    ///
    /// Accepts `http` as well as `https`, for test servers and proxies.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Appliances usually ship a self-signed certificate, but disabling
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Client identity sent by [`Session::login`] when none is passed explicitly.
    pub fn application(mut self, application: ApiApplication) -> Self {
        self.application = application;
        self
    }

    /// Record per-call metrics with this collector.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from loaded configuration.
    ///
    /// Credentials are not copied; pass them to [`Session::login`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.server = Some(config.connection.server.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.application = ApiApplication::from(&config.application);
        self
    }

    /// Build the [`Session`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if neither `server` nor `base_url`
    /// was given, or the one given is unusable.
    /// Returns [`ClientError::Http`] if the HTTP client fails to build.
    pub fn build(self) -> Result<Session> {
        let base_url = match (self.base_url, self.server) {
            (Some(url), _) => validate_base_url(&url)?,
            (None, Some(server)) => endpoint_url(&server)?,
            (None, None) => {
                return Err(ClientError::InvalidUrl(
                    "server address is required".to_string(),
                ));
            }
        };

        let mut http_builder = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(Session {
            http,
            base_url,
            auth: AuthState::new(),
            next_id: 0,
            application: self.application,
            metrics: self.metrics,
        })
    }
}

/// Build the JSON-RPC endpoint URL for an appliance address.
///
/// # Examples
///
/// - `"fw.example.com"` -> `"https://fw.example.com:4081/admin/api/jsonrpc"`
/// - `"10.0.0.1:8443"` -> `"https://10.0.0.1:8443/admin/api/jsonrpc"`
/// - `"fe80::1"` -> `"https://[fe80::1]:4081/admin/api/jsonrpc"`
/// - `"[fe80::1]:8443"` -> `"https://[fe80::1]:8443/admin/api/jsonrpc"`
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrl`] for an empty address, an address with
/// a scheme or path, or a malformed port.
pub fn endpoint_url(address: &str) -> Result<String> {
    let address = address.trim();
    if address.is_empty() {
        return Err(ClientError::InvalidUrl("server address is empty".to_string()));
    }
    if address.contains("://") || address.contains('/') {
        return Err(ClientError::InvalidUrl(format!(
            "'{address}' must be a host or host:port, without scheme or path"
        )));
    }

    let authority = if let Some(rest) = address.strip_prefix('[') {
        let (host, after) = rest
            .split_once(']')
            .ok_or_else(|| ClientError::InvalidUrl(format!("unclosed '[' in '{address}'")))?;
        match after {
            "" => format!("[{host}]:{DEFAULT_PORT}"),
            _ => match after.strip_prefix(':') {
                Some(port) => format!("[{host}]:{}", parse_port(address, port)?),
                None => {
                    return Err(ClientError::InvalidUrl(format!(
                        "unexpected text after ']' in '{address}'"
                    )));
                }
            },
        }
    } else {
        match address.matches(':').count() {
            0 => format!("{address}:{DEFAULT_PORT}"),
            1 => {
                let (host, port) = address.split_once(':').unwrap_or((address, ""));
                if host.is_empty() {
                    return Err(ClientError::InvalidUrl(format!("missing host in '{address}'")));
                }
                format!("{host}:{}", parse_port(address, port)?)
            }
            // Bare IPv6 literal.
            _ => format!("[{address}]:{DEFAULT_PORT}"),
        }
    };

    let endpoint = format!("https://{authority}{API_PATH}");
    Url::parse(&endpoint)
        .map_err(|e| ClientError::InvalidUrl(format!("'{address}' is not a valid address: {e}")))?;
    Ok(endpoint)
}

fn parse_port(address: &str, port: &str) -> Result<u16> {
    port.parse::<u16>()
        .ok()
        .filter(|p| *p != 0)
        .ok_or_else(|| ClientError::InvalidUrl(format!("invalid port in '{address}'")))
}

fn validate_base_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::InvalidUrl(format!(
            "{url}: scheme must be http or https"
        )));
    }
    Ok(url.to_string())
}
