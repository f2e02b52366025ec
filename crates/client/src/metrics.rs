//! Metrics collection for JSON-RPC call performance.
//!
//! This module records, per RPC method:
//! - Call latency histograms labelled with the outcome
//! - Call counters
//! - Error counters by category
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (see [`crate::metrics_exporter`])
//! - Persistent storage of metrics
//!
//! # Invariants
//! - All metrics use consistent label names: `rpc_method`, `outcome`, `error_category`
//! - Metric recording is infallible and never affects the call result
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for call duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "control_rpc_request_duration_seconds";

/// Metric name for total call counter.
pub const METRIC_REQUESTS_TOTAL: &str = "control_rpc_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "control_rpc_errors_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection refused, DNS, TLS and similar failures
    Transport,
    /// Request timeout
    Timeout,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Application error reported in the envelope
    Rpc,
    /// Malformed body or envelope contract violation
    Protocol,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Rpc => "rpc",
            ErrorCategory::Protocol => "protocol",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Http(e) if e.is_timeout() => ErrorCategory::Timeout,
            ClientError::Http(e) if e.is_connect() || e.is_request() => ErrorCategory::Transport,
            ClientError::HttpStatus { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::Rpc(_) => ErrorCategory::Rpc,
            ClientError::InvalidResponse(_) | ClientError::Protocol(_) => ErrorCategory::Protocol,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for appliance RPC calls.
///
/// Thin wrapper around the `metrics` crate macros with consistent labels.
///
/// # Example
///
/// ```rust,ignore
/// use control_client::{MetricsCollector, Session};
///
/// let session = Session::builder()
///     .server("fw.example.com")
///     .metrics(MetricsCollector::new())
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record one finished call: counter, latency and, on failure, the error category.
    pub fn record_call(&self, rpc_method: &str, duration: Duration, error: Option<&ClientError>) {
        if !self.enabled {
            return;
        }

        let outcome = if error.is_some() { "error" } else { "success" };

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "rpc_method" => rpc_method.to_string(),
        )
        .increment(1);

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "rpc_method" => rpc_method.to_string(),
            "outcome" => outcome,
        )
        .record(duration.as_secs_f64());

        if let Some(error) = error {
            self.record_error(rpc_method, ErrorCategory::from(error));
        }
    }

    /// Record an error.
    pub fn record_error(&self, rpc_method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "rpc_method" => rpc_method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }
}
