//! Prometheus exposition of the RPC call metrics.
//!
//! Installs `metrics-exporter-prometheus` as the global recorder and serves
//! the metrics recorded by [`crate::metrics::MetricsCollector`] in
//! Prometheus text format at `/metrics`.
//!
//! # Example
//!
//! ```rust,ignore
//! use control_client::metrics_exporter::MetricsExporter;
//!
//! let exporter = MetricsExporter::install("127.0.0.1:9464")?;
//! ```

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder};
use tracing::info;

use crate::metrics::METRIC_REQUEST_DURATION;

/// Latency buckets in seconds. Appliance calls such as `Logs.get` on large
/// logs or `Dhcp.apply` can take several seconds.
const RPC_DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
];

/// Handle to the installed Prometheus exporter.
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the Prometheus recorder globally and serve it on `bind_addr`
    /// (e.g. `127.0.0.1:9464`).
    ///
    /// The listener is spawned onto the current tokio runtime, so this must
    /// be called from within one.
    ///
    /// # Errors
    /// Fails when the address does not parse, a recorder is already
    /// installed or the listener cannot be started.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| MetricsExporterError::InvalidBindAddress(bind_addr.to_string(), e))?;

        PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_REQUEST_DURATION.to_string()),
                RPC_DURATION_BUCKETS,
            )?
            .with_http_listener(addr)
            .install()?;

        info!(%addr, "serving RPC metrics on /metrics");
        Ok(Self { bind_addr: addr })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("metrics bind address '{0}' is not a socket address: {1}")]
    InvalidBindAddress(String, std::net::AddrParseError),

    #[error("another metrics recorder is already installed")]
    RecorderAlreadyInstalled,

    #[error("cannot start Prometheus exporter: {0}")]
    Build(String),
}

impl From<BuildError> for MetricsExporterError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::FailedToSetGlobalRecorder(_) => Self::RecorderAlreadyInstalled,
            other => Self::Build(other.to_string()),
        }
    }
}
