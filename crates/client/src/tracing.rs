//! Tracing subscriber setup and trace context propagation.
//!
//! Binaries built on the client install their subscriber through
//! [`TracingConfig`]: an `EnvFilter`, an optional human-readable `fmt` layer
//! on stderr and an optional OTLP span exporter. Every RPC request carries
//! the active span as a W3C `traceparent` header (see [`inject_trace_context`]).
//!
//! ```rust,ignore
//! use control_client::tracing::TracingConfig;
//!
//! let guard = TracingConfig::new()
//!     .with_otlp_endpoint("http://localhost:4317")
//!     .with_service_name("control-cli")
//!     .init()?;
//! // ...
//! guard.shutdown();
//! ```

use std::time::Duration;

use opentelemetry::propagation::{Injector, TextMapPropagator};
use opentelemetry::trace::TracerProvider;
use opentelemetry::KeyValue;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::{BatchSpanProcessor, Sampler, SdkTracerProvider};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing_opentelemetry::OpenTelemetrySpanExt;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the OTLP collector endpoint.
pub const OTLP_ENDPOINT_ENV: &str = "CONTROL_OTLP_ENDPOINT";

const TRACER_NAME: &str = "control-client";

/// Subscriber configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// gRPC endpoint of an OTLP collector; spans are only exported when set.
    pub otlp_endpoint: Option<String>,
    pub service_name: String,
    pub service_version: String,
    /// Emit formatted events on stderr.
    pub log_to_stderr: bool,
    /// Filter used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    pub export_timeout: Duration,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: control_config::env_var_or_none(OTLP_ENDPOINT_ENV),
            service_name: TRACER_NAME.to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_to_stderr: true,
            default_filter: "info".to_string(),
            export_timeout: Duration::from_secs(5),
        }
    }
}

impl TracingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn with_service_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    pub fn with_stderr(mut self, enable: bool) -> Self {
        self.log_to_stderr = enable;
        self
    }

    pub fn with_default_filter(mut self, directive: impl Into<String>) -> Self {
        self.default_filter = directive.into();
        self
    }

    /// Install the global subscriber.
    ///
    /// The returned guard owns the span exporter; call
    /// [`TracingGuard::shutdown`] before exit so buffered spans are flushed.
    ///
    /// # Errors
    /// Returns [`TracingError::Exporter`] if the OTLP exporter cannot be built.
    pub fn init(&self) -> Result<TracingGuard, TracingError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_filter));

        let provider = self
            .otlp_endpoint
            .as_deref()
            .map(|endpoint| self.tracer_provider(endpoint))
            .transpose()?;

        let otel_layer = provider
            .as_ref()
            .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(TRACER_NAME)));
        let fmt_layer = self
            .log_to_stderr
            .then(|| fmt::layer().with_writer(std::io::stderr));

        tracing_subscriber::registry()
            .with(filter)
            .with(otel_layer)
            .with(fmt_layer)
            .init();

        Ok(TracingGuard { provider })
    }

    fn tracer_provider(&self, endpoint: &str) -> Result<SdkTracerProvider, TracingError> {
        use opentelemetry_otlp::{Protocol, WithExportConfig};

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .with_protocol(Protocol::Grpc)
            .with_timeout(self.export_timeout)
            .build()
            .map_err(|e| TracingError::Exporter(e.to_string()))?;

        let resource = opentelemetry_sdk::Resource::builder()
            .with_attributes([
                KeyValue::new("service.name", self.service_name.clone()),
                KeyValue::new("service.version", self.service_version.clone()),
            ])
            .build();

        Ok(SdkTracerProvider::builder()
            .with_span_processor(BatchSpanProcessor::builder(exporter).build())
            .with_resource(resource)
            .with_sampler(Sampler::ParentBased(Box::new(Sampler::AlwaysOn)))
            .build())
    }
}

/// Owns the span exporter for the lifetime of the process.
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl TracingGuard {
    /// Flush pending spans and stop the exporter.
    pub fn shutdown(&self) {
        if let Some(provider) = &self.provider
            && let Err(e) = provider.shutdown()
        {
            eprintln!("failed to flush trace spans: {e}");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("failed to build OTLP span exporter: {0}")]
    Exporter(String),
}

/// Writes propagation fields into a reqwest header map, skipping invalid ones.
struct HeaderInjector<'a>(&'a mut HeaderMap);

impl Injector for HeaderInjector<'_> {
    fn set(&mut self, key: &str, value: String) {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            self.0.insert(name, value);
        }
    }
}

/// Attach the current span's context to an outgoing request.
///
/// Without an OpenTelemetry layer the span context is invalid and no
/// header is added.
pub fn inject_trace_context(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    let mut headers = HeaderMap::new();
    let context = ::tracing::Span::current().context();
    TraceContextPropagator::new().inject_context(&context, &mut HeaderInjector(&mut headers));

    if headers.is_empty() {
        builder
    } else {
        builder.headers(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let config = TracingConfig::new()
            .with_otlp_endpoint("http://collector:4317")
            .with_service_name("control-cli")
            .with_service_version("1.2.3")
            .with_default_filter("debug")
            .with_stderr(false);
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://collector:4317"));
        assert_eq!(config.service_name, "control-cli");
        assert_eq!(config.service_version, "1.2.3");
        assert_eq!(config.default_filter, "debug");
        assert!(!config.log_to_stderr);
    }

    #[test]
    fn test_injector_skips_invalid_header_values() {
        let mut headers = HeaderMap::new();
        let mut injector = HeaderInjector(&mut headers);
        injector.set("traceparent", "00-abc-def-01".to_string());
        injector.set("tracestate", "bad\nvalue".to_string());
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["traceparent"], "00-abc-def-01");
    }

    #[test]
    fn test_inject_without_active_span_adds_no_traceparent() {
        let client = reqwest::Client::new();
        let request = inject_trace_context(client.post("http://localhost/"))
            .build()
            .unwrap();
        assert!(request.headers().get("traceparent").is_none());
    }
}
