//! Error types for the appliance client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::common::{ApiError, LocalizableMessageParameters};

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Error code the appliance returns when the session lacks the rights for a method.
pub const ACCESS_DENIED: i64 = 1004;

/// Standard JSON-RPC code for an unknown method.
pub const METHOD_NOT_FOUND: i64 = -32601;

/// Standard JSON-RPC code for malformed parameters.
pub const INVALID_PARAMS: i64 = -32602;

/// Structured detail attached to an [`RpcError`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RpcErrorData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_parameters: Option<LocalizableMessageParameters>,
    /// Per-item failures when a whole batch was rejected.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
}

/// Application error carried in the `error` member of a response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RpcErrorData>,
}

impl RpcError {
    /// True when the appliance refused the call for lack of rights.
    pub fn is_access_denied(&self) -> bool {
        self.code == ACCESS_DENIED
    }

    /// Positional parameters of the localisable message, if the server sent any.
    pub fn positional_parameters(&self) -> &[String] {
        self.data
            .as_ref()
            .and_then(|d| d.message_parameters.as_ref())
            .map(|p| p.positional_parameters.as_slice())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Errors that can occur during appliance client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: connection refused, DNS, TLS, timeout.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP status {status} from {url}: {body}")]
    HttpStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// The body was not a JSON envelope, or the result did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The envelope violated the result/error exclusivity contract.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The appliance reported an application error.
    #[error("RPC error {0}")]
    Rpc(RpcError),

    /// Request parameters could not be encoded.
    #[error("Failed to encode request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The server address or endpoint URL is unusable.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// True for failures below the application layer: the network, a
    /// non-2xx status, an unparseable body or a broken envelope.
    ///
    /// `Rpc` is the only application error.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::HttpStatus { .. } | Self::InvalidResponse(_) | Self::Protocol(_)
        )
    }

    /// True when the appliance answered with error code 1004.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::Rpc(e) if e.is_access_denied())
    }

    /// Check if this error indicates an authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        self.is_access_denied() || matches!(self, Self::HttpStatus { status: 401 | 403, .. })
    }

    /// The JSON-RPC error code, if this is an application error.
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            Self::Rpc(e) => Some(e.code),
            _ => None,
        }
    }
}
