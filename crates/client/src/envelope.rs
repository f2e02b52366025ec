//! JSON-RPC 2.0 envelope codec.
//!
//! This module is responsible for:
//! - Encoding request envelopes (`jsonrpc`, `method`, `id`, optional `token` and `params`)
//! - Decoding response envelopes and enforcing result/error exclusivity
//! - Decoding a raw `result` member into a caller-chosen type
//!
//! # What this module does NOT handle:
//! - HTTP transport or status handling (see [`crate::endpoints`])
//! - Request id allocation or token storage (see [`crate::client::Session`])
//!
//! # Invariants
//! - An encoded request never carries a `token` or `params` key with a `null` value
//! - A decoded response yields exactly one of a raw result or an [`RpcError`]

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{ClientError, Result, RpcError, RpcErrorData};

/// Protocol version tag sent in every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Content type of request bodies.
pub const RPC_CONTENT_TYPE: &str = "application/json-rpc";

/// Accept header sent with every request.
pub const ACCEPT: &str = "application/json";

/// Header carrying the session token.
pub const TOKEN_HEADER: &str = "X-Token";

/// Outgoing JSON-RPC request.
#[derive(Debug, Serialize)]
pub struct RequestEnvelope<'a, P: Serialize + ?Sized> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<&'a P>,
}

/// Serialize a request envelope to bytes.
pub fn encode<P: Serialize + ?Sized>(
    id: u64,
    method: &str,
    token: Option<&str>,
    params: Option<&P>,
) -> Result<Vec<u8>> {
    let envelope = RequestEnvelope {
        jsonrpc: JSONRPC_VERSION,
        method,
        id,
        token,
        params,
    };
    serde_json::to_vec(&envelope).map_err(ClientError::Serialization)
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    #[allow(dead_code)]
    jsonrpc: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "raw_unless_null")]
    result: Option<Box<RawValue>>,
    #[serde(default)]
    error: Option<WireError>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireError {
    code: i64,
    message: String,
    data: Option<serde_json::Value>,
}

impl WireError {
    fn is_empty(&self) -> bool {
        self.code == 0
            && self.message.is_empty()
            && self.data.as_ref().is_none_or(|d| d.is_null())
    }
}

// A `"result": null` member counts as absent.
fn raw_unless_null<'de, D>(deserializer: D) -> std::result::Result<Option<Box<RawValue>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    Ok(if raw.get().trim() == "null" {
        None
    } else {
        Some(raw)
    })
}

/// Decode a response body into its raw `result`.
///
/// # Errors
/// - [`ClientError::InvalidResponse`] if the body is not a JSON object
/// - [`ClientError::Protocol`] if both or neither of `result` and `error` are present
/// - [`ClientError::Rpc`] if the server reported an application error
pub fn decode(body: &[u8]) -> Result<Box<RawValue>> {
    let envelope: ResponseEnvelope = serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("malformed JSON-RPC envelope: {e}")))?;

    let error = envelope.error.filter(|e| !e.is_empty());

    match (envelope.result, error) {
        (Some(result), None) => Ok(result),
        (None, Some(error)) => Err(ClientError::Rpc(RpcError {
            code: error.code,
            message: error.message,
            // Detail that does not fit the known shape is dropped rather than failing the call.
            data: error
                .data
                .and_then(|d| serde_json::from_value::<RpcErrorData>(d).ok()),
        })),
        (Some(_), Some(_)) => Err(ClientError::Protocol(
            "response carries both result and error".to_string(),
        )),
        (None, None) => Err(ClientError::Protocol(
            "response carries neither result nor error".to_string(),
        )),
    }
}

/// Decode a raw result into `R`.
pub fn decode_result<R: DeserializeOwned>(method: &str, raw: &RawValue) -> Result<R> {
    serde_json::from_str(raw.get()).map_err(|e| {
        ClientError::InvalidResponse(format!(
            "{method}: result does not match {}: {e}",
            std::any::type_name::<R>()
        ))
    })
}
