//! Single POST of an encoded envelope to the JSON-RPC endpoint.
//!
//! # What this module does NOT handle:
//! - Envelope encoding or decoding (see [`crate::envelope`])
//! - Retries: every envelope is sent exactly once
//!
//! # Invariants
//! - A non-2xx status is reported as [`ClientError::HttpStatus`] before the
//!   body is interpreted as an envelope, with the body truncated to
//!   [`MAX_ERROR_BODY_BYTES`]

use control_config::constants::MAX_ERROR_BODY_BYTES;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::envelope::{self, RPC_CONTENT_TYPE, TOKEN_HEADER};
use crate::error::{ClientError, Result};

/// POST `body` to `url` and return the raw response body of a 2xx answer.
///
/// The `X-Token` header is added when `token` is present. The current span's
/// trace context is propagated in W3C headers.
pub async fn send_envelope(
    client: &Client,
    url: &str,
    token: Option<&str>,
    body: Vec<u8>,
) -> Result<Vec<u8>> {
    let mut builder = client
        .post(url)
        .header(CONTENT_TYPE, RPC_CONTENT_TYPE)
        .header(ACCEPT, envelope::ACCEPT)
        .body(body);
    if let Some(token) = token {
        builder = builder.header(TOKEN_HEADER, token);
    }
    let builder = crate::tracing::inject_trace_context(builder);

    let response = builder.send().await?;
    let status = response.status();

    if !status.is_success() {
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        return Err(ClientError::HttpStatus {
            status: status.as_u16(),
            url,
            body: truncate_body(body),
        });
    }

    Ok(response.bytes().await?.to_vec())
}

fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY_BYTES {
        let mut end = MAX_ERROR_BODY_BYTES;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
        body.push_str("...");
    }
    body
}
