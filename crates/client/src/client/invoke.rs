//! Generic call path shared by every API method.

use std::time::Instant;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use tracing::{Instrument, debug};

use crate::client::Session;
use crate::endpoints;
use crate::envelope;
use crate::error::Result;

impl Session {
    /// Send `method` with optional `params` and return the raw `result`.
    ///
    /// The request id is allocated before anything else, so it advances even
    /// when encoding or the exchange fails. The token, when held, is sent both
    /// in the envelope and in the `X-Token` header.
    pub async fn invoke<P: Serialize + ?Sized>(
        &mut self,
        method: &str,
        params: Option<&P>,
    ) -> Result<Box<RawValue>> {
        self.next_id += 1;
        let id = self.next_id;

        let span = tracing::debug_span!("rpc", rpc.method = %method, rpc.id = id);
        let started = Instant::now();
        let result = self.exchange(id, method, params).instrument(span).await;

        if let Some(metrics) = &self.metrics {
            metrics.record_call(method, started.elapsed(), result.as_ref().err());
        }
        if let Err(e) = &result {
            debug!(rpc.method = %method, rpc.id = id, error = %e, "call failed");
        }
        result
    }

    async fn exchange<P: Serialize + ?Sized>(
        &self,
        id: u64,
        method: &str,
        params: Option<&P>,
    ) -> Result<Box<RawValue>> {
        let token = self.auth.token();
        let body = envelope::encode(id, method, token, params)?;
        debug!(bytes = body.len(), "sending request");
        let response = endpoints::send_envelope(&self.http, &self.base_url, token, body).await?;
        envelope::decode(&response)
    }

    /// Call `method` with `params` and decode the result into `R`.
    pub async fn call<P, R>(&mut self, method: &str, params: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let raw = self.invoke(method, Some(params)).await?;
        envelope::decode_result(method, &raw)
    }

    /// Call `method` without a `params` member and decode the result into `R`.
    pub async fn call_no_params<R: DeserializeOwned>(&mut self, method: &str) -> Result<R> {
        let raw = self.invoke::<()>(method, None).await?;
        envelope::decode_result(method, &raw)
    }

    /// Call `method` with `params`, discarding the result.
    pub async fn call_void<P: Serialize + ?Sized>(&mut self, method: &str, params: &P) -> Result<()> {
        self.invoke(method, Some(params)).await.map(drop)
    }

    /// Call `method` without a `params` member, discarding the result.
    pub async fn call_void_no_params(&mut self, method: &str) -> Result<()> {
        self.invoke::<()>(method, None).await.map(drop)
    }
}
