//! Common test utilities for integration tests.
//!
//! Shared helpers for pointing a [`Session`] at a wiremock server and for
//! inspecting the envelopes it sent.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every mock answers on the real endpoint path, `/admin/api/jsonrpc`
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

#[allow(unused_imports)]
pub use control_client::testing::{load_fixture, rpc_error, rpc_result};
#[allow(unused_imports)]
pub use control_client::{ClientError, Session};
#[allow(unused_imports)]
pub use serde_json::{Value, json};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use wiremock::matchers::{body_partial_json, method, path};

pub const API_PATH: &str = "/admin/api/jsonrpc";

/// Token returned by the `session/login.json` fixture.
#[allow(dead_code)]
pub const FIXTURE_TOKEN: &str = "d2c9a7e1f4b84a6e9c3b5d0f7a1e2c4b";

/// Session whose endpoint is the mock server.
pub fn session_for(server: &MockServer) -> Session {
    Session::builder()
        .base_url(format!("{}{}", server.uri(), API_PATH))
        .build()
        .expect("session should build against mock server")
}

/// Answer every call of `rpc_method` with `body` and status 200.
#[allow(dead_code)]
pub async fn mount_rpc(server: &MockServer, rpc_method: &str, body: Value) {
    mount_rpc_status(server, rpc_method, 200, body).await;
}

/// Answer every call of `rpc_method` with `body` and the given status.
#[allow(dead_code)]
pub async fn mount_rpc_status(server: &MockServer, rpc_method: &str, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .and(body_partial_json(json!({"method": rpc_method})))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Session that has logged in against the `session/login.json` fixture.
#[allow(dead_code)]
pub async fn logged_in_session(server: &MockServer) -> Session {
    mount_rpc(server, "Session.login", load_fixture("session/login.json")).await;
    let mut session = session_for(server);
    session
        .login("admin", "secret", None)
        .await
        .expect("login should succeed");
    session
}

/// Bodies of all requests received so far, in arrival order.
#[allow(dead_code)]
pub async fn sent_envelopes(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .map(|r| serde_json::from_slice(&r.body).expect("request body is JSON"))
        .collect()
}

/// The last envelope sent for `rpc_method`.
#[allow(dead_code)]
pub async fn last_envelope_for(server: &MockServer, rpc_method: &str) -> Value {
    sent_envelopes(server)
        .await
        .into_iter()
        .rev()
        .find(|e| e["method"] == rpc_method)
        .unwrap_or_else(|| panic!("no request for {rpc_method}"))
}
