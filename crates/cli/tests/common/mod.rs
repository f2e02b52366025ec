//! Shared test utilities for control-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount JSON-RPC responses on a mock appliance keyed by method name.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - The mock server speaks plain http, so commands carry `--base-url`.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_PATH: &str = "/admin/api/jsonrpc";

/// Returns a hermetic `control-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `CONTROL_*` variables from the host are cleared.
pub fn control_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("control-cli");

    cmd.env("DOTENV_DISABLED", "1");

    for var in [
        "CONTROL_SERVER",
        "CONTROL_BASE_URL",
        "CONTROL_USERNAME",
        "CONTROL_PASSWORD",
        "CONTROL_PROFILE",
        "CONTROL_CONFIG_PATH",
        "CONTROL_SKIP_VERIFY",
        "CONTROL_TIMEOUT",
        "CONTROL_OUTPUT",
        "CONTROL_OTLP_ENDPOINT",
        "CONTROL_METRICS_BIND",
        "CONTROL_APP_NAME",
        "CONTROL_APP_VENDOR",
        "CONTROL_APP_VERSION",
    ] {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a command pointed at the mock appliance with credentials set.
pub fn control_cmd_for(server: &MockServer) -> Command {
    let mut cmd = control_cmd();
    cmd.args(["-s", "localhost", "-u", "admin", "-p", "secret", "--base-url"])
        .arg(format!("{}{}", server.uri(), API_PATH));
    cmd
}

pub fn rpc_result(result: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": 1, "result": result})
}

pub fn rpc_error(code: i64, message: &str) -> Value {
    json!({"jsonrpc": "2.0", "id": 1, "error": {"code": code, "message": message}})
}

/// Answer `rpc_method` with `body`.
pub async fn mount_rpc(server: &MockServer, rpc_method: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .and(body_partial_json(json!({"method": rpc_method})))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a successful login and logout.
pub async fn mount_login(server: &MockServer) {
    mount_rpc(server, "Session.login", rpc_result(json!({"token": "cli-token"}))).await;
    mount_rpc(server, "Session.logout", rpc_result(json!({}))).await;
}

/// Method names of every request the mock received, in order.
pub async fn sent_methods(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|r| serde_json::from_slice::<Value>(&r.body).ok())
        .filter_map(|v| v["method"].as_str().map(str::to_string))
        .collect()
}
