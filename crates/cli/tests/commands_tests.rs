//! End-to-end command tests against a mock appliance.

mod common;

use common::{control_cmd_for, mount_login, mount_rpc, rpc_result, sent_methods};
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::MockServer;

async fn mount_info(server: &MockServer) {
    mount_login(server).await;
    mount_rpc(
        server,
        "ProductInfo.get",
        rpc_result(json!({"productInfo": {
            "versionString": "9.4.5 build 8573",
            "boxEdition": "NG300",
            "boxName": "fw-branch-01",
            "licenseSet": true
        }})),
    )
    .await;
    mount_rpc(
        server,
        "ProductInfo.getSystemHostname",
        rpc_result(json!({"hostname": "fw01.example.com"})),
    )
    .await;
    mount_rpc(server, "ProductInfo.getUptime", rpc_result(json!({"uptime": 90061}))).await;
}

#[tokio::test]
async fn test_info_table_output() {
    let server = MockServer::start().await;
    mount_info(&server).await;

    control_cmd_for(&server)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("fw01.example.com"))
        .stdout(predicate::str::contains("9.4.5 build 8573"))
        .stdout(predicate::str::contains("1d 1h 1m"));
}

#[tokio::test]
async fn test_info_json_output() {
    let server = MockServer::start().await;
    mount_info(&server).await;

    let output = control_cmd_for(&server)
        .args(["-o", "json", "info"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["hostname"], "fw01.example.com");
    assert_eq!(value["uptimeSeconds"], 90061);
    assert_eq!(value["product"]["boxEdition"], "NG300");
}

#[tokio::test]
async fn test_session_is_logged_out_after_command() {
    let server = MockServer::start().await;
    mount_info(&server).await;

    control_cmd_for(&server).arg("info").assert().success();

    let methods = sent_methods(&server).await;
    assert_eq!(methods.first().map(String::as_str), Some("Session.login"));
    assert_eq!(methods.last().map(String::as_str), Some("Session.logout"));
}

#[tokio::test]
async fn test_call_prints_raw_result() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_rpc(
        &server,
        "Dhcp.getMode",
        rpc_result(json!({"mode": "DhcpManual"})),
    )
    .await;

    let output = control_cmd_for(&server)
        .args(["-o", "json", "call", "Dhcp.getMode"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, json!({"mode": "DhcpManual"}));
}

#[tokio::test]
async fn test_call_forwards_params() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_rpc(&server, "Session.getSessionVariable", rpc_result(json!({"value": "1"}))).await;

    control_cmd_for(&server)
        .args(["call", "Session.getSessionVariable", "--params", r#"{"name":"x"}"#])
        .assert()
        .success();

    let requests = server.received_requests().await.unwrap();
    let sent: Value = requests
        .iter()
        .filter_map(|r| serde_json::from_slice::<Value>(&r.body).ok())
        .find(|v| v["method"] == "Session.getSessionVariable")
        .unwrap();
    assert_eq!(sent["params"], json!({"name": "x"}));
    assert_eq!(sent["token"], "cli-token");
}
