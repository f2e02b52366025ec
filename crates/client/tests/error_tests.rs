//! Error classification tests for the call path.
//!
//! This module tests:
//! - Non-2xx statuses becoming `HttpStatus` with a truncated body
//! - JSON-RPC errors carried in 200 responses
//! - Malformed envelopes and type mismatches in `result`
//! - Transport failures
//!
//! # What this does NOT handle
//! - Envelope decoding at the byte level (unit-tested in `envelope.rs`)

mod common;

use common::*;

#[tokio::test]
async fn test_non_success_status_truncates_body() {
    let server = MockServer::start().await;
    let long_body = "x".repeat(4096);
    Mock::given(wiremock::matchers::method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string(long_body))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let err = session.get_product_info().await.unwrap_err();

    assert!(err.is_transport_error());
    let ClientError::HttpStatus { status, url, body } = err else {
        panic!("expected HttpStatus, got {err:?}");
    };
    assert_eq!(status, 502);
    assert!(url.ends_with(API_PATH));
    assert_eq!(body.len(), 1024 + 3);
    assert!(body.ends_with("..."));
}

#[tokio::test]
async fn test_status_checked_before_envelope() {
    let server = MockServer::start().await;
    mount_rpc_status(
        &server,
        "ProductInfo.get",
        401,
        load_fixture("product_info/get.json"),
    )
    .await;

    let mut session = session_for(&server);
    let err = session.get_product_info().await.unwrap_err();
    assert!(matches!(err, ClientError::HttpStatus { status: 401, .. }));
    assert!(err.is_auth_error());
    assert_eq!(err.rpc_code(), None);
}

#[tokio::test]
async fn test_rpc_error_with_data() {
    let server = MockServer::start().await;
    mount_rpc(
        &server,
        "Users.get",
        load_fixture("session/access_denied.json"),
    )
    .await;

    let mut session = session_for(&server);
    let err = session
        .get_users(&control_client::SearchQuery::all(), "local")
        .await
        .unwrap_err();

    let ClientError::Rpc(rpc) = &err else {
        panic!("expected Rpc, got {err:?}");
    };
    assert_eq!(rpc.code, 1004);
    assert_eq!(rpc.message, "Access denied.");
    assert!(rpc.data.is_some());
    assert!(err.is_access_denied());
    assert_eq!(err.to_string(), "RPC error [1004] Access denied.");
}

#[tokio::test]
async fn test_method_not_found() {
    let server = MockServer::start().await;
    mount_rpc(&server, "Nope.nothing", rpc_error(-32601, "Method not found")).await;

    let mut session = session_for(&server);
    let err = session
        .call_void_no_params("Nope.nothing")
        .await
        .unwrap_err();
    assert_eq!(err.rpc_code(), Some(-32601));
    assert!(!err.is_transport_error());
}

#[tokio::test]
async fn test_both_result_and_error_is_protocol_error() {
    let server = MockServer::start().await;
    mount_rpc(
        &server,
        "Dhcp.getMode",
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"mode": {"type": "DhcpManual"}},
            "error": {"code": 1, "message": "confused"}
        }),
    )
    .await;

    let mut session = session_for(&server);
    let err = session.get_dhcp_mode().await.unwrap_err();
    assert!(matches!(err, ClientError::Protocol(_)));
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_neither_result_nor_error_is_protocol_error() {
    let server = MockServer::start().await;
    mount_rpc(
        &server,
        "Dhcp.getMode",
        json!({"jsonrpc": "2.0", "id": 1, "result": null}),
    )
    .await;

    let mut session = session_for(&server);
    let err = session.get_dhcp_mode().await.unwrap_err();
    assert!(matches!(err, ClientError::Protocol(_)));
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let err = session.get_uptime().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_result_shape_mismatch_names_method() {
    let server = MockServer::start().await;
    mount_rpc(
        &server,
        "ProductInfo.getUptime",
        rpc_result(json!({"uptime": "a while"})),
    )
    .await;

    let mut session = session_for(&server);
    let err = session.get_uptime().await.unwrap_err();
    let ClientError::InvalidResponse(msg) = err else {
        panic!("expected InvalidResponse");
    };
    assert!(msg.contains("ProductInfo.getUptime"));
}

#[tokio::test]
async fn test_unknown_enum_value_is_invalid_response() {
    let server = MockServer::start().await;
    mount_rpc(
        &server,
        "Dhcp.getMode",
        rpc_result(json!({"mode": {"type": "DhcpRelay"}})),
    )
    .await;

    let mut session = session_for(&server);
    let err = session.get_dhcp_mode().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let mut session = Session::builder()
        .base_url("http://127.0.0.1:1/admin/api/jsonrpc")
        .build()
        .unwrap();

    let err = session.get_uptime().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(err.is_transport_error());
    assert_eq!(session.last_id(), 1);
}
