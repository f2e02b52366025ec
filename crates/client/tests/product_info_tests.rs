//! Product info and server endpoint tests.

mod common;

use common::*;
use control_client::models::{ServerOs, WarningType};

#[tokio::test]
async fn test_get_product_info() {
    let server = MockServer::start().await;
    let mut session = logged_in_session(&server).await;
    mount_rpc(&server, "ProductInfo.get", load_fixture("product_info/get.json")).await;

    let info = session.get_product_info().await.unwrap();
    assert_eq!(info.version_string, "9.4.5 build 8573");
    assert_eq!(info.box_name, "fw-branch-01");
    assert!(info.ip6_available);
    assert!(!info.wifi_available);
}

#[tokio::test]
async fn test_get_warnings_and_disable() {
    let server = MockServer::start().await;
    let mut session = logged_in_session(&server).await;
    mount_rpc(
        &server,
        "ProductInfo.getWarnings",
        load_fixture("product_info/get_warnings.json"),
    )
    .await;
    mount_rpc(&server, "ProductInfo.disableWarning", rpc_result(json!({}))).await;

    let warnings = session.get_warnings().await.unwrap();
    assert_eq!(warnings.len(), 2);
    let suppressable: Vec<_> = warnings.iter().filter(|w| w.suppressable).collect();
    assert_eq!(suppressable.len(), 1);
    assert_eq!(suppressable[0].warning_type, WarningType::WarnUpdateFailed);
    assert_eq!(suppressable[0].property, "9.4.6");

    session
        .disable_warning(suppressable[0].warning_type)
        .await
        .unwrap();
    let envelope = last_envelope_for(&server, "ProductInfo.disableWarning").await;
    assert_eq!(envelope["params"], json!({"warningType": "WarnUpdateFailed"}));
}

#[tokio::test]
async fn test_device_counts_and_support_info() {
    let server = MockServer::start().await;
    let mut session = logged_in_session(&server).await;
    mount_rpc(
        &server,
        "ProductInfo.getUsedDevicesCount",
        rpc_result(json!({"devices": 42, "accounts": 17})),
    )
    .await;
    mount_rpc(
        &server,
        "ProductInfo.getSupportInfo",
        rpc_result(json!({
            "fileDownload": {"url": "/download/support.zip", "name": "support.zip", "length": 2048}
        })),
    )
    .await;

    let counts = session.get_used_devices_count().await.unwrap();
    assert_eq!((counts.devices, counts.accounts), (42, 17));

    let download = session.get_support_info().await.unwrap();
    assert_eq!(download.name, "support.zip");
    assert_eq!(download.length, 2048);
}

#[tokio::test]
async fn test_server_os_and_restrictions() {
    let server = MockServer::start().await;
    let mut session = logged_in_session(&server).await;
    mount_rpc(&server, "Server.getOs", rpc_result(json!({"os": "Linux"}))).await;
    mount_rpc(
        &server,
        "Server.getRestrictionList",
        rpc_result(json!({
            "restrictions": [{
                "entityName": "User",
                "tuples": [{"name": "userName", "kind": "ByteLength", "values": ["127"]}]
            }]
        })),
    )
    .await;

    assert_eq!(session.get_server_os().await.unwrap(), ServerOs::Linux);
    let restrictions = session.get_restriction_list().await.unwrap();
    assert_eq!(restrictions[0].entity_name, "User");
    assert_eq!(restrictions[0].tuples[0].values, vec!["127"]);
}
