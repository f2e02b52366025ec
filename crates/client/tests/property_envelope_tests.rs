//! Property-based tests for the request codec, response decoding and address normalization.
//!
//! This module uses proptest to verify:
//! - Optional envelope members are present exactly when supplied
//! - Any non-empty error object decodes to an `Rpc` error with the same code
//! - Zero limits are normalized while every other limit is kept
//! - `host` and `host:port` addresses map onto the fixed endpoint path

use control_client::models::SearchQuery;
use control_client::{ClientError, endpoint_url, envelope};
use proptest::prelude::*;
use serde_json::{Value, json};

proptest! {
    #[test]
    fn prop_optional_members_present_iff_supplied(
        id in 1u64..=u64::MAX / 2,
        method in "[A-Z][a-zA-Z]{0,12}\\.[a-z][a-zA-Z]{0,12}",
        token in proptest::option::of("[0-9a-f]{32}"),
        param in proptest::option::of(any::<i64>()),
    ) {
        let params = param.map(|n| json!({"n": n}));
        let bytes = envelope::encode(id, &method, token.as_deref(), params.as_ref()).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        prop_assert_eq!(&value["jsonrpc"], "2.0");
        prop_assert_eq!(value["id"].as_u64(), Some(id));
        prop_assert_eq!(value["method"].as_str(), Some(method.as_str()));
        prop_assert_eq!(value.get("token").is_some(), token.is_some());
        prop_assert_eq!(value.get("params").is_some(), param.is_some());
        if let Some(n) = param {
            prop_assert_eq!(&value["params"]["n"], &json!(n));
        }
    }

    #[test]
    fn prop_error_code_preserved(code in any::<i64>().prop_filter("non-empty", |c| *c != 0),
                                 message in "[ -~]{0,40}") {
        let body = serde_json::to_vec(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": code, "message": message}
        }))
        .unwrap();

        match envelope::decode(&body) {
            Err(ClientError::Rpc(e)) => {
                prop_assert_eq!(e.code, code);
                prop_assert_eq!(e.message, message);
            }
            other => prop_assert!(false, "expected Rpc error, got {:?}", other),
        }
    }

    #[test]
    fn prop_limit_normalization(start in 0i64..10_000, limit in -1i64..10_000) {
        let query = SearchQuery::all().page(start, limit);
        let normalized = query.normalized();
        prop_assert_eq!(normalized.start, start);
        if limit == 0 {
            prop_assert_eq!(normalized.limit, -1);
        } else {
            prop_assert_eq!(normalized.limit, limit);
        }
    }

    #[test]
    fn prop_address_normalization(host in "[a-z][a-z0-9-]{0,20}(\\.[a-z]{2,6}){0,2}",
                                  port in proptest::option::of(1u16..=u16::MAX)) {
        let address = match port {
            Some(p) => format!("{host}:{p}"),
            None => host.clone(),
        };
        let url = endpoint_url(&address).unwrap();
        let expected_port = port.unwrap_or(4081);
        prop_assert_eq!(url, format!("https://{host}:{expected_port}/admin/api/jsonrpc"));
    }
}
