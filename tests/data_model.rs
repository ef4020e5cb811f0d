// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! End-to-end coverage of `spec.md` §8 properties 2, 3, 8 and scenarios S2-S4.

use unrealircd_rpc::connection::Connection;
use unrealircd_rpc::request::RpcRequest;
use unrealircd_rpc::transport::mock::MockTransport;

#[test]
fn request_envelopes_carry_a_positive_id_and_jsonrpc_2_0() {
    let request = RpcRequest::new("user.list", None, None);
    assert_eq!(request.jsonrpc, "2.0");
    assert!(request.id > 0);
    assert!(request.params.is_object());
}

#[tokio::test]
async fn security_groups_key_is_remapped_on_decode() {
    let transport = MockTransport::always_reply(serde_json::json!({
        "result": { "client": {
            "name": "adator",
            "user": { "security-groups": ["a", "b"] }
        } }
    }));
    let conn = Connection::new(Box::new(transport));
    let client = conn.user.get("adator", None).await;
    let user = client.user.as_ref().expect("user sub-record present");
    let mut groups: Vec<&str> = user.security_groups.iter().map(String::as_str).collect();
    groups.sort();
    assert_eq!(groups, vec!["a", "b"]);
}

#[tokio::test]
async fn a_decoded_client_matches_the_server_payload() {
    let transport = MockTransport::always_reply(serde_json::json!({
        "result": { "client": { "name": "adator", "hostname": "h", "id": "001AAA" } }
    }));
    let conn = Connection::new(Box::new(transport));
    let client = conn.user.get("adator", None).await;
    assert_eq!(client.name, "adator");
    assert_eq!(client.hostname, "h");
    assert_eq!(client.id, "001AAA");
    assert_eq!(client.geoip.country_code, "");
    assert_eq!(client.tls.cipher, "");
    assert!(client.error.is_ok());
}

#[tokio::test]
async fn channel_list_members_and_bans_are_empty_not_null() {
    let transport = MockTransport::always_reply(serde_json::json!({
        "result": { "list": [
            { "name": "#a", "num_users": 0 },
            { "name": "#b", "num_users": 0 },
        ] }
    }));
    let conn = Connection::new(Box::new(transport));
    let channels = conn.channel.list(Some(1)).await;
    assert_eq!(channels.len(), 2);
    for channel in &channels {
        assert!(channel.members.is_empty());
        assert!(channel.bans.is_empty());
    }
}

#[tokio::test]
async fn server_ban_add_surfaces_the_servers_error_verbatim() {
    let transport = MockTransport::always_reply(serde_json::json!({
        "error": { "code": -1000, "message": "already exists" }
    }));
    let conn = Connection::new(Box::new(transport));
    let result = conn
        .server_ban
        .add("gline", "*@1.2.3.4", "x", None, Some("1h"))
        .await;
    assert_eq!(result.error.code, -1000);
    assert_eq!(result.error.message, "already exists");
    assert!(!result.value);
}
