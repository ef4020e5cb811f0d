// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! End-to-end coverage of `spec.md` §8 property 7: with a cached server version
//! below a namespace's minimum, a gated method fails locally with no network call;
//! above the minimum, the call reaches the transport.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use unrealircd_rpc::connection::Connection;
use unrealircd_rpc::transport::mock::MockTransport;

fn server_get_reply(software: &str) -> serde_json::Value {
    serde_json::json!({
        "result": { "client": { "name": "irc.example.org", "server": { "server": {
            "features": { "software": software }
        } } } }
    })
}

#[tokio::test]
async fn old_server_blocks_gated_methods_without_a_network_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();
    let transport = MockTransport::new(move |_payload| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        Ok(serde_json::to_vec(&server_get_reply("UnrealIRCd-6.0.0")).unwrap())
    });

    let conn = Connection::new(Box::new(transport));
    conn.prime_version().await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1); // only the server.get() from prime_version

    let result = conn.message.send_privmsg("rpc", "#test", "hi").await;
    assert_eq!(result.error.code, -3);
    assert!(result.error.message.contains("message.send_privmsg"));
    assert_eq!(calls.load(Ordering::SeqCst), 1, "gated call must not reach the transport");
}

#[tokio::test]
async fn new_enough_server_lets_gated_methods_through() {
    let transport = MockTransport::new(|payload: Vec<u8>| {
        let text = String::from_utf8_lossy(&payload);
        if text.contains("server.get") {
            Ok(serde_json::to_vec(&server_get_reply("UnrealIRCd-6.2.2")).unwrap())
        } else {
            Ok(serde_json::to_vec(&serde_json::json!({ "result": true })).unwrap())
        }
    });

    let conn = Connection::new(Box::new(transport));
    conn.prime_version().await.unwrap();

    let result = conn.message.send_privmsg("rpc", "#test", "hi").await;
    assert!(result.error.is_ok());
}

#[tokio::test]
async fn ungated_methods_work_before_any_version_is_primed() {
    let transport = MockTransport::always_reply(serde_json::json!({ "result": { "list": [] } }));
    let conn = Connection::new(Box::new(transport));
    let users = conn.user.list(None).await;
    assert!(users.is_empty());
    assert_eq!(conn.last_error().code, 0);
}
