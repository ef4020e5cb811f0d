// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! End-to-end coverage of `spec.md` §8 property 5 and scenario S5: after
//! `unsubscribe()` races with an active subscribe loop, the loop terminates and
//! delivers exactly one final normal-closure `LiveRpcResult`.

use std::sync::{Arc, Mutex};
use unrealircd_rpc::connection::LiveConnection;
use unrealircd_rpc::transport::mock::MockLiveTransport;
use unrealircd_rpc::{sync_callback, LiveRpcResult};

#[tokio::test]
async fn unsubscribe_from_a_second_actor_stops_the_loop_cleanly() {
    let frames: Vec<Vec<u8>> = (0..10)
        .map(|i| serde_json::to_vec(&serde_json::json!({ "id": i, "result": true })).unwrap())
        .collect();
    let transport = MockLiveTransport::new(frames);
    let live = LiveConnection::new(transport);

    let events: Arc<Mutex<Vec<LiveRpcResult>>> = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    let callback = sync_callback(move |event: LiveRpcResult| {
        events_clone.lock().unwrap().push(event);
    });

    let subscription = live.subscribe(None, callback);

    // Let the loop drain the 10 queued frames before the second actor cancels.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    subscription.unsubscribe().await;
    subscription.join().await;

    let collected = events.lock().unwrap();
    assert_eq!(collected.len(), 11); // 10 frames + the closure event
    let last = collected.last().unwrap();
    assert_eq!(last.error.code, 0);
    assert_eq!(last.error.message, "WebSocket/UnixSocket normal closure");
}

#[tokio::test]
async fn the_default_source_filter_excludes_debug() {
    let transport = Arc::new(MockLiveTransport::new(Vec::new()));
    let callback = sync_callback(|_event: LiveRpcResult| {});
    let subscription = unrealircd_rpc::live::subscribe(transport.clone(), None, callback);

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    subscription.unsubscribe().await;
    subscription.join().await;

    let sent = transport.sent();
    let subscribe_payload = sent.iter().find(|p| String::from_utf8_lossy(p).contains("log.subscribe")).unwrap();
    let text = String::from_utf8_lossy(subscribe_payload);
    assert!(text.contains("!debug"));
    assert!(text.contains("all"));
}
