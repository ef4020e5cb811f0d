// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! The live subscription state machine with its cooperative cancellation protocol
//! (`spec.md` §4.4, §5).
//!
//! States: `Idle` -> (subscribe) -> `Streaming` -> (unsubscribe) -> `Idle`. Exactly
//! one task owns the transport and drives `Streaming`; [`Subscription::unsubscribe`]
//! may be called from a different task (`spec.md` §5 "exactly one other actor may
//! concurrently submit an unsubscribe"). That task is the only writer to the
//! transport, so the question `spec.md`'s Open Questions leaves unresolved — which
//! socket an unsubscribe travels over for UNIX live streams — resolves itself here:
//! `unsubscribe()` never touches the socket directly, it only signals the owning
//! task over an in-process channel, which then performs the write. See DESIGN.md.

use crate::model::{LiveRpcResult, RpcError};
use crate::request::RpcRequest;
use crate::transport::LiveTransport;
use futures::future::BoxFuture;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The default source filter: everything except the (very chatty) debug source.
pub fn default_sources() -> Vec<String> {
    vec!["!debug".to_string(), "all".to_string()]
}

/// Anything that can be called with one [`LiveRpcResult`] per frame. If the callback
/// returns a future-like value, the loop awaits it before fetching the next frame
/// (`spec.md` §4.4, §9 "Optional callbacks"); [`sync_callback`] and [`async_callback`]
/// are the two ways to build one, matching `subxt_rpcs`'s mock transport choosing
/// between a synchronous and an async handler (`client/mock_rpc_client.rs`).
pub trait LiveCallback: Send + Sync {
    fn call(&self, event: LiveRpcResult) -> BoxFuture<'static, ()>;
}

struct SyncCallback<F>(F);

impl<F> LiveCallback for SyncCallback<F>
where
    F: Fn(LiveRpcResult) + Send + Sync + 'static,
{
    fn call(&self, event: LiveRpcResult) -> BoxFuture<'static, ()> {
        (self.0)(event);
        Box::pin(async {})
    }
}

struct AsyncCallback<F>(F);

impl<F, Fut> LiveCallback for AsyncCallback<F>
where
    F: Fn(LiveRpcResult) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    fn call(&self, event: LiveRpcResult) -> BoxFuture<'static, ()> {
        Box::pin((self.0)(event))
    }
}

/// Wraps a plain synchronous function as a [`LiveCallback`].
pub fn sync_callback<F>(f: F) -> Arc<dyn LiveCallback>
where
    F: Fn(LiveRpcResult) + Send + Sync + 'static,
{
    Arc::new(SyncCallback(f))
}

/// Wraps an async function (one returning a `Future`) as a [`LiveCallback`].
pub fn async_callback<F, Fut>(f: F) -> Arc<dyn LiveCallback>
where
    F: Fn(LiveRpcResult) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    Arc::new(AsyncCallback(f))
}

/// A handle to a running subscription loop.
pub struct Subscription {
    cancel: Arc<AtomicBool>,
    unsubscribe_tx: tokio::sync::mpsc::Sender<()>,
    join: tokio::task::JoinHandle<()>,
}

impl Subscription {
    /// Requests cancellation. Per `spec.md` §4.4: sends `log.unsubscribe`, then a
    /// synthetic local `log.send` audit event, flips the continue-flag, and delivers
    /// one final normal-closure [`LiveRpcResult`] to the callback. Because the loop
    /// may be blocked in `recv`, the actual exit can be delayed until the next frame
    /// arrives or the cancellation channel wakes it, whichever is first.
    pub async fn unsubscribe(&self) {
        self.cancel.store(true, Ordering::SeqCst);
        let _ = self.unsubscribe_tx.send(()).await;
    }

    /// Waits for the subscription loop to finish (normally only useful after
    /// calling [`Subscription::unsubscribe`]).
    pub async fn join(self) {
        let _ = self.join.await;
    }
}

/// Enters `Streaming`: sends `log.subscribe` once, then drives the read loop until
/// cancellation or the transport closes.
pub fn subscribe<T: LiveTransport + 'static>(
    transport: Arc<T>,
    sources: Option<Vec<String>>,
    callback: Arc<dyn LiveCallback>,
) -> Subscription {
    let cancel = Arc::new(AtomicBool::new(false));
    let (tx, rx) = tokio::sync::mpsc::channel::<()>(1);

    let task_cancel = cancel.clone();
    let join = tokio::spawn(run_loop(transport, sources.unwrap_or_else(default_sources), callback, task_cancel, rx));

    Subscription { cancel, unsubscribe_tx: tx, join }
}

async fn run_loop<T: LiveTransport>(
    transport: Arc<T>,
    sources: Vec<String>,
    callback: Arc<dyn LiveCallback>,
    cancel: Arc<AtomicBool>,
    mut unsubscribe_rx: tokio::sync::mpsc::Receiver<()>,
) {
    let subscribe_request =
        RpcRequest::new("log.subscribe", Some(serde_json::json!({ "sources": sources })), None);
    let Ok(bytes) = subscribe_request.to_bytes() else {
        tracing::error!(target: "unrealircd_rpc", "failed to serialize log.subscribe request");
        return;
    };
    if let Err(message) = transport.send(bytes).await {
        tracing::error!(target: "unrealircd_rpc", %message, "failed to send log.subscribe");
        return;
    }

    loop {
        if cancel.load(Ordering::SeqCst) {
            break;
        }

        tokio::select! {
            biased;
            _ = unsubscribe_rx.recv() => break,
            frame = transport.recv() => {
                match frame {
                    None => break,
                    Some(Err(message)) => {
                        tracing::error!(target: "unrealircd_rpc", %message, "live transport error");
                        callback.call(error_event(message)).await;
                    }
                    Some(Ok(raw)) => {
                        let event = match serde_json::from_slice::<LiveRpcResult>(&raw) {
                            Ok(event) => event,
                            Err(e) => {
                                tracing::error!(target: "unrealircd_rpc", error = %e, "failed to decode live frame");
                                error_event(format!("cannot decode frame: {e}"))
                            }
                        };
                        callback.call(event).await;
                    }
                }
            }
        }
    }

    // Teardown sequence, run regardless of whether the loop exited because of an
    // explicit unsubscribe or because the server closed the stream first.
    let unsubscribe_request = RpcRequest::new("log.unsubscribe", None, None);
    if let Ok(bytes) = unsubscribe_request.to_bytes() {
        let _ = transport.send(bytes).await;
    }
    let audit_event = RpcRequest::new(
        "log.send",
        Some(serde_json::json!({ "msg": "REMOTE_CLIENT_DISCONNECT" })),
        None,
    );
    if let Ok(bytes) = audit_event.to_bytes() {
        let _ = transport.send(bytes).await;
    }
    cancel.store(true, Ordering::SeqCst);

    let closure_event = LiveRpcResult {
        jsonrpc: "2.0".to_string(),
        method: Some("log.unsubscribe".to_string()),
        id: 0,
        error: RpcError { code: 0, message: "WebSocket/UnixSocket normal closure".to_string() },
        result: serde_json::Value::Bool(true),
    };
    callback.call(closure_event).await;
}

fn error_event(message: String) -> LiveRpcResult {
    LiveRpcResult {
        jsonrpc: "2.0".to_string(),
        method: Some("log.subscribe".to_string()),
        id: 0,
        error: RpcError::transport(message),
        result: serde_json::Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockLiveTransport;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test]
    async fn delivers_frames_then_one_final_event_on_unsubscribe() {
        let mut frames = Vec::new();
        for i in 0..10 {
            frames.push(serde_json::to_vec(&serde_json::json!({ "id": i, "result": true })).unwrap());
        }
        let transport = Arc::new(MockLiveTransport::new(frames));

        let received = Arc::new(AtomicUsize::new(0));
        let last_message: Arc<std::sync::Mutex<String>> = Arc::new(std::sync::Mutex::new(String::new()));

        let received_clone = received.clone();
        let last_message_clone = last_message.clone();
        let callback = sync_callback(move |event: LiveRpcResult| {
            received_clone.fetch_add(1, Ordering::SeqCst);
            *last_message_clone.lock().unwrap() = event.error.message;
        });

        let subscription = subscribe(transport.clone(), None, callback);

        // Give the loop a chance to drain the 10 queued frames.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        subscription.unsubscribe().await;
        subscription.join().await;

        assert_eq!(received.load(Ordering::SeqCst), 11); // 10 frames + 1 closure event
        assert_eq!(*last_message.lock().unwrap(), "WebSocket/UnixSocket normal closure");

        let sent = transport.sent();
        assert!(sent.len() >= 3); // subscribe, unsubscribe, log.send audit
    }

    #[tokio::test]
    async fn subscribe_sends_the_envelope_exactly_once() {
        let transport = Arc::new(MockLiveTransport::new(Vec::new()));
        let callback = sync_callback(|_event: LiveRpcResult| {});
        let subscription = subscribe(transport.clone(), Some(vec!["all".to_string()]), callback);

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        subscription.unsubscribe().await;
        subscription.join().await;

        let sent = transport.sent();
        let subscribe_calls = sent
            .iter()
            .filter(|payload| String::from_utf8_lossy(payload).contains("log.subscribe"))
            .count();
        assert_eq!(subscribe_calls, 1);
    }
}
