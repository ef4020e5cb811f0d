// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Programmatic mock transports for tests, modeled on
//! `subxt_rpcs::client::mock_rpc_client::MockRpcClient`: respond to requests with a
//! closure instead of a live daemon.

use super::{LiveTransport, SyncTransport, TransportFuture};
use std::collections::VecDeque;
use std::sync::Mutex;

type SyncHandler = Box<dyn Fn(Vec<u8>) -> Result<Vec<u8>, String> + Send + Sync>;

/// A mock [`SyncTransport`] that responds to every call with the given handler.
pub struct MockTransport {
    handler: SyncHandler,
}

impl MockTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(Vec<u8>) -> Result<Vec<u8>, String> + Send + Sync + 'static,
    {
        Self { handler: Box::new(handler) }
    }

    /// Always answers with the given JSON value, ignoring the request payload.
    pub fn always_reply(value: serde_json::Value) -> Self {
        Self::new(move |_payload| serde_json::to_vec(&value).map_err(|e| e.to_string()))
    }
}

impl SyncTransport for MockTransport {
    fn call<'a>(&'a self, payload: Vec<u8>) -> TransportFuture<'a, Result<Vec<u8>, String>> {
        let result = (self.handler)(payload);
        Box::pin(async move { result })
    }
}

/// A mock [`LiveTransport`] that replays a fixed queue of frames and records every
/// payload sent to it (subscribe/unsubscribe envelopes) for assertions.
pub struct MockLiveTransport {
    frames: Mutex<VecDeque<Vec<u8>>>,
    sent: Mutex<Vec<Vec<u8>>>,
}

impl MockLiveTransport {
    pub fn new(frames: Vec<Vec<u8>>) -> Self {
        Self { frames: Mutex::new(frames.into()), sent: Mutex::new(Vec::new()) }
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }

    /// Pushes one more frame to be returned from a future `recv()`.
    pub fn push_frame(&self, frame: Vec<u8>) {
        self.frames.lock().unwrap().push_back(frame);
    }
}

impl LiveTransport for MockLiveTransport {
    fn send<'a>(&'a self, payload: Vec<u8>) -> TransportFuture<'a, Result<(), String>> {
        self.sent.lock().unwrap().push(payload);
        Box::pin(async move { Ok(()) })
    }

    fn recv<'a>(&'a self) -> TransportFuture<'a, Option<Result<Vec<u8>, String>>> {
        let next = self.frames.lock().unwrap().pop_front();
        Box::pin(async move {
            match next {
                Some(frame) => Some(Ok(frame)),
                // An empty queue blocks forever rather than signaling closure, so
                // callers that want a natural end-of-stream must push a sentinel or
                // drop the transport; in practice tests cancel via `unsubscribe()`.
                None => std::future::pending().await,
            }
        })
    }
}
