// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! The pluggable request/response transport layer (`spec.md` §4.2) and the two live
//! (streaming) transports (`spec.md` §4.4).
//!
//! [`SyncTransport`] and [`LiveTransport`] are kept object-safe, the same way
//! [`subxt_rpcs::client::RpcClientT`] in the teacher crate hand-rolls boxed futures
//! instead of using `async fn` in a trait, so they can live behind `Box<dyn ..>` /
//! `Arc<dyn ..>` without an extra macro dependency.

mod insecure_tls;

#[cfg(feature = "https")]
pub mod https;
pub mod tls_socket;
#[cfg(feature = "unixsocket")]
pub mod unix_socket;

#[cfg(feature = "live")]
pub mod live_websocket;
pub mod live_unix;

pub mod mock;

pub(crate) use insecure_tls::{insecure_tls_config, insecure_tls_connector};

/// A boxed future, matching the signature `subxt_rpcs` uses for its transport trait.
pub type TransportFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// Low level synchronous request/response transport (`spec.md` §4.2).
///
/// Implementations never retry and never pool connections: each call opens and
/// closes its own connection. A `None`/`Err` return never means "the server said
/// no" — that's carried in the decoded [`crate::model::RpcResult`]; it means the
/// transport itself failed, which the dispatcher promotes to a `-1` `RpcError`.
pub trait SyncTransport: Send + Sync {
    /// Sends a serialized envelope and returns the serialized reply.
    ///
    /// `Err(message)` on any transport-level failure; `message` becomes the
    /// `RpcError::message` the caller sees (`spec.md` §4.2: a non-2xx HTTPS status
    /// carries the code, reason phrase, and body in its message).
    fn call<'a>(&'a self, payload: Vec<u8>) -> TransportFuture<'a, Result<Vec<u8>, String>>;
}

/// Low level live (streaming) transport (`spec.md` §4.4).
pub trait LiveTransport: Send + Sync {
    /// Sends a serialized envelope. Used once for the initial `log.subscribe`, and
    /// again for `log.unsubscribe`/the synthetic `log.send` audit event on teardown.
    fn send<'a>(&'a self, payload: Vec<u8>) -> TransportFuture<'a, Result<(), String>>;

    /// Returns the next decoded frame, or `None` once the stream has closed.
    fn recv<'a>(&'a self) -> TransportFuture<'a, Option<Result<Vec<u8>, String>>>;
}
