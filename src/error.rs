// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Setup-time errors, raised from factories and `Connection::connect*`.
//!
//! This is distinct from [`crate::model::RpcError`], the wire-level `{code, message}`
//! pair carried inside every [`crate::model::RpcResult`]. `Error` is for failures that
//! happen *before* a connection exists and are programmer/operator errors (a bad URL, a
//! socket file that doesn't exist); `RpcError` is for failures that happen *during* a
//! call and are runtime conditions a caller is expected to branch on, never an exception.

/// Errors that can occur while setting up a connection or a live transport.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The URL does not match `^https?://([A-Za-z0-9.\-]+):(\d+)/(.+)$`.
    #[error("invalid URL `{0}`: expected `scheme://host:port/endpoint`")]
    InvalidUrl(String),

    /// The UNIX socket file does not exist.
    #[error("UNIX socket file not found: {0}")]
    SocketNotFound(std::path::PathBuf),

    /// A factory was asked to build a connection for a tag it doesn't know.
    #[error("unknown connection tag `{0}`; expected `http` or `unixsocket`")]
    UnknownTag(String),

    /// I/O failure while establishing a connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure building or negotiating the TLS session.
    #[error("TLS error: {0}")]
    Tls(#[from] rustls::Error),

    /// The configured host is not a valid TLS server name.
    #[error("invalid TLS server name: {0}")]
    InvalidDnsName(#[from] rustls::pki_types::InvalidDnsNameError),

    /// Failure from the HTTPS client.
    #[cfg(feature = "https")]
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure negotiating or running the WebSocket upgrade.
    #[cfg(feature = "live")]
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// A request or response could not be (de)serialized.
    #[error("cannot (de)serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `server.get().server.features.software` could not be parsed as `UnrealIRCd-X.Y.Z`.
    #[error("server software version string `{0}` could not be parsed")]
    VersionParse(String),
}
