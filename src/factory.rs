// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Factories mapping a transport tag to a concrete [`Connection`]/[`LiveConnection`]
//! (`spec.md` §4.6, §6 "Setup parameters"). An unknown tag fails with
//! [`Error::UnknownTag`].

use crate::connection::Connection;
#[cfg(feature = "live")]
use crate::transport::live_unix::UnixLiveTransport;
#[cfg(feature = "unixsocket")]
use crate::transport::unix_socket::UnixSocketTransport;
#[cfg(feature = "live")]
use crate::transport::live_websocket::WebSocketLiveTransport;
use crate::Error;
use std::path::PathBuf;

/// Setup parameters for a synchronous connection (`spec.md` §6).
#[derive(Debug, Clone)]
pub enum SetupParams {
    Https { url: String, username: String, password: String },
    UnixSocket { path_to_socket_file: PathBuf },
}

/// Setup parameters for a live (streaming) connection (`spec.md` §6).
#[derive(Debug, Clone)]
pub enum LiveSetupParams {
    WebSocket { host: String, port: u16, username: String, password: String },
    UnixSocket { path_to_socket_file: PathBuf },
}

/// Builds a synchronous [`Connection`] for tag `"http"` or `"unixsocket"`.
pub async fn connection_factory(tag: &str, params: SetupParams) -> Result<Connection, Error> {
    match (tag, params) {
        #[cfg(feature = "https")]
        ("http", SetupParams::Https { url, username, password }) => {
            let transport = crate::transport::https::HttpsTransport::new(&url, username, password)?;
            Ok(Connection::new(Box::new(transport)))
        }
        #[cfg(feature = "unixsocket")]
        ("unixsocket", SetupParams::UnixSocket { path_to_socket_file }) => {
            let transport = UnixSocketTransport::new(path_to_socket_file)?;
            Ok(Connection::new(Box::new(transport)))
        }
        (other, _) => Err(Error::UnknownTag(other.to_string())),
    }
}

/// Builds a live connection for tag `"http"` (WebSocket upgrade) or `"unixsocket"`.
#[cfg(feature = "live")]
pub async fn live_connection_factory(
    tag: &str,
    params: LiveSetupParams,
) -> Result<LiveConnectionHandle, Error> {
    match (tag, params) {
        ("http", LiveSetupParams::WebSocket { host, port, username, password }) => {
            let transport = WebSocketLiveTransport::connect(&host, port, &username, &password).await?;
            Ok(LiveConnectionHandle::WebSocket(crate::connection::LiveConnection::new(transport)))
        }
        ("unixsocket", LiveSetupParams::UnixSocket { path_to_socket_file }) => {
            let transport = UnixLiveTransport::connect(path_to_socket_file).await?;
            Ok(LiveConnectionHandle::Unix(crate::connection::LiveConnection::new(transport)))
        }
        (other, _) => Err(Error::UnknownTag(other.to_string())),
    }
}

/// Either concrete flavor of [`crate::connection::LiveConnection`], returned by
/// [`live_connection_factory`] since the two live transports are different types.
#[cfg(feature = "live")]
pub enum LiveConnectionHandle {
    WebSocket(crate::connection::LiveConnection<WebSocketLiveTransport>),
    Unix(crate::connection::LiveConnection<UnixLiveTransport>),
}

#[cfg(feature = "live")]
impl LiveConnectionHandle {
    pub fn subscribe(
        &self,
        sources: Option<Vec<String>>,
        callback: std::sync::Arc<dyn crate::live::LiveCallback>,
    ) -> crate::live::Subscription {
        match self {
            Self::WebSocket(conn) => conn.subscribe(sources, callback),
            Self::Unix(conn) => conn.subscribe(sources, callback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_tag_fails_without_touching_the_network() {
        let result = connection_factory(
            "carrier-pigeon",
            SetupParams::Https { url: "https://h:1/e".into(), username: "u".into(), password: "p".into() },
        )
        .await;
        assert!(matches!(result, Err(Error::UnknownTag(tag)) if tag == "carrier-pigeon"));
    }
}
