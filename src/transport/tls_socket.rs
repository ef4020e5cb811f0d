// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! TLS raw-socket transport: hand-compose the HTTP/1.1 request, read until the peer
//! closes, split on the first `\r\n\r\n` to isolate the JSON body (`spec.md` §4.2).
//! No read timeout is set, matching `spec.md` §5 "Timeouts".

use super::{insecure_tls_connector, SyncTransport, TransportFuture};
use crate::{validate, Error};
use base64::Engine;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub struct TlsSocketTransport {
    host: String,
    port: u16,
    endpoint: String,
    username: String,
    password: String,
    connector: tokio_rustls::TlsConnector,
}

impl TlsSocketTransport {
    pub fn new(url: &str, username: impl Into<String>, password: impl Into<String>) -> Result<Self, Error> {
        let (host, endpoint, port) = validate::parse_https_url(url)?;
        Ok(Self {
            host,
            port,
            endpoint,
            username: username.into(),
            password: password.into(),
            connector: insecure_tls_connector(),
        })
    }
}

impl SyncTransport for TlsSocketTransport {
    fn call<'a>(&'a self, payload: Vec<u8>) -> TransportFuture<'a, Result<Vec<u8>, String>> {
        Box::pin(async move {
            let addr = format!("{}:{}", self.host, self.port);
            let tcp = tokio::net::TcpStream::connect(&addr)
                .await
                .map_err(|e| format!("connect to {addr} failed: {e}"))?;

            let server_name = rustls::pki_types::ServerName::try_from(self.host.clone())
                .map_err(|e| format!("invalid server name `{}`: {e}", self.host))?;
            let mut tls = self
                .connector
                .connect(server_name, tcp)
                .await
                .map_err(|e| format!("TLS handshake failed: {e}"))?;

            let credentials =
                base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", self.username, self.password));
            let mut request = format!(
                "POST /{} HTTP/1.1\r\n\
                 Host: {}\r\n\
                 Content-Type: application/json\r\n\
                 Authorization: Basic {}\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n",
                self.endpoint,
                self.host,
                credentials,
                payload.len()
            )
            .into_bytes();
            request.extend_from_slice(&payload);

            tls.write_all(&request).await.map_err(|e| format!("write failed: {e}"))?;

            let mut buf = Vec::new();
            tls.read_to_end(&mut buf).await.map_err(|e| format!("read failed: {e}"))?;

            let text = String::from_utf8_lossy(&buf);
            match text.split_once("\r\n\r\n") {
                Some((_headers, body)) => Ok(body.as_bytes().to_vec()),
                None => Err("malformed HTTP response: no header/body separator found".to_string()),
            }
        })
    }
}
