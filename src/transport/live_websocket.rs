// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Live WebSocket transport: TLS WebSocket upgrade with Basic auth; iterate frames
//! until unsubscribe (`spec.md` §4.4, §6 "Live WebSocket transport"). Note there is
//! no endpoint suffix on the upgrade URL, unlike the synchronous transports.

use super::{insecure_tls_config, LiveTransport, TransportFuture};
use crate::Error;
use base64::Engine;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{Connector, MaybeTlsStream, WebSocketStream};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub struct WebSocketLiveTransport {
    write: Mutex<futures::stream::SplitSink<WsStream, Message>>,
    read: Mutex<futures::stream::SplitStream<WsStream>>,
}

impl WebSocketLiveTransport {
    pub async fn connect(host: &str, port: u16, username: &str, password: &str) -> Result<Self, Error> {
        let url = format!("wss://{host}:{port}/");
        let mut request = url.clone().into_client_request()?;

        let credentials = base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
        let header_value = format!("Basic {credentials}")
            .parse()
            .map_err(|_| Error::InvalidUrl(url.clone()))?;
        request.headers_mut().insert("Authorization", header_value);

        let connector = Connector::Rustls(std::sync::Arc::new(insecure_tls_config()));
        let (stream, _response) =
            tokio_tungstenite::connect_async_tls_with_config(request, None, false, Some(connector)).await?;

        let (write, read) = stream.split();
        Ok(Self { write: Mutex::new(write), read: Mutex::new(read) })
    }
}

impl LiveTransport for WebSocketLiveTransport {
    fn send<'a>(&'a self, payload: Vec<u8>) -> TransportFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let text = String::from_utf8(payload).map_err(|e| e.to_string())?;
            self.write.lock().await.send(Message::Text(text)).await.map_err(|e| e.to_string())
        })
    }

    fn recv<'a>(&'a self) -> TransportFuture<'a, Option<Result<Vec<u8>, String>>> {
        Box::pin(async move {
            loop {
                let next = self.read.lock().await.next().await;
                return match next {
                    None => None,
                    Some(Ok(Message::Text(text))) => Some(Ok(text.into_bytes())),
                    Some(Ok(Message::Binary(bytes))) => Some(Ok(bytes)),
                    Some(Ok(Message::Close(_))) => None,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => Some(Err(e.to_string())),
                };
            }
        })
    }
}
