// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! HTTPS transport: POST the envelope with HTTP Basic auth, ignore TLS certificate
//! verification, decode body (`spec.md` §4.2).

use super::{SyncTransport, TransportFuture};
use crate::{validate, Error};

pub struct HttpsTransport {
    client: reqwest::Client,
    url: reqwest::Url,
    username: String,
    password: String,
}

impl HttpsTransport {
    pub fn new(url: &str, username: impl Into<String>, password: impl Into<String>) -> Result<Self, Error> {
        let (host, endpoint, port) = validate::parse_https_url(url)?;
        let parsed = reqwest::Url::parse(&format!("https://{host}:{port}/{endpoint}"))
            .map_err(|_| Error::InvalidUrl(url.to_string()))?;
        let client = reqwest::Client::builder().danger_accept_invalid_certs(true).build()?;
        Ok(Self { client, url: parsed, username: username.into(), password: password.into() })
    }
}

impl SyncTransport for HttpsTransport {
    fn call<'a>(&'a self, payload: Vec<u8>) -> TransportFuture<'a, Result<Vec<u8>, String>> {
        Box::pin(async move {
            let response = self
                .client
                .post(self.url.clone())
                .basic_auth(&self.username, Some(&self.password))
                .header("Content-Type", "application/json")
                .body(payload)
                .send()
                .await
                .map_err(|e| e.to_string())?;

            let status = response.status();
            let body = response.text().await.map_err(|e| e.to_string())?;

            if !status.is_success() {
                return Err(format!(
                    "{} {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("unknown"),
                    body
                ));
            }

            let lower = body.to_ascii_lowercase();
            if lower.contains("authentication required") {
                return Err("authentication required".to_string());
            }
            if body.contains("Connection aborted") {
                return Err("Connection aborted".to_string());
            }

            Ok(body.into_bytes())
        })
    }
}
