// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use super::User;
use serde::{Deserialize, Serialize};

/// A connected entity on the IRC network: either an end-user or a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub connected_since: String,
    #[serde(default)]
    pub idle_since: String,
    #[serde(default)]
    pub geoip: Geoip,
    #[serde(default)]
    pub tls: TlsInfo,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub server: Option<ClientServer>,
}

/// The server-specific sub-record of a [`Client`], when that client is a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientServer {
    #[serde(default)]
    pub server: Server,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    #[serde(default)]
    pub features: ServerFeatures,
    #[serde(default)]
    pub num_users: u64,
    #[serde(default)]
    pub boot_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerFeatures {
    #[serde(default)]
    pub software: String,
    #[serde(default)]
    pub protocol: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geoip {
    /// Decoded from the server's `country-code` key (`spec.md` §3 invariant ii).
    #[serde(default, rename = "country-code")]
    pub country_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TlsInfo {
    #[serde(default)]
    pub cipher: String,
    #[serde(default)]
    pub certfp: String,
}
