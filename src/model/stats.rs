// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A grouped snapshot: servers, users (with an optional per-country breakdown),
/// channels, ban totals (`spec.md` §3).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub server: StatsServer,
    #[serde(default)]
    pub user: StatsUser,
    #[serde(default)]
    pub channel: StatsChannel,
    #[serde(default)]
    pub server_ban: StatsServerBan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsServer {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsUser {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub invisible: u64,
    #[serde(default)]
    pub max: u64,
    #[serde(default)]
    pub operators: u64,
    #[serde(default)]
    pub unknown: u64,
    #[serde(default)]
    pub per_country: Option<HashMap<String, u64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsChannel {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsServerBan {
    #[serde(default)]
    pub total: u64,
}
