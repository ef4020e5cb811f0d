// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use serde::{Deserialize, Serialize};

/// Fields shared by every ban-list entry (`server_ban`, `server_ban_exception`,
/// `name_ban`, `spamfilter`), flattened into each concrete type (`spec.md` §3).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BanCommon {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub type_string: String,
    #[serde(default)]
    pub set_by: String,
    #[serde(default)]
    pub set_at: String,
    #[serde(default)]
    pub expire_at: String,
    #[serde(default)]
    pub duration_string: String,
    #[serde(default)]
    pub set_in_config: bool,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerBan {
    #[serde(flatten)]
    pub common: BanCommon,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerBanException {
    #[serde(flatten)]
    pub common: BanCommon,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameBan {
    #[serde(flatten)]
    pub common: BanCommon,
    #[serde(default)]
    pub name: String,
}
