// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use super::{Geoip, TlsInfo, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub creation_time: String,
    #[serde(default)]
    pub num_users: u64,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub topic_set_by: String,
    #[serde(default)]
    pub topic_set_at: String,
    #[serde(default)]
    pub modes: String,
    #[serde(default)]
    pub bans: Vec<ChannelBanEntry>,
    #[serde(default)]
    pub ban_exemptions: Vec<ChannelBanEntry>,
    #[serde(default)]
    pub invite_exceptions: Vec<ChannelBanEntry>,
    #[serde(default)]
    pub members: Vec<ChannelMembers>,
}

/// An entry in a channel's `+b`/`+e`/`+I` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelBanEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub set_by: String,
    #[serde(default)]
    pub set_at: String,
}

/// One member of a channel. The `user`/`tls`/`geoip` sub-records are only populated
/// by the server when `object_detail_level >= 3` (`spec.md` §3).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelMembers {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub tls: Option<TlsInfo>,
    #[serde(default)]
    pub geoip: Option<Geoip>,
}
