// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub realname: String,
    #[serde(default)]
    pub vhost: String,
    #[serde(default)]
    pub reputation: i64,
    /// Decoded from the server's `security-groups` key (`spec.md` §3 invariant ii).
    #[serde(default, rename = "security-groups")]
    pub security_groups: HashSet<String>,
    #[serde(default)]
    pub channels: Vec<UserChannel>,
    #[serde(default)]
    pub oper: Option<OperInfo>,
}

/// One entry of a [`User`]'s channel membership: the channel name and the
/// member's level string in it (e.g. `"@"`, `"+"`, `""`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserChannel {
    pub name: String,
    #[serde(default)]
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperInfo {
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub oper_block: String,
    #[serde(default)]
    pub class_block: String,
}
