// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use super::bans::BanCommon;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    #[default]
    #[serde(rename = "simple")]
    Simple,
    #[serde(rename = "regex")]
    Regex,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spamfilter {
    #[serde(flatten)]
    pub common: BanCommon,
    #[serde(default)]
    pub match_type: MatchType,
    #[serde(default, rename = "match")]
    pub pattern: String,
    #[serde(default)]
    pub ban_action: String,
    #[serde(default)]
    pub ban_duration: String,
    #[serde(default)]
    pub spamfilter_targets: String,
    #[serde(default)]
    pub hits: u64,
}
