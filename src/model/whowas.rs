// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use super::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhowasEvent {
    #[default]
    #[serde(rename = "connect")]
    Connect,
    #[serde(rename = "disconnect")]
    Disconnect,
    #[serde(rename = "nick-change")]
    NickChange,
    /// Any event the server reports that this client doesn't have a dedicated
    /// variant for yet; keeps decoding forward-compatible.
    #[serde(other)]
    Other,
}

/// A historical client record with the same sub-records as [`Client`], marked with
/// the event that produced it (`spec.md` §3).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Whowas {
    #[serde(flatten)]
    pub client: Client,
    #[serde(default)]
    pub event: WhowasEvent,
    #[serde(default)]
    pub logon_time: String,
    #[serde(default)]
    pub logoff_time: String,
}
