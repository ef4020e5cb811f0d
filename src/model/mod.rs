// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Typed records for every documented server object (`spec.md` §3), plus the
//! JSON-RPC envelope types shared by every transport.

mod bans;
mod channel;
mod client;
mod connthrottle;
mod rpc_info;
mod security_group;
mod spamfilter;
mod stats;
mod user;
mod whowas;

pub use bans::{BanCommon, NameBan, ServerBan, ServerBanException};
pub use channel::{Channel, ChannelBanEntry, ChannelMembers};
pub use client::{Client, ClientServer, Geoip, Server, ServerFeatures, TlsInfo};
pub use connthrottle::{ConnThrottle, ConnThrottleConfig, ConnThrottleCounters, ConnThrottleLastMinute};
pub use rpc_info::RpcInfo;
pub use security_group::SecurityGroup;
pub use spamfilter::{MatchType, Spamfilter};
pub use stats::{Stats, StatsChannel, StatsServer, StatsServerBan, StatsUser};
pub use user::{OperInfo, User, UserChannel};
pub use whowas::{Whowas, WhowasEvent};

use serde::{Deserialize, Serialize};

/// `code == 0` means success; any other code means failure. Application errors carry the
/// server's code verbatim; transport failures use `-1`; an empty response uses `-2`;
/// an internal decode/programming error uses `-3` (`spec.md` §3, §7).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl Default for RpcError {
    fn default() -> Self {
        Self::success()
    }
}

impl RpcError {
    pub fn success() -> Self {
        Self { code: 0, message: String::new() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self { code: -1, message: message.into() }
    }

    pub fn empty_response() -> Self {
        Self { code: -2, message: "empty response".into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { code: -3, message: message.into() }
    }

    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

fn jsonrpc_version() -> String {
    "2.0".to_string()
}

/// Wraps every synchronous reply. Exactly one of `{result, error}` is meaningful, but
/// both fields are always present with default values so the shape stays uniform
/// (`spec.md` §3). `result` doubles as the "attribute-style" raw-field view mentioned
/// in `spec.md` §9: a `serde_json::Value::Object` is already a recursive map callers
/// can index by field name for data the typed model doesn't cover yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResult {
    #[serde(default = "jsonrpc_version")]
    pub jsonrpc: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub error: RpcError,
    #[serde(default)]
    pub result: serde_json::Value,
}

impl Default for RpcResult {
    fn default() -> Self {
        Self {
            jsonrpc: jsonrpc_version(),
            method: None,
            id: 0,
            error: RpcError::default(),
            result: serde_json::Value::Null,
        }
    }
}

/// Same shape as [`RpcResult`], but `result` is the streamed payload: a log record, or
/// the boolean `true` once a subscription has been activated (`spec.md` §3).
pub type LiveRpcResult = RpcResult;

/// The decoded form of a single-record facade response: the typed value plus the
/// [`RpcError`] from the call that produced it. On failure, `value` is default-valued
/// and `error` is populated, satisfying `spec.md` §3 invariant (iv) and §8 property 2
/// in one type instead of repeating an `error` field on every model struct.
#[derive(Debug, Clone, Default)]
pub struct Decoded<T> {
    pub value: T,
    pub error: RpcError,
}

impl<T> std::ops::Deref for Decoded<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> std::ops::DerefMut for Decoded<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}
