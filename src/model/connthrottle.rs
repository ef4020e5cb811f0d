// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use serde::{Deserialize, Serialize};

/// Nested configuration, counters, and last-minute statistics from the
/// throttling module (`spec.md` §3).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnThrottle {
    #[serde(default)]
    pub config: ConnThrottleConfig,
    #[serde(default)]
    pub counters: ConnThrottleCounters,
    #[serde(default)]
    pub last_minute: ConnThrottleLastMinute,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnThrottleConfig {
    #[serde(default)]
    pub period: u64,
    #[serde(default)]
    pub connections_per_period: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnThrottleCounters {
    #[serde(default)]
    pub connections_in_current_period: u64,
    #[serde(default)]
    pub rejected_connections: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnThrottleLastMinute {
    #[serde(default)]
    pub connections: u64,
    #[serde(default)]
    pub rejected: u64,
}
