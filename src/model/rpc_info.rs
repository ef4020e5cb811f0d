// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use serde::{Deserialize, Serialize};

/// One entry of `rpc.info()`'s result: an exposed RPC method and the module that
/// registered it (`spec.md` §3).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub version: String,
}
