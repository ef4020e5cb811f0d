// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `rpc.*` facade (`spec.md` §4.5): introspection and bookkeeping methods on the
//! JSON-RPC interface itself, distinct from the IRC-level namespaces.

use super::decode_bool;
use crate::dispatch::Dispatcher;
use crate::model::{Decoded, RpcInfo};
use std::sync::Arc;

pub struct RpcFacade {
    dispatcher: Arc<Dispatcher>,
}

impl RpcFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// `spec.md` §8 scenario S6: every entry has non-empty `name`/`module`/`version`.
    pub async fn info(&self) -> Vec<RpcInfo> {
        let response = self.dispatcher.query("rpc.info", None, None).await;
        super::decode_result_list(&response)
    }

    pub async fn set_issuer(&self, issuer: &str) -> Decoded<bool> {
        let params = serde_json::json!({ "issuer": issuer });
        let response = self.dispatcher.query("rpc.set_issuer", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn add_timer(&self, timer_id: &str, every_msec: u64) -> Decoded<bool> {
        let params = serde_json::json!({ "timer_id": timer_id, "every_msec": every_msec });
        let response = self.dispatcher.query("rpc.add_timer", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn del_timer(&self, timer_id: &str) -> Decoded<bool> {
        let params = serde_json::json!({ "timer_id": timer_id });
        let response = self.dispatcher.query("rpc.del_timer", Some(params), None).await;
        decode_bool(&response)
    }
}
