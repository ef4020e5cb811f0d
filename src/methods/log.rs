// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `log.*` facade (`spec.md` §4.5).
//!
//! `subscribe`/`unsubscribe` are driven automatically by [`crate::live::subscribe`]
//! over a live transport; the methods here issue the same envelopes over the
//! synchronous dispatcher, for callers who want to manage a subscription without
//! going through the live state machine (version-gated, see `spec.md` §6).

use super::decode_bool;
use crate::dispatch::Dispatcher;
use crate::live::default_sources;
use crate::model::Decoded;
use std::sync::Arc;

pub struct LogFacade {
    dispatcher: Arc<Dispatcher>,
}

impl LogFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Vec<String> {
        let response = self.dispatcher.query("log.list", None, None).await;
        super::decode_result_list(&response)
    }

    pub async fn subscribe(&self, sources: Option<Vec<String>>) -> Decoded<bool> {
        let params = serde_json::json!({ "sources": sources.unwrap_or_else(default_sources) });
        let response = self.dispatcher.query("log.subscribe", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn unsubscribe(&self) -> Decoded<bool> {
        let response = self.dispatcher.query("log.unsubscribe", None, None).await;
        decode_bool(&response)
    }

    pub async fn send(&self, msg: &str) -> Decoded<bool> {
        let params = serde_json::json!({ "msg": msg });
        let response = self.dispatcher.query("log.send", Some(params), None).await;
        decode_bool(&response)
    }
}
