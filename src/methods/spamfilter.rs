// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `spamfilter.*` facade (`spec.md` §4.5).

use super::decode_bool;
use crate::dispatch::Dispatcher;
use crate::model::{Decoded, Spamfilter};
use std::sync::Arc;

pub struct SpamfilterFacade {
    dispatcher: Arc<Dispatcher>,
}

impl SpamfilterFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Vec<Spamfilter> {
        let response = self.dispatcher.query("spamfilter.list", None, None).await;
        super::decode_list_field(&response, "list")
    }

    pub async fn get(&self, name: &str) -> Decoded<Spamfilter> {
        let params = serde_json::json!({ "name": name });
        let response = self.dispatcher.query("spamfilter.get", Some(params), None).await;
        super::decode_field(&response, "tkl")
    }

    pub async fn add(
        &self,
        pattern: &str,
        match_type: &str,
        ban_action: &str,
        ban_duration: Option<&str>,
        spamfilter_targets: Option<&str>,
        reason: &str,
    ) -> Decoded<bool> {
        let params = serde_json::json!({
            "match": pattern,
            "match_type": match_type,
            "ban_action": ban_action,
            "ban_duration": ban_duration.unwrap_or(""),
            "spamfilter_targets": spamfilter_targets.unwrap_or(""),
            "reason": reason,
        });
        let response = self.dispatcher.query("spamfilter.add", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn del(&self, name: &str) -> Decoded<bool> {
        let params = serde_json::json!({ "name": name });
        let response = self.dispatcher.query("spamfilter.del", Some(params), None).await;
        decode_bool(&response)
    }
}
