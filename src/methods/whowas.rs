// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `whowas.*` facade (`spec.md` §4.5, §6: gated to server 6.1.0+).

use crate::dispatch::Dispatcher;
use crate::model::Whowas;
use std::sync::Arc;

pub struct WhowasFacade {
    dispatcher: Arc<Dispatcher>,
}

impl WhowasFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Defaults `object_detail_level` to `2` (`spec.md` §4.5).
    pub async fn get(&self, nick: &str, object_detail_level: Option<u8>) -> Vec<Whowas> {
        let params = serde_json::json!({ "nick": nick, "object_detail_level": object_detail_level.unwrap_or(2) });
        let response = self.dispatcher.query("whowas.get", Some(params), None).await;
        super::decode_list_field(&response, "list")
    }
}
