// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `stats.*` facade (`spec.md` §4.5).

use super::decode_result;
use crate::dispatch::Dispatcher;
use crate::model::{Decoded, Stats};
use std::sync::Arc;

pub struct StatsFacade {
    dispatcher: Arc<Dispatcher>,
}

impl StatsFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Defaults `object_detail_level` to `1` (`spec.md` §4.5).
    pub async fn get(&self, object_detail_level: Option<u8>) -> Decoded<Stats> {
        let params = serde_json::json!({ "object_detail_level": object_detail_level.unwrap_or(1) });
        let response = self.dispatcher.query("stats.get", Some(params), None).await;
        decode_result(&response)
    }
}
