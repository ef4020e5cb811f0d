// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `connthrottle.*` facade (`spec.md` §4.5, §6: gated to server 6.2.2+).

use super::{decode_bool, decode_result};
use crate::dispatch::Dispatcher;
use crate::model::{ConnThrottle, Decoded};
use std::sync::Arc;

pub struct ConnThrottleFacade {
    dispatcher: Arc<Dispatcher>,
}

impl ConnThrottleFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn status(&self) -> Decoded<ConnThrottle> {
        let response = self.dispatcher.query("connthrottle.status", None, None).await;
        decode_result(&response)
    }

    pub async fn set(&self, period: u64, connections_per_period: u64) -> Decoded<bool> {
        let params = serde_json::json!({ "period": period, "connections_per_period": connections_per_period });
        let response = self.dispatcher.query("connthrottle.set", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn reset(&self) -> Decoded<bool> {
        let response = self.dispatcher.query("connthrottle.reset", None, None).await;
        decode_bool(&response)
    }
}
