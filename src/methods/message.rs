// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `message.*` facade (`spec.md` §4.5, §6: gated to server 6.2.2+).

use super::decode_bool;
use crate::dispatch::Dispatcher;
use crate::model::Decoded;
use std::sync::Arc;

pub struct MessageFacade {
    dispatcher: Arc<Dispatcher>,
}

impl MessageFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn send_privmsg(&self, from: &str, to: &str, text: &str) -> Decoded<bool> {
        let params = serde_json::json!({ "from": from, "to": to, "msg": text });
        let response = self.dispatcher.query("message.send_privmsg", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn send_notice(&self, from: &str, to: &str, text: &str) -> Decoded<bool> {
        let params = serde_json::json!({ "from": from, "to": to, "msg": text });
        let response = self.dispatcher.query("message.send_notice", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn send_numeric(&self, to: &str, numeric: u16, text: &str) -> Decoded<bool> {
        let params = serde_json::json!({ "to": to, "numeric": numeric, "msg": text });
        let response = self.dispatcher.query("message.send_numeric", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn send_standard_reply(
        &self,
        to: &str,
        command: &str,
        code: &str,
        text: &str,
    ) -> Decoded<bool> {
        let params = serde_json::json!({ "to": to, "command": command, "code": code, "text": text });
        let response = self.dispatcher.query("message.send_standard_reply", Some(params), None).await;
        decode_bool(&response)
    }
}
