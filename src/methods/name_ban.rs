// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `name_ban.*` facade (`spec.md` §4.5): qline-style nick/ident bans.

use super::decode_bool;
use crate::dispatch::Dispatcher;
use crate::model::{Decoded, NameBan};
use std::sync::Arc;

pub struct NameBanFacade {
    dispatcher: Arc<Dispatcher>,
}

impl NameBanFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Vec<NameBan> {
        let response = self.dispatcher.query("name_ban.list", None, None).await;
        super::decode_list_field(&response, "list")
    }

    pub async fn get(&self, name: &str) -> Decoded<NameBan> {
        let params = serde_json::json!({ "name": name });
        let response = self.dispatcher.query("name_ban.get", Some(params), None).await;
        super::decode_field(&response, "tkl")
    }

    pub async fn add(&self, name: &str, reason: &str, expire_at: Option<&str>) -> Decoded<bool> {
        let params = serde_json::json!({ "name": name, "reason": reason, "expire_at": expire_at.unwrap_or("") });
        let response = self.dispatcher.query("name_ban.add", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn del(&self, name: &str) -> Decoded<bool> {
        let params = serde_json::json!({ "name": name });
        let response = self.dispatcher.query("name_ban.del", Some(params), None).await;
        decode_bool(&response)
    }
}
