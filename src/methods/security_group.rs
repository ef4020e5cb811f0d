// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `security_group.*` facade (`spec.md` §4.5, §6: gated to server 6.2.2+).

use super::decode_field;
use crate::dispatch::Dispatcher;
use crate::model::{Decoded, SecurityGroup};
use std::sync::Arc;

pub struct SecurityGroupFacade {
    dispatcher: Arc<Dispatcher>,
}

impl SecurityGroupFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Vec<SecurityGroup> {
        let response = self.dispatcher.query("security_group.list", None, None).await;
        super::decode_list_field(&response, "list")
    }

    pub async fn get(&self, name: &str) -> Decoded<SecurityGroup> {
        let params = serde_json::json!({ "name": name });
        let response = self.dispatcher.query("security_group.get", Some(params), None).await;
        decode_field(&response, "security-group")
    }
}
