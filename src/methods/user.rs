// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `user.*` facade (`spec.md` §4.5).

use super::{decode_bool, decode_field};
use crate::dispatch::Dispatcher;
use crate::model::{Client, Decoded};
use serde::Serialize;
use std::sync::Arc;

pub struct UserFacade {
    dispatcher: Arc<Dispatcher>,
}

#[derive(Serialize)]
struct ListParams {
    object_detail_level: u8,
}

impl UserFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Defaults `object_detail_level` to `2` (`spec.md` §4.5); `4` enumerates member
    /// channels and security groups.
    pub async fn list(&self, object_detail_level: Option<u8>) -> Vec<Client> {
        let params = ListParams { object_detail_level: object_detail_level.unwrap_or(2) };
        let response = self.dispatcher.query("user.list", Some(serde_json::json!(params)), None).await;
        super::decode_list_field(&response, "list")
    }

    pub async fn get(&self, nick: &str, object_detail_level: Option<u8>) -> Decoded<Client> {
        let params = serde_json::json!({
            "nick": nick,
            "object_detail_level": object_detail_level.unwrap_or(2),
        });
        let response = self.dispatcher.query("user.get", Some(params), None).await;
        decode_field(&response, "client")
    }

    pub async fn set_nick(&self, nick: &str, new_nick: &str, force: Option<bool>) -> Decoded<bool> {
        let params = serde_json::json!({ "nick": nick, "newnick": new_nick, "force": force.unwrap_or(false) });
        let response = self.dispatcher.query("user.set_nick", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn kill(&self, nick: &str, reason: Option<&str>) -> Decoded<bool> {
        let params = serde_json::json!({ "nick": nick, "reason": reason.unwrap_or("") });
        let response = self.dispatcher.query("user.kill", Some(params), None).await;
        decode_bool(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn list_returns_empty_on_server_error() {
        let transport = MockTransport::always_reply(serde_json::json!({
            "error": { "code": -1000, "message": "nope" }
        }));
        let facade = UserFacade::new(Arc::new(Dispatcher::new(Box::new(transport))));
        let users = facade.list(None).await;
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn get_decodes_the_client_field() {
        let transport = MockTransport::always_reply(serde_json::json!({
            "result": { "client": { "name": "adator", "hostname": "h", "id": "001AAA" } }
        }));
        let facade = UserFacade::new(Arc::new(Dispatcher::new(Box::new(transport))));
        let client = facade.get("adator", None).await;
        assert_eq!(client.name, "adator");
        assert_eq!(client.hostname, "h");
        assert_eq!(client.id, "001AAA");
        assert!(client.error.is_ok());
    }
}
