// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `server_ban.*` facade (`spec.md` §4.5).

use super::decode_bool;
use crate::dispatch::Dispatcher;
use crate::model::{Decoded, ServerBan};
use std::sync::Arc;

pub struct ServerBanFacade {
    dispatcher: Arc<Dispatcher>,
}

impl ServerBanFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Vec<ServerBan> {
        let response = self.dispatcher.query("server_ban.list", None, None).await;
        super::decode_list_field(&response, "list")
    }

    pub async fn get(&self, name: &str, ban_type: &str) -> Decoded<ServerBan> {
        let params = serde_json::json!({ "name": name, "type": ban_type });
        let response = self.dispatcher.query("server_ban.get", Some(params), None).await;
        super::decode_field(&response, "tkl")
    }

    /// See `spec.md` §8 scenario S4: a server replying with a non-zero `error.code`
    /// (e.g. `-1000 "already exists"`) is surfaced verbatim, not mapped to a local
    /// code.
    pub async fn add(
        &self,
        ban_type: &str,
        name: &str,
        reason: &str,
        expire_at: Option<&str>,
        duration_string: Option<&str>,
    ) -> Decoded<bool> {
        let params = serde_json::json!({
            "type": ban_type,
            "name": name,
            "reason": reason,
            "expire_at": expire_at.unwrap_or(""),
            "duration_string": duration_string.unwrap_or(""),
        });
        let response = self.dispatcher.query("server_ban.add", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn del(&self, name: &str, ban_type: &str) -> Decoded<bool> {
        let params = serde_json::json!({ "name": name, "type": ban_type });
        let response = self.dispatcher.query("server_ban.del", Some(params), None).await;
        decode_bool(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn add_surfaces_the_servers_error_code_verbatim() {
        let transport = MockTransport::always_reply(serde_json::json!({
            "error": { "code": -1000, "message": "already exists" }
        }));
        let facade = ServerBanFacade::new(Arc::new(Dispatcher::new(Box::new(transport))));
        let result = facade.add("gline", "*@1.2.3.4", "x", None, Some("1h")).await;
        assert_eq!(result.error.code, -1000);
        assert_eq!(result.error.message, "already exists");
    }
}
