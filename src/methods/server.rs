// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `server.*` facade (`spec.md` §4.5).

use super::{decode_bool, decode_field};
use crate::dispatch::Dispatcher;
use crate::model::{Client, Decoded};
use std::sync::Arc;

pub struct ServerFacade {
    dispatcher: Arc<Dispatcher>,
}

impl ServerFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Vec<Client> {
        let response = self.dispatcher.query("server.list", None, None).await;
        super::decode_list_field(&response, "list")
    }

    /// The primary route through which the connected server's version is learned;
    /// callers should feed `features.software` of the decoded record to
    /// [`Dispatcher::set_server_version`] before invoking version-gated methods.
    pub async fn get(&self, server_name: Option<&str>) -> Decoded<Client> {
        let params = serde_json::json!({ "server": server_name.unwrap_or("") });
        let response = self.dispatcher.query("server.get", Some(params), None).await;
        decode_field(&response, "client")
    }

    /// `spec.md` §9 notes some topologies return a bare boolean instead of a nested
    /// object for `rehash`; either shape is accepted, falling back to the raw bool.
    pub async fn rehash(&self, server_name: Option<&str>) -> Decoded<bool> {
        let params = serde_json::json!({ "server": server_name.unwrap_or("") });
        let response = self.dispatcher.query("server.rehash", Some(params), None).await;
        if response.result.is_object() {
            let field = decode_field::<bool>(&response, "rehashing");
            if field.error.is_ok() {
                return field;
            }
        }
        decode_bool(&response)
    }

    pub async fn connect(&self, link_block_name: &str) -> Decoded<bool> {
        let params = serde_json::json!({ "link_block_name": link_block_name });
        let response = self.dispatcher.query("server.connect", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn disconnect(&self, server_name: &str) -> Decoded<bool> {
        let params = serde_json::json!({ "server": server_name });
        let response = self.dispatcher.query("server.disconnect", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn module_list(&self) -> Vec<String> {
        let response = self.dispatcher.query("server.module_list", None, None).await;
        super::decode_result_list(&response)
    }
}
