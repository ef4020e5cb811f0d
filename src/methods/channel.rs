// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! `channel.*` facade (`spec.md` §4.5).

use super::{decode_bool, decode_field};
use crate::dispatch::Dispatcher;
use crate::model::{Channel, Decoded};
use std::sync::Arc;

pub struct ChannelFacade {
    dispatcher: Arc<Dispatcher>,
}

impl ChannelFacade {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Defaults `object_detail_level` to `1` (`spec.md` §4.5).
    pub async fn list(&self, object_detail_level: Option<u8>) -> Vec<Channel> {
        let params = serde_json::json!({ "object_detail_level": object_detail_level.unwrap_or(1) });
        let response = self.dispatcher.query("channel.list", Some(params), None).await;
        super::decode_list_field(&response, "list")
    }

    /// Defaults `object_detail_level` to `3` (`spec.md` §4.5), the level at which
    /// member sub-records are populated.
    pub async fn get(&self, channel: &str, object_detail_level: Option<u8>) -> Decoded<Channel> {
        let params = serde_json::json!({ "channel": channel, "object_detail_level": object_detail_level.unwrap_or(3) });
        let response = self.dispatcher.query("channel.get", Some(params), None).await;
        decode_field(&response, "channel")
    }

    pub async fn set_mode(&self, channel: &str, modes: &str, parameters: Option<&str>) -> Decoded<bool> {
        let params = serde_json::json!({ "channel": channel, "modes": modes, "parameters": parameters.unwrap_or("") });
        let response = self.dispatcher.query("channel.set_mode", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn set_topic(&self, channel: &str, topic: &str, set_by: Option<&str>) -> Decoded<bool> {
        let params = serde_json::json!({ "channel": channel, "topic": topic, "set_by": set_by.unwrap_or("") });
        let response = self.dispatcher.query("channel.set_topic", Some(params), None).await;
        decode_bool(&response)
    }

    pub async fn kick(&self, channel: &str, nick: &str, reason: Option<&str>) -> Decoded<bool> {
        let params = serde_json::json!({ "channel": channel, "nick": nick, "reason": reason.unwrap_or("") });
        let response = self.dispatcher.query("channel.kick", Some(params), None).await;
        decode_bool(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn list_decodes_two_channels_with_empty_members() {
        let transport = MockTransport::always_reply(serde_json::json!({
            "result": { "list": [
                { "name": "#a", "num_users": 3 },
                { "name": "#b", "num_users": 5 },
            ] }
        }));
        let facade = ChannelFacade::new(Arc::new(Dispatcher::new(Box::new(transport))));
        let channels = facade.list(Some(1)).await;
        assert_eq!(channels.len(), 2);
        assert!(channels[0].members.is_empty());
        assert!(channels[0].bans.is_empty());
    }
}
