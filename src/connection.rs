// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! [`Connection`] combines the dispatcher with every typed facade
//! (`spec.md` §4.5); [`LiveConnection`] wraps a live transport for subscriptions
//! (`spec.md` §4.4). Both are produced by the factories in [`crate::factory`].

use crate::dispatch::Dispatcher;
use crate::live::{self, LiveCallback, Subscription};
use crate::methods::channel::ChannelFacade;
use crate::methods::connthrottle::ConnThrottleFacade;
use crate::methods::log::LogFacade;
use crate::methods::message::MessageFacade;
use crate::methods::name_ban::NameBanFacade;
use crate::methods::rpc::RpcFacade;
use crate::methods::security_group::SecurityGroupFacade;
use crate::methods::server::ServerFacade;
use crate::methods::server_ban::ServerBanFacade;
use crate::methods::server_ban_exception::ServerBanExceptionFacade;
use crate::methods::spamfilter::SpamfilterFacade;
use crate::methods::stats::StatsFacade;
use crate::methods::user::UserFacade;
use crate::methods::whowas::WhowasFacade;
use crate::model::RpcError;
use crate::transport::{LiveTransport, SyncTransport};
use crate::Error;
use std::sync::Arc;

/// A synchronous connection: one transport, one [`Dispatcher`], and one facade per
/// namespace (`spec.md` §4.5). Not reentrant — callers sharing an instance across
/// actors must serialize access (`spec.md` §5).
pub struct Connection {
    dispatcher: Arc<Dispatcher>,
    pub user: UserFacade,
    pub channel: ChannelFacade,
    pub server: ServerFacade,
    pub server_ban: ServerBanFacade,
    pub server_ban_exception: ServerBanExceptionFacade,
    pub name_ban: NameBanFacade,
    pub spamfilter: SpamfilterFacade,
    pub rpc: RpcFacade,
    pub log: LogFacade,
    pub stats: StatsFacade,
    pub whowas: WhowasFacade,
    pub message: MessageFacade,
    pub connthrottle: ConnThrottleFacade,
    pub security_group: SecurityGroupFacade,
}

impl Connection {
    pub fn new(transport: Box<dyn SyncTransport>) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(transport));
        Self {
            user: UserFacade::new(dispatcher.clone()),
            channel: ChannelFacade::new(dispatcher.clone()),
            server: ServerFacade::new(dispatcher.clone()),
            server_ban: ServerBanFacade::new(dispatcher.clone()),
            server_ban_exception: ServerBanExceptionFacade::new(dispatcher.clone()),
            name_ban: NameBanFacade::new(dispatcher.clone()),
            spamfilter: SpamfilterFacade::new(dispatcher.clone()),
            rpc: RpcFacade::new(dispatcher.clone()),
            log: LogFacade::new(dispatcher.clone()),
            stats: StatsFacade::new(dispatcher.clone()),
            whowas: WhowasFacade::new(dispatcher.clone()),
            message: MessageFacade::new(dispatcher.clone()),
            connthrottle: ConnThrottleFacade::new(dispatcher.clone()),
            security_group: SecurityGroupFacade::new(dispatcher.clone()),
            dispatcher,
        }
    }

    /// The most recent [`RpcError`] observed on this connection (`spec.md` §3
    /// invariant iv, §5 "current-error accessor"). Racy if read from another actor
    /// concurrently with a new call, as documented in `spec.md` §5.
    pub fn last_error(&self) -> RpcError {
        self.dispatcher.last_error()
    }

    /// Calls `server.get()` and feeds the reported software version into the
    /// version gate, so subsequent calls to gated namespaces (`spec.md` §6) are
    /// checked locally before touching the network. Not required before use — the
    /// gate simply lets every gated call through until a version has been primed.
    pub async fn prime_version(&self) -> Result<(), Error> {
        let server = self.server.get(None).await;
        if !server.error.is_ok() {
            return Ok(());
        }
        let software = &server.server.as_ref().map(|s| s.server.features.software.clone()).unwrap_or_default();
        if software.is_empty() {
            return Ok(());
        }
        self.dispatcher.set_server_version(software).await
    }
}

/// A live (streaming) connection: one long-lived transport driving a subscription
/// loop (`spec.md` §4.4).
pub struct LiveConnection<T: LiveTransport + 'static> {
    transport: Arc<T>,
}

impl<T: LiveTransport + 'static> LiveConnection<T> {
    pub fn new(transport: T) -> Self {
        Self { transport: Arc::new(transport) }
    }

    /// Enters `Streaming`: see `spec.md` §4.4. `sources` defaults to
    /// `["!debug","all"]`. The returned [`Subscription`] is the only handle able to
    /// cancel the loop.
    pub fn subscribe(&self, sources: Option<Vec<String>>, callback: Arc<dyn LiveCallback>) -> Subscription {
        live::subscribe(self.transport.clone(), sources, callback)
    }
}
