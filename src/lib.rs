// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! A client library for the UnrealIRCd JSON-RPC interface: administrative calls
//! (users, channels, bans, spamfilters, server links, statistics) over HTTPS, a TLS
//! raw socket, or a UNIX-domain stream, plus a live log-streaming subscription over
//! WebSocket or a UNIX stream socket.
//!
//! ```no_run
//! # async fn example() -> Result<(), unrealircd_rpc::Error> {
//! use unrealircd_rpc::{connection_factory, SetupParams};
//!
//! let conn = connection_factory(
//!     "http",
//!     SetupParams::Https {
//!         url: "https://irc.example.org:8600/api".into(),
//!         username: "adminrpc".into(),
//!         password: "secret".into(),
//!     },
//! )
//! .await?;
//!
//! let users = conn.user.list(None).await;
//! println!("{} users online", users.len());
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod dispatch;
mod error;
pub mod factory;
pub mod live;
pub mod methods;
pub mod model;
pub mod request;
pub mod transport;
mod validate;
pub mod version;

pub mod logging;

pub use connection::{Connection, LiveConnection};
pub use error::Error;
pub use factory::{connection_factory, LiveSetupParams, SetupParams};
#[cfg(feature = "live")]
pub use factory::{live_connection_factory, LiveConnectionHandle};
pub use live::{async_callback, sync_callback, LiveCallback, Subscription};
pub use model::{Decoded, LiveRpcResult, RpcError, RpcResult};
pub use version::ServerVersion;
