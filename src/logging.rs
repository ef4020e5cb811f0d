// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! A named, non-propagating logger with a configurable level and a single stream
//! handler (`spec.md` §2 row 14, §9 "Global state").
//!
//! Every log line this crate emits carries `target: "unrealircd_rpc"` so a host
//! application can filter it independently of its own logging, the Rust analogue of
//! a named, non-propagating Python logger. `tracing` allows exactly one global
//! subscriber per process, so "remove any prior handlers for the same logger name
//! before adding its own" becomes: reuse the installed filter handle and update its
//! level in place on a second call, rather than attempting to reinstall a subscriber.

use std::sync::OnceLock;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, reload};

type ReloadHandle = reload::Handle<LevelFilter, tracing_subscriber::Registry>;

static FILTER_HANDLE: OnceLock<ReloadHandle> = OnceLock::new();

/// A handle to the installed logger. Dropping it does not tear down logging; it's
/// returned so callers can confirm setup succeeded and, if they want, adjust the
/// level later via [`set_level`].
#[derive(Debug, Clone, Copy)]
pub struct LoggerHandle;

/// Installs (or, on a second call, reconfigures) this crate's stream logger at the
/// given level. Logs go to stderr, one line per event, matching the default stream
/// handler described in `spec.md` §2.
pub fn init(level: tracing::Level) -> LoggerHandle {
    let filter = LevelFilter::from_level(level);

    if let Some(handle) = FILTER_HANDLE.get() {
        let _ = handle.modify(|f| *f = filter);
        return LoggerHandle;
    }

    let (filtered_layer, handle) = reload::Layer::new(filter);
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    let subscriber = tracing_subscriber::Registry::default().with(filtered_layer).with(fmt_layer);

    // If another part of the process already installed a global subscriber (e.g. a
    // host application's own tracing setup), we don't fight it: logging just flows
    // through that subscriber instead, unfiltered by our handle.
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        let _ = FILTER_HANDLE.set(handle);
    }

    LoggerHandle
}

/// Updates the level of a previously [`init`]ialized logger. No-op if [`init`] was
/// never called (or lost the race with a host-installed subscriber).
pub fn set_level(level: tracing::Level) {
    if let Some(handle) = FILTER_HANDLE.get() {
        let _ = handle.modify(|f| *f = LevelFilter::from_level(level));
    }
}

/// Logs a setup failure that leaves the connection unusable. `tracing` has no
/// built-in `CRITICAL` level; `fatal = true` is the idiomatic substitute, matched on
/// by subscribers that want Python-`logging`-style severity.
pub fn log_fatal_setup_error(error: &crate::Error) {
    tracing::error!(target: "unrealircd_rpc", fatal = true, %error, "connection setup failed");
}
