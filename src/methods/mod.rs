// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! One facade module per server namespace (`spec.md` §4.5). Every method forwards
//! its parameters to the [`crate::dispatch::Dispatcher`], then decodes `result` into
//! a typed record through the helpers below, which enforce `spec.md` §4.5's uniform
//! failure shape: a sequence is empty on error, a single record is default-valued
//! with `error` populated.

pub mod channel;
pub mod connthrottle;
pub mod log;
pub mod message;
pub mod name_ban;
pub mod rpc;
pub mod security_group;
pub mod server;
pub mod server_ban;
pub mod server_ban_exception;
pub mod spamfilter;
pub mod stats;
pub mod user;
pub mod whowas;

use crate::model::{Decoded, RpcResult};
use serde::de::DeserializeOwned;

/// Decodes a single named field of `result` into `T`, returning a [`Decoded<T>`]
/// whose `error` mirrors the call's `error` on failure (`spec.md` §3 invariant iv,
/// §8 property 2).
pub(crate) fn decode_field<T: DeserializeOwned + Default>(response: &RpcResult, field: &str) -> Decoded<T> {
    if !response.error.is_ok() {
        return Decoded { value: T::default(), error: response.error.clone() };
    }
    match response.result.get(field) {
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(value) => Decoded { value, error: response.error.clone() },
            Err(e) => Decoded { value: T::default(), error: crate::model::RpcError::internal(format!("cannot decode {field}: {e}")) },
        },
        None => Decoded { value: T::default(), error: crate::model::RpcError::internal(format!("missing field {field}")) },
    }
}

/// Decodes the whole `result` object into `T` directly (used for methods whose
/// result isn't nested under one named key, e.g. `stats.get`, `connthrottle.status`).
pub(crate) fn decode_result<T: DeserializeOwned + Default>(response: &RpcResult) -> Decoded<T> {
    if !response.error.is_ok() {
        return Decoded { value: T::default(), error: response.error.clone() };
    }
    match serde_json::from_value(response.result.clone()) {
        Ok(value) => Decoded { value, error: response.error.clone() },
        Err(e) => Decoded { value: T::default(), error: crate::model::RpcError::internal(format!("cannot decode result: {e}")) },
    }
}

/// Decodes a named field of `result` as a list of `T`, returning an empty `Vec` on
/// any failure (transport, server, or decode) per `spec.md` §4.5, §8 property 1.
pub(crate) fn decode_list_field<T: DeserializeOwned>(response: &RpcResult, field: &str) -> Vec<T> {
    if !response.error.is_ok() {
        return Vec::new();
    }
    match response.result.get(field) {
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_default(),
        None => Vec::new(),
    }
}

/// Decodes the whole `result` array into a list of `T`, empty on any failure.
pub(crate) fn decode_result_list<T: DeserializeOwned>(response: &RpcResult) -> Vec<T> {
    if !response.error.is_ok() {
        return Vec::new();
    }
    serde_json::from_value(response.result.clone()).unwrap_or_default()
}

/// Decodes `result` as a bare boolean, defaulting to `false` on any failure (used by
/// e.g. `user.kill`, `channel.kick`, `server_ban.del`).
pub(crate) fn decode_bool(response: &RpcResult) -> Decoded<bool> {
    if !response.error.is_ok() {
        return Decoded { value: false, error: response.error.clone() };
    }
    let value = response.result.as_bool().unwrap_or(false);
    Decoded { value, error: response.error.clone() }
}
