// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Produces the JSON-RPC 2.0 request envelope (`spec.md` §4.1). No batching.

use serde::Serialize;
use serde_json::Value;

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Value,
    pub id: i64,
}

impl RpcRequest {
    /// Builds a new envelope. `params` defaults to an empty object; `id` defaults to
    /// [`default_id`] when not given explicitly.
    pub fn new(method: impl Into<String>, params: Option<Value>, id: Option<i64>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params: params.unwrap_or_else(|| Value::Object(Default::default())),
            id: id.unwrap_or_else(default_id),
        }
    }

    /// Serializes the envelope to compact JSON with no trailing whitespace.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// `unix_seconds() + random_in(1..6000)`, matching the reference implementation's
/// id scheme. There's no pipelining on any transport, so this exists for readability
/// in logs and for servers that echo it back, not for local correlation.
pub fn default_id() -> i64 {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    let jitter = rand::Rng::gen_range(&mut rand::thread_rng(), 1..6000);
    secs + jitter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_params_to_empty_object_and_id_is_positive() {
        let req = RpcRequest::new("user.list", None, None);
        assert_eq!(req.jsonrpc, "2.0");
        assert_eq!(req.method, "user.list");
        assert_eq!(req.params, serde_json::json!({}));
        assert!(req.id > 0);
    }

    #[test]
    fn serializes_compactly() {
        let req = RpcRequest::new("user.get", Some(serde_json::json!({"nick": "adator"})), Some(1));
        let bytes = req.to_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            r#"{"jsonrpc":"2.0","method":"user.get","params":{"nick":"adator"},"id":1}"#
        );
    }
}
