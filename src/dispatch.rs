// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! The synchronous request/response dispatcher (`spec.md` §4.3): version gate, build
//! envelope, call the transport, decode, remember the last error.

use crate::model::{RpcError, RpcResult};
use crate::request::RpcRequest;
use crate::transport::SyncTransport;
use crate::version::VersionGate;
use std::sync::Mutex;
use tokio::sync::RwLock;

/// Owns one [`SyncTransport`] and the [`VersionGate`] learned from `server.get`.
pub struct Dispatcher {
    transport: Box<dyn SyncTransport>,
    version_gate: RwLock<VersionGate>,
    last_error: Mutex<RpcError>,
}

impl Dispatcher {
    pub fn new(transport: Box<dyn SyncTransport>) -> Self {
        Self {
            transport,
            version_gate: RwLock::new(VersionGate::default()),
            last_error: Mutex::new(RpcError::success()),
        }
    }

    /// Records a server version string observed from a `server.get` reply, enabling
    /// the per-namespace minimum-version checks in [`Dispatcher::query`].
    pub async fn set_server_version(&self, raw: &str) -> Result<(), crate::Error> {
        let version = crate::version::ServerVersion::parse(raw)?;
        self.version_gate.write().await.set_version(version);
        Ok(())
    }

    /// The last [`RpcError`] observed by any call through this dispatcher, updated on
    /// every `query`, success or failure (`spec.md` §4.3 "always record the last
    /// error").
    pub fn last_error(&self) -> RpcError {
        self.last_error.lock().unwrap().clone()
    }

    fn record_error(&self, error: RpcError) {
        *self.last_error.lock().unwrap() = error;
    }

    /// Runs one request/response round trip, implementing `spec.md` §4.3's algorithm:
    ///
    /// 1. Reject the call locally if the method needs a server version newer than the
    ///    one already observed.
    /// 2. Build and serialize the envelope.
    /// 3. Call the transport; a transport failure becomes a `-1` [`RpcError`].
    /// 4. An empty reply becomes a `-2` [`RpcError`].
    /// 5. A reply that fails to decode as JSON becomes a `-3` [`RpcError`].
    /// 6. The decoded (or synthesized) result's error is always recorded as the last
    ///    error, and a non-success error is logged at `ERROR`.
    pub async fn query(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
        id: Option<i64>,
    ) -> RpcResult {
        if let Err(message) = self.version_gate.read().await.check(method) {
            let result = RpcResult { method: Some(method.to_string()), error: RpcError::internal(message), ..Default::default() };
            self.record_error(result.error.clone());
            tracing::error!(target: "unrealircd_rpc", method, message = %result.error.message, "version gate rejected call");
            return result;
        }

        let request = RpcRequest::new(method, params, id);
        let bytes = match request.to_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                let result = RpcResult {
                    method: Some(method.to_string()),
                    id: request.id,
                    error: RpcError::internal(format!("cannot encode request: {e}")),
                    ..Default::default()
                };
                self.record_error(result.error.clone());
                return result;
            }
        };

        let result = match self.transport.call(bytes).await {
            Err(message) => {
                tracing::error!(target: "unrealircd_rpc", method, %message, "transport call failed");
                RpcResult { method: Some(method.to_string()), id: request.id, error: RpcError::transport(message), ..Default::default() }
            }
            Ok(raw) if raw.is_empty() => {
                tracing::error!(target: "unrealircd_rpc", method, "empty response from transport");
                RpcResult { method: Some(method.to_string()), id: request.id, error: RpcError::empty_response(), ..Default::default() }
            }
            Ok(raw) => match serde_json::from_slice::<RpcResult>(&raw) {
                Ok(decoded) => decoded,
                Err(e) => {
                    tracing::error!(target: "unrealircd_rpc", method, error = %e, "failed to decode response");
                    RpcResult {
                        method: Some(method.to_string()),
                        id: request.id,
                        error: RpcError::internal(format!("cannot decode response: {e}")),
                        ..Default::default()
                    }
                }
            },
        };

        self.record_error(result.error.clone());
        if !result.error.is_ok() {
            tracing::error!(target: "unrealircd_rpc", method, code = result.error.code, message = %result.error.message, "rpc call returned an error");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn successful_call_is_decoded_and_recorded() {
        let transport = MockTransport::always_reply(serde_json::json!({
            "jsonrpc": "2.0", "method": "user.list", "id": 1, "result": []
        }));
        let dispatcher = Dispatcher::new(Box::new(transport));
        let result = dispatcher.query("user.list", None, Some(1)).await;
        assert!(result.error.is_ok());
        assert_eq!(dispatcher.last_error().code, 0);
    }

    #[tokio::test]
    async fn transport_failure_becomes_code_minus_one() {
        let transport = MockTransport::new(|_payload| Err("connection refused".to_string()));
        let dispatcher = Dispatcher::new(Box::new(transport));
        let result = dispatcher.query("user.list", None, None).await;
        assert_eq!(result.error.code, -1);
        assert_eq!(dispatcher.last_error().code, -1);
    }

    #[tokio::test]
    async fn empty_reply_becomes_code_minus_two() {
        let transport = MockTransport::new(|_payload| Ok(Vec::new()));
        let dispatcher = Dispatcher::new(Box::new(transport));
        let result = dispatcher.query("user.list", None, None).await;
        assert_eq!(result.error.code, -2);
    }

    #[tokio::test]
    async fn garbage_reply_becomes_code_minus_three() {
        let transport = MockTransport::new(|_payload| Ok(b"not json".to_vec()));
        let dispatcher = Dispatcher::new(Box::new(transport));
        let result = dispatcher.query("user.list", None, None).await;
        assert_eq!(result.error.code, -3);
    }

    #[tokio::test]
    async fn version_gate_blocks_unsupported_methods_locally() {
        let transport = MockTransport::always_reply(serde_json::json!({"result": true}));
        let dispatcher = Dispatcher::new(Box::new(transport));
        dispatcher.set_server_version("UnrealIRCd-6.1.0").await.unwrap();
        let result = dispatcher.query("message.send", None, None).await;
        assert_eq!(result.error.code, -3);
        assert!(result.error.message.contains("message.send"));
    }
}
