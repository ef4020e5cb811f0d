// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! UNIX domain socket transport: write `<envelope>\r\n`, read 4 KiB at a time until a
//! chunk ends in `\n` (`spec.md` §4.2). A 10-second read timeout is enforced
//! (`spec.md` §5 "Timeouts").

use super::{SyncTransport, TransportFuture};
use crate::{validate, Error};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const READ_TIMEOUT: Duration = Duration::from_secs(10);

pub struct UnixSocketTransport {
    path: PathBuf,
}

impl UnixSocketTransport {
    pub fn new(path_to_socket_file: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path_to_socket_file.into();
        validate::validate_socket_path(&path)?;
        Ok(Self { path })
    }
}

impl SyncTransport for UnixSocketTransport {
    fn call<'a>(&'a self, payload: Vec<u8>) -> TransportFuture<'a, Result<Vec<u8>, String>> {
        Box::pin(async move {
            let mut stream = tokio::net::UnixStream::connect(&self.path)
                .await
                .map_err(|e| format!("connect to {} failed: {e}", self.path.display()))?;

            let mut framed = payload;
            framed.extend_from_slice(b"\r\n");
            stream.write_all(&framed).await.map_err(|e| format!("write failed: {e}"))?;

            let mut out = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let read = tokio::time::timeout(READ_TIMEOUT, stream.read(&mut chunk))
                    .await
                    .map_err(|_| "read timed out after 10s".to_string())?
                    .map_err(|e| format!("read failed: {e}"))?;
                if read == 0 {
                    break;
                }
                out.extend_from_slice(&chunk[..read]);
                if chunk[read - 1] == b'\n' {
                    break;
                }
            }
            Ok(out)
        })
    }
}
