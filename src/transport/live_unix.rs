// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Live UNIX stream transport: the server may deliver several JSON records in a
//! single read or split one record across multiple reads. The transport accumulates
//! bytes until a read ends in `\n`, then splits on `\n`, feeding each non-empty line
//! out one at a time and resuming accumulation (`spec.md` §4.4).
//!
//! [`FrameReader`] is generic over `AsyncRead` so the framing logic is unit-testable
//! against a `tokio::io::duplex` pipe without a real socket.

use super::{LiveTransport, TransportFuture};
use crate::{validate, Error};
use std::collections::VecDeque;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::unix::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::UnixStream;
use tokio::sync::Mutex;

pub(crate) struct FrameReader<R> {
    stream: R,
    buf: Vec<u8>,
    pending: VecDeque<Vec<u8>>,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    pub(crate) fn new(stream: R) -> Self {
        Self { stream, buf: Vec::new(), pending: VecDeque::new() }
    }

    pub(crate) async fn next_frame(&mut self) -> Option<Result<Vec<u8>, String>> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }

            let mut chunk = [0u8; 4096];
            let read = match self.stream.read(&mut chunk).await {
                Ok(0) => return None,
                Ok(n) => n,
                Err(e) => return Some(Err(format!("read failed: {e}"))),
            };
            self.buf.extend_from_slice(&chunk[..read]);

            if self.buf.last() == Some(&b'\n') {
                let complete = std::mem::take(&mut self.buf);
                for line in complete.split(|&b| b == b'\n') {
                    if !line.is_empty() {
                        self.pending.push_back(line.to_vec());
                    }
                }
            }
        }
    }
}

pub struct UnixLiveTransport {
    write_half: Mutex<OwnedWriteHalf>,
    reader: Mutex<FrameReader<OwnedReadHalf>>,
}

impl UnixLiveTransport {
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        validate::validate_socket_path(path)?;
        let stream = UnixStream::connect(path).await?;
        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            write_half: Mutex::new(write_half),
            reader: Mutex::new(FrameReader::new(read_half)),
        })
    }
}

impl LiveTransport for UnixLiveTransport {
    fn send<'a>(&'a self, payload: Vec<u8>) -> TransportFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut framed = payload;
            framed.extend_from_slice(b"\r\n");
            self.write_half.lock().await.write_all(&framed).await.map_err(|e| e.to_string())
        })
    }

    fn recv<'a>(&'a self) -> TransportFuture<'a, Option<Result<Vec<u8>, String>>> {
        Box::pin(async move { self.reader.lock().await.next_frame().await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn decodes_two_records_delivered_in_one_chunk() {
        let (mut writer, reader) = tokio::io::duplex(4096);
        let mut frames = FrameReader::new(reader);

        writer.write_all(b"{\"a\":1}\n{\"b\":2}\n").await.unwrap();
        drop(writer);

        let first = frames.next_frame().await.unwrap().unwrap();
        assert_eq!(first, b"{\"a\":1}");
        let second = frames.next_frame().await.unwrap().unwrap();
        assert_eq!(second, b"{\"b\":2}");
        assert!(frames.next_frame().await.is_none());
    }

    #[tokio::test]
    async fn decodes_two_records_delivered_one_byte_at_a_time() {
        let (mut writer, reader) = tokio::io::duplex(4096);
        let mut frames = FrameReader::new(reader);

        let payload = b"{\"a\":1}\n{\"b\":2}\n".to_vec();
        let handle = tokio::spawn(async move {
            for byte in payload {
                writer.write_all(&[byte]).await.unwrap();
            }
        });

        let first = frames.next_frame().await.unwrap().unwrap();
        assert_eq!(first, b"{\"a\":1}");
        let second = frames.next_frame().await.unwrap().unwrap();
        assert_eq!(second, b"{\"b\":2}");

        handle.await.unwrap();
    }

    #[tokio::test]
    async fn a_record_split_across_reads_is_reassembled() {
        let (mut writer, reader) = tokio::io::duplex(4096);
        let mut frames = FrameReader::new(reader);

        let handle = tokio::spawn(async move {
            writer.write_all(b"{\"a\":").await.unwrap();
            writer.write_all(b"1}\n").await.unwrap();
        });

        let first = frames.next_frame().await.unwrap().unwrap();
        assert_eq!(first, b"{\"a\":1}");
        handle.await.unwrap();
    }
}
