// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! URL and UNIX socket path validation (`spec.md` §3, §6 "URL grammar").

use crate::Error;

/// Parses `^https?://([A-Za-z0-9.\-]+):(\d+)/(.+)$`, returning `(host, endpoint, port)`.
///
/// Any other shape is an [`Error::InvalidUrl`].
pub fn parse_https_url(url: &str) -> Result<(String, String, u16), Error> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;

    let (hostport, endpoint) = rest
        .split_once('/')
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;

    if endpoint.is_empty() {
        return Err(Error::InvalidUrl(url.to_string()));
    }

    let (host, port) = hostport
        .split_once(':')
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;

    if host.is_empty() || !host.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(Error::InvalidUrl(url.to_string()));
    }

    if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidUrl(url.to_string()));
    }
    let port: u16 = port.parse().map_err(|_| Error::InvalidUrl(url.to_string()))?;

    Ok((host.to_string(), endpoint.to_string(), port))
}

/// Verifies a UNIX socket path exists on disk.
pub fn validate_socket_path(path: &std::path::Path) -> Result<(), Error> {
    if !path.exists() {
        return Err(Error::SocketNotFound(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_url() {
        let (host, endpoint, port) = parse_https_url("https://h.example:8600/api").unwrap();
        assert_eq!(host, "h.example");
        assert_eq!(endpoint, "api");
        assert_eq!(port, 8600);
    }

    #[test]
    fn accepts_plain_http_too() {
        let (host, endpoint, port) = parse_https_url("http://localhost:8000/api").unwrap();
        assert_eq!(host, "localhost");
        assert_eq!(endpoint, "api");
        assert_eq!(port, 8000);
    }

    #[test]
    fn rejects_missing_scheme() {
        assert!(parse_https_url("h.example:8600/api").is_err());
    }

    #[test]
    fn rejects_missing_port() {
        assert!(parse_https_url("https://h.example/api").is_err());
    }

    #[test]
    fn rejects_missing_path() {
        assert!(parse_https_url("https://h.example:8600").is_err());
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(parse_https_url("https://h.example:abc/api").is_err());
    }

    #[test]
    fn socket_path_must_exist() {
        let missing = std::path::Path::new("/nonexistent/unrealircd.sock");
        assert!(validate_socket_path(missing).is_err());
    }

    #[test]
    fn socket_path_accepts_an_existing_file() {
        let file = std::env::temp_dir().join("unrealircd-rpc-validate-test.sock");
        std::fs::write(&file, b"").unwrap();
        assert!(validate_socket_path(&file).is_ok());
        let _ = std::fs::remove_file(&file);
    }
}
