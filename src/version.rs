// Copyright 2019-2026 Parity Technologies (UK) Ltd.
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! After setup, the server's software version is parsed and compared against a
//! per-namespace minimum before gated methods are dispatched (`spec.md` §4.3, §6).

use crate::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ServerVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Parses `"UnrealIRCd-X.Y.Z"`.
    pub fn parse(software: &str) -> Result<Self, Error> {
        let version = software
            .strip_prefix("UnrealIRCd-")
            .ok_or_else(|| Error::VersionParse(software.to_string()))?;
        let mut parts = version.split('.');
        let err = || Error::VersionParse(software.to_string());
        let major = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let minor = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let patch = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        Ok(Self { major, minor, patch })
    }
}

impl std::fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

const MIN_MESSAGE: ServerVersion = ServerVersion::new(6, 2, 2);
const MIN_LOG_SUBSCRIBE: ServerVersion = ServerVersion::new(6, 1, 8);
const MIN_WHOWAS: ServerVersion = ServerVersion::new(6, 1, 0);

fn minimum_for(method: &str) -> Option<ServerVersion> {
    match method {
        m if m.starts_with("message.") => Some(MIN_MESSAGE),
        m if m.starts_with("connthrottle.") => Some(MIN_MESSAGE),
        m if m.starts_with("security_group.") => Some(MIN_MESSAGE),
        "log.subscribe" | "log.send" => Some(MIN_LOG_SUBSCRIBE),
        m if m.starts_with("whowas.") => Some(MIN_WHOWAS),
        "rpc.set_issuer" | "rpc.add_timer" | "rpc.del_timer" => Some(MIN_WHOWAS),
        _ => None,
    }
}

/// Tracks the connected server's version and answers whether a gated method is
/// allowed to be dispatched yet.
#[derive(Debug, Default)]
pub struct VersionGate {
    version: Option<ServerVersion>,
}

impl VersionGate {
    pub fn set_version(&mut self, version: ServerVersion) {
        self.version = Some(version);
    }

    pub fn version(&self) -> Option<ServerVersion> {
        self.version
    }

    /// `Err(message)` if `method` is gated and the connected server is too old.
    /// If no server version has been observed yet, gated methods are allowed through
    /// (callers that skip `server.get()` during setup get the server's own error).
    pub fn check(&self, method: &str) -> Result<(), String> {
        let Some(minimum) = minimum_for(method) else {
            return Ok(());
        };
        let Some(current) = self.version else {
            return Ok(());
        };
        if current < minimum {
            Err(format!(
                "object {method} not available for this ircd version; must be {minimum} or higher"
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_version_string() {
        let v = ServerVersion::parse("UnrealIRCd-6.1.8").unwrap();
        assert_eq!(v, ServerVersion::new(6, 1, 8));
    }

    #[test]
    fn rejects_a_malformed_version_string() {
        assert!(ServerVersion::parse("6.1.8").is_err());
        assert!(ServerVersion::parse("UnrealIRCd-6.1").is_err());
    }

    #[test]
    fn gates_message_methods_below_6_2_2() {
        let mut gate = VersionGate::default();
        gate.set_version(ServerVersion::new(6, 0, 0));
        assert!(gate.check("message.send_privmsg").is_err());

        gate.set_version(ServerVersion::new(6, 2, 2));
        assert!(gate.check("message.send_privmsg").is_ok());
    }

    #[test]
    fn ungated_methods_are_always_allowed() {
        let gate = VersionGate::default();
        assert!(gate.check("user.get").is_ok());
    }
}
