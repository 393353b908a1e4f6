// CLASSIFICATION: COMMUNITY
// Filename: capability.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Guarded primitives.
//!
//! Most primitives wrapped by [`crate::Posix`] exist on every Unix host. The
//! few that do not are listed here; the facade checks its mask before
//! calling them and fails closed with [`PosixError::Unsupported`].

use bitflags::bitflags;
use log::trace;
use serde::Serialize;
use thiserror::Error;

use crate::errno::{PosixError, Result};

bitflags! {
    /// Set of optional primitives a facade instance may call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct Capabilities: u32 {
        const GETPGID = 1 << 0;
        const GETRLIMIT = 1 << 1;
        const INITGROUPS = 1 << 2;
    }
}

/// Returned when a capability list names something unknown.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown capability: {0}")]
pub struct UnknownCapability(pub String);

impl Capabilities {
    /// Capabilities provided by the compile target.
    pub fn detect() -> Self {
        let mut caps = Capabilities::GETPGID | Capabilities::GETRLIMIT;
        if crate::sys::HAS_INITGROUPS {
            caps |= Capabilities::INITGROUPS;
        }
        caps
    }

    /// Parse a comma separated list such as `"getpgid, initgroups"`.
    pub fn parse_list(list: &str) -> std::result::Result<Self, UnknownCapability> {
        let mut caps = Capabilities::empty();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let flag = Capabilities::from_name(&name.to_ascii_uppercase())
                .ok_or_else(|| UnknownCapability(name.to_string()))?;
            caps |= flag;
        }
        Ok(caps)
    }

    /// Fail closed unless `flag` is part of this set.
    pub(crate) fn require(self, flag: Capabilities, call: &'static str) -> Result<()> {
        if self.contains(flag) {
            Ok(())
        } else {
            trace!("{call} skipped: capability not available");
            Err(PosixError::Unsupported(call))
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        let caps = Capabilities::parse_list("GetPgid, initgroups").unwrap();
        assert_eq!(caps, Capabilities::GETPGID | Capabilities::INITGROUPS);
    }

    #[test]
    fn parse_empty_list() {
        assert_eq!(Capabilities::parse_list(" , ").unwrap(), Capabilities::empty());
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = Capabilities::parse_list("getpgid,fork").unwrap_err();
        assert_eq!(err, UnknownCapability("fork".into()));
    }

    #[test]
    fn require_fails_closed() {
        let caps = Capabilities::GETRLIMIT;
        assert!(caps.require(Capabilities::GETRLIMIT, "getrlimit").is_ok());
        assert_eq!(
            caps.require(Capabilities::GETPGID, "getpgid"),
            Err(PosixError::Unsupported("getpgid"))
        );
    }

    #[test]
    fn detect_always_offers_getpgid() {
        assert!(Capabilities::detect().contains(Capabilities::GETPGID));
    }
}
