// CLASSIFICATION: COMMUNITY
// Filename: types.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Value types surfaced by the facade.
//!
//! Everything here is an immutable snapshot copied out of OS-owned memory.

use std::collections::BTreeMap;

use bitflags::bitflags;
use serde::{Serialize, Serializer};

pub type Uid = libc::uid_t;
pub type Gid = libc::gid_t;
pub type Pid = libc::pid_t;
pub type Mode = libc::mode_t;
pub type Signal = libc::c_int;
pub type Ticks = libc::clock_t;

bitflags! {
    /// Permission mask for [`crate::Posix::access`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccessMode: libc::c_int {
        /// Existence only. Its value is zero, so it combines with nothing.
        const EXISTS = libc::F_OK;
        const READ = libc::R_OK;
        const WRITE = libc::W_OK;
        const EXECUTE = libc::X_OK;
    }
}

impl AccessMode {
    /// Parse a short mode string: any of `r`, `w`, `x`, `f`.
    pub fn from_letters(letters: &str) -> Option<Self> {
        let mut mode = AccessMode::EXISTS;
        for c in letters.chars() {
            mode |= match c {
                'r' => AccessMode::READ,
                'w' => AccessMode::WRITE,
                'x' => AccessMode::EXECUTE,
                'f' => AccessMode::EXISTS,
                _ => return None,
            };
        }
        Some(mode)
    }
}

/// File type bits accepted in the `mode` argument of [`crate::Posix::mknod`].
pub mod node {
    use super::Mode;

    pub const TYPE_MASK: Mode = libc::S_IFMT;
    pub const REGULAR: Mode = libc::S_IFREG;
    pub const CHARACTER: Mode = libc::S_IFCHR;
    pub const BLOCK: Mode = libc::S_IFBLK;
    pub const FIFO: Mode = libc::S_IFIFO;
    pub const SOCKET: Mode = libc::S_IFSOCK;

    /// True for the two node types that carry a device number.
    pub fn is_device(mode: Mode) -> bool {
        matches!(mode & TYPE_MASK, CHARACTER | BLOCK)
    }
}

/// Entry from the user database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passwd {
    pub name: String,
    pub passwd: String,
    pub uid: Uid,
    pub gid: Gid,
    pub gecos: String,
    pub dir: String,
    pub shell: String,
}

/// Entry from the group database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub name: String,
    pub passwd: String,
    pub gid: Gid,
    pub members: Vec<String>,
}

/// One side of a resource limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Unlimited,
    Finite(u64),
}

impl Bound {
    pub fn finite(self) -> Option<u64> {
        match self {
            Bound::Unlimited => None,
            Bound::Finite(n) => Some(n),
        }
    }
}

impl Serialize for Bound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Bound::Unlimited => serializer.serialize_str("unlimited"),
            Bound::Finite(n) => serializer.serialize_u64(*n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Limit {
    pub soft: Bound,
    pub hard: Bound,
}

/// Soft and hard limits keyed by resource name (`openfiles`, `stack`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResourceLimits(BTreeMap<&'static str, Limit>);

impl ResourceLimits {
    pub(crate) fn insert(&mut self, name: &'static str, limit: Limit) {
        self.0.insert(name, limit);
    }

    pub fn get(&self, name: &str) -> Option<&Limit> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Limit)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// CPU accounting for the process and its reaped children, in clock ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessTimes {
    pub ticks: Ticks,
    pub utime: Ticks,
    pub stime: Ticks,
    pub cutime: Ticks,
    pub cstime: Ticks,
}

/// Host identification as reported by `uname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Utsname {
    pub sysname: String,
    pub nodename: String,
    pub release: String,
    pub version: String,
    pub machine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domainname: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_letters() {
        assert_eq!(AccessMode::from_letters(""), Some(AccessMode::EXISTS));
        assert_eq!(
            AccessMode::from_letters("rw"),
            Some(AccessMode::READ | AccessMode::WRITE)
        );
        assert_eq!(AccessMode::from_letters("rq"), None);
    }

    #[test]
    fn device_types() {
        assert!(node::is_device(node::CHARACTER | 0o600));
        assert!(node::is_device(node::BLOCK));
        assert!(!node::is_device(node::FIFO | 0o644));
        assert!(!node::is_device(node::REGULAR));
    }

    #[test]
    fn bounds_serialize_like_the_host_tools() {
        let limit = Limit { soft: Bound::Finite(1024), hard: Bound::Unlimited };
        let json = serde_json::to_string(&limit).unwrap();
        assert_eq!(json, r#"{"soft":1024,"hard":"unlimited"}"#);
    }
}
