// CLASSIFICATION: COMMUNITY
// Filename: identity.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Credential getters and setters.

use std::ptr;

use super::Posix;
use crate::capability::Capabilities;
use crate::errno::Result;
use crate::sys;
use crate::types::{Gid, Uid};

impl Posix {
    pub fn getuid(&self) -> Uid {
        unsafe { libc::getuid() }
    }

    pub fn geteuid(&self) -> Uid {
        unsafe { libc::geteuid() }
    }

    pub fn getgid(&self) -> Gid {
        unsafe { libc::getgid() }
    }

    pub fn getegid(&self) -> Gid {
        unsafe { libc::getegid() }
    }

    /// Supplementary group IDs of the calling process.
    pub fn getgroups(&self) -> Result<Vec<Gid>> {
        let count = sys::check("getgroups", unsafe { libc::getgroups(0, ptr::null_mut()) })?;
        let mut groups: Vec<Gid> = vec![0; count as usize];
        let filled = sys::check("getgroups", unsafe {
            libc::getgroups(count, groups.as_mut_ptr())
        })?;
        groups.truncate(filled as usize);
        Ok(groups)
    }

    /// Requires privilege unless `uid` is the real or saved user ID.
    pub fn setuid(&self, uid: Uid) -> Result<()> {
        sys::check("setuid", unsafe { libc::setuid(uid) }).map(drop)
    }

    pub fn setgid(&self, gid: Gid) -> Result<()> {
        sys::check("setgid", unsafe { libc::setgid(gid) }).map(drop)
    }

    pub fn seteuid(&self, uid: Uid) -> Result<()> {
        sys::check("seteuid", unsafe { libc::seteuid(uid) }).map(drop)
    }

    pub fn setegid(&self, gid: Gid) -> Result<()> {
        sys::check("setegid", unsafe { libc::setegid(gid) }).map(drop)
    }

    /// Load the group access list for `name` from the group database, plus
    /// `base_group_id`.
    pub fn initgroups(&self, name: &str, base_group_id: Gid) -> Result<()> {
        self.caps.require(Capabilities::INITGROUPS, "initgroups")?;
        let user = sys::c_string("initgroups", name.as_bytes())?;
        sys::initgroups(&user, base_group_id)
    }
}
