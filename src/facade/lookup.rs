// CLASSIFICATION: COMMUNITY
// Filename: lookup.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! User and group database lookups.

use super::Posix;
use crate::errno::Result;
use crate::sys;
use crate::types::{Gid, Group, Passwd, Uid};

impl Posix {
    /// User database entry for `username`. A miss is `NotFound`.
    pub fn getpwnam(&self, username: &str) -> Result<Passwd> {
        let name = sys::c_string("getpwnam", username.as_bytes())?;
        sys::getpwnam(&name, self.lookup_buffer)
    }

    pub fn getpwuid(&self, uid: Uid) -> Result<Passwd> {
        sys::getpwuid(uid, self.lookup_buffer)
    }

    /// Group database entry for `name`. A miss is `NotFound`.
    pub fn getgrnam(&self, name: &str) -> Result<Group> {
        let name = sys::c_string("getgrnam", name.as_bytes())?;
        sys::getgrnam(&name, self.lookup_buffer)
    }

    pub fn getgrgid(&self, gid: Gid) -> Result<Group> {
        sys::getgrgid(gid, self.lookup_buffer)
    }

    /// Name of the user logged in on the controlling terminal.
    ///
    /// Fails when there is no terminal or no utmp record for it, which is
    /// normal for daemons and containers.
    pub fn getlogin(&self) -> Result<String> {
        sys::login_name()
    }
}
