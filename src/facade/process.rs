// CLASSIFICATION: COMMUNITY
// Filename: process.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Process, process group and session primitives, plus `kill`.

use super::Posix;
use crate::capability::Capabilities;
use crate::errno::Result;
use crate::sys;
use crate::types::{Pid, Signal};

impl Posix {
    pub fn getpid(&self) -> Pid {
        unsafe { libc::getpid() }
    }

    pub fn getppid(&self) -> Pid {
        unsafe { libc::getppid() }
    }

    pub fn getpgrp(&self) -> Pid {
        unsafe { libc::getpgrp() }
    }

    /// Process group of `pid` (0 for the caller).
    ///
    /// Guarded: with `GETPGID` masked this fails with `Unsupported` and the
    /// primitive is never invoked.
    pub fn getpgid(&self, pid: Pid) -> Result<Pid> {
        self.caps.require(Capabilities::GETPGID, "getpgid")?;
        sys::check("getpgid", unsafe { libc::getpgid(pid) })
    }

    /// Session ID of `pid` (0 for the caller).
    pub fn getsid(&self, pid: Pid) -> Result<Pid> {
        sys::check("getsid", unsafe { libc::getsid(pid) })
    }

    pub fn setpgid(&self, pid: Pid, pgid: Pid) -> Result<()> {
        sys::check("setpgid", unsafe { libc::setpgid(pid, pgid) }).map(drop)
    }

    /// Make the caller a session leader; returns the new session ID.
    pub fn setsid(&self) -> Result<Pid> {
        sys::check("setsid", unsafe { libc::setsid() })
    }

    /// Send `sig` to `pid`. Signal 0 only probes for existence and permission.
    pub fn kill(&self, pid: Pid, sig: Signal) -> Result<()> {
        sys::check("kill", unsafe { libc::kill(pid, sig) }).map(drop)
    }
}
