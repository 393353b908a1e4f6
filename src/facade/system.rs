// CLASSIFICATION: COMMUNITY
// Filename: system.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::ffi::CStr;
use std::mem;

use super::Posix;
use crate::capability::Capabilities;
use crate::errno::Result;
use crate::sys;
use crate::types::{ProcessTimes, ResourceLimits, Ticks, Utsname};

const TIMES_FAILED: Ticks = -1i64 as Ticks;

fn field(raw: &[libc::c_char]) -> String {
    unsafe { CStr::from_ptr(raw.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

impl Posix {
    /// Soft and hard limits for every resource the host defines.
    pub fn getrlimit(&self) -> Result<ResourceLimits> {
        self.caps.require(Capabilities::GETRLIMIT, "getrlimit")?;
        sys::getrlimit()
    }

    pub fn times(&self) -> Result<ProcessTimes> {
        let mut buf: libc::tms = unsafe { mem::zeroed() };
        let ticks = unsafe { libc::times(&mut buf) };
        if ticks == TIMES_FAILED {
            return Err(sys::last_error("times"));
        }
        Ok(ProcessTimes {
            ticks,
            utime: buf.tms_utime,
            stime: buf.tms_stime,
            cutime: buf.tms_cutime,
            cstime: buf.tms_cstime,
        })
    }

    pub fn uname(&self) -> Result<Utsname> {
        let mut buf: libc::utsname = unsafe { mem::zeroed() };
        sys::check("uname", unsafe { libc::uname(&mut buf) })?;
        #[cfg(target_os = "linux")]
        let domainname = Some(field(&buf.domainname));
        #[cfg(not(target_os = "linux"))]
        let domainname = None;
        Ok(Utsname {
            sysname: field(&buf.sysname),
            nodename: field(&buf.nodename),
            release: field(&buf.release),
            version: field(&buf.version),
            machine: field(&buf.machine),
            domainname,
        })
    }
}
