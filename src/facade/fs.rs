// CLASSIFICATION: COMMUNITY
// Filename: fs.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Path accessibility, working directory and special-node creation.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use libc::c_char;
use log::debug;

use super::Posix;
use crate::errno::Result;
use crate::sys;
use crate::types::{node, AccessMode, Mode};

impl Posix {
    /// Whether the real user may access `file` with `mode`.
    ///
    /// `false` covers denial, nonexistence and unrepresentable paths;
    /// `errno()` tells them apart.
    pub fn access<P: AsRef<Path>>(&self, file: P, mode: AccessMode) -> bool {
        // c_path leaves EINVAL in the OS error state on an interior NUL.
        let Ok(path) = sys::c_path("access", file.as_ref()) else {
            return false;
        };
        let rc = unsafe { libc::access(path.as_ptr(), mode.bits()) };
        if rc != 0 {
            debug!("access {:?} {:?} denied: {}", file.as_ref(), mode, self.errno());
        }
        rc == 0
    }

    pub fn getcwd(&self) -> Result<PathBuf> {
        let mut buf = vec![0 as c_char; libc::PATH_MAX as usize + 1];
        let ptr = unsafe { libc::getcwd(buf.as_mut_ptr(), buf.len()) };
        if ptr.is_null() {
            return Err(sys::last_error("getcwd"));
        }
        let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
        let bytes: Vec<u8> = buf[..len].iter().map(|&c| c as u8).collect();
        Ok(PathBuf::from(OsStr::from_bytes(&bytes)))
    }

    /// Create a named pipe. Permissions are `mode & !umask`.
    pub fn mkfifo<P: AsRef<Path>>(&self, pathname: P, mode: Mode) -> Result<()> {
        let path = sys::c_path("mkfifo", pathname.as_ref())?;
        sys::check("mkfifo", unsafe { libc::mkfifo(path.as_ptr(), mode) }).map(drop)
    }

    /// Create a filesystem node. `mode` combines one of the [`node`] types
    /// with permission bits; `major` and `minor` are only used for
    /// character and block devices.
    pub fn mknod<P: AsRef<Path>>(&self, pathname: P, mode: Mode, major: u32, minor: u32) -> Result<()> {
        let path = sys::c_path("mknod", pathname.as_ref())?;
        let rc = unsafe {
            let dev = if node::is_device(mode) {
                libc::makedev(major as _, minor as _)
            } else {
                0
            };
            libc::mknod(path.as_ptr(), mode, dev)
        };
        sys::check("mknod", rc).map(drop)
    }
}
