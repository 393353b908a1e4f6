// CLASSIFICATION: COMMUNITY
// Filename: terminal.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::os::unix::io::RawFd;

use libc::c_char;

use super::Posix;
use crate::errno::Result;
use crate::sys;

impl Posix {
    /// Path of the controlling terminal, typically `/dev/tty`.
    ///
    /// The path is returned even if the process has no controlling terminal;
    /// an empty string means the host could not name one.
    pub fn ctermid(&self) -> String {
        sys::controlling_terminal()
    }

    pub fn isatty(&self, fd: RawFd) -> bool {
        unsafe { libc::isatty(fd) == 1 }
    }

    /// Device path of the terminal open on `fd`.
    pub fn ttyname(&self, fd: RawFd) -> Result<String> {
        let mut buf = [0 as c_char; 256];
        let rc = unsafe { libc::ttyname_r(fd, buf.as_mut_ptr(), buf.len()) };
        if rc != 0 {
            return Err(sys::returned_error("ttyname", rc));
        }
        Ok(unsafe { sys::owned(buf.as_ptr()) })
    }
}
