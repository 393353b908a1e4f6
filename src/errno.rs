// CLASSIFICATION: COMMUNITY
// Filename: errno.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! OS error codes and the error type returned by [`crate::Posix`].
//!
//! The last-error state belongs to the OS layer. [`Errno::last`] reads it on
//! demand; nothing in this crate keeps a copy of it between calls.

use std::ffi::CStr;
use std::fmt;
use std::io;

use libc::c_char;
use serde::Serialize;
use thiserror::Error;

/// An OS error number as reported by a failed primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Errno(i32);

impl Errno {
    pub const SUCCESS: Errno = Errno(0);
    pub const EPERM: Errno = Errno(libc::EPERM);
    pub const ENOENT: Errno = Errno(libc::ENOENT);
    pub const ESRCH: Errno = Errno(libc::ESRCH);
    pub const EBADF: Errno = Errno(libc::EBADF);
    pub const EACCES: Errno = Errno(libc::EACCES);
    pub const EEXIST: Errno = Errno(libc::EEXIST);
    pub const EINVAL: Errno = Errno(libc::EINVAL);
    pub const ENOTTY: Errno = Errno(libc::ENOTTY);
    pub const ERANGE: Errno = Errno(libc::ERANGE);

    pub const fn from_raw(code: i32) -> Self {
        Errno(code)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Read the calling thread's last OS error.
    ///
    /// This is shared with every other libc call made on the thread, so it
    /// must be read immediately after the primitive of interest.
    pub fn last() -> Self {
        Errno(io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }

    /// Human-readable message for this code.
    pub fn description(self) -> String {
        strerror(self.0)
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (errno {})", self.description(), self.0)
    }
}

impl From<Errno> for io::Error {
    fn from(errno: Errno) -> Self {
        io::Error::from_raw_os_error(errno.0)
    }
}

/// Render an error number as text.
///
/// Code 0 is always `"Success"` regardless of what the host libc would say.
pub fn strerror(code: i32) -> String {
    if code == 0 {
        return "Success".to_string();
    }
    let mut buf = [0 as c_char; 256];
    let rc = unsafe { libc::strerror_r(code, buf.as_mut_ptr(), buf.len()) };
    if rc != 0 {
        return format!("Unknown error {code}");
    }
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

/// Errors returned by [`crate::Posix`] methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PosixError {
    /// The primitive failed and left `errno` set.
    #[error("{call} failed: {errno}")]
    Os { call: &'static str, errno: Errno },
    /// A passwd or group lookup completed without finding an entry.
    #[error("{call}: no matching entry")]
    NotFound { call: &'static str },
    /// The primitive is not offered by this host or has been masked.
    #[error("{0} is not available on this platform")]
    Unsupported(&'static str),
}

impl PosixError {
    /// The OS error number carried by this error, if any.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            PosixError::Os { errno, .. } => Some(*errno),
            _ => None,
        }
    }

    /// Name of the primitive that produced this error.
    pub fn call(&self) -> &'static str {
        match self {
            PosixError::Os { call, .. } | PosixError::NotFound { call } => call,
            PosixError::Unsupported(call) => call,
        }
    }
}

pub type Result<T> = std::result::Result<T, PosixError>;
