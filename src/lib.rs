// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v1.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Object facade over the host POSIX process, credential, terminal and
//! filesystem-node primitives.
//!
//! Every method on [`Posix`] forwards to one primitive of the same name.
//! Failures come back as [`PosixError`] carrying the untouched OS error
//! number; predicates such as `access` and `isatty` stay boolean.

#[cfg(not(unix))]
compile_error!("posixkit wraps POSIX primitives and only builds for unix targets");

/// Guarded primitives and the capability mask.
pub mod capability;

/// Process-wide facade settings.
pub mod config;

/// Error numbers and the crate error type.
pub mod errno;

/// The `Posix` facade.
pub mod facade;

/// Records returned by the facade.
pub mod types;

mod sys;

pub use capability::Capabilities;
pub use errno::{strerror, Errno, PosixError, Result};
pub use facade::Posix;
pub use types::{
    node, AccessMode, Bound, Gid, Group, Limit, Mode, Passwd, Pid, ProcessTimes, ResourceLimits,
    Signal, Ticks, Uid, Utsname,
};
