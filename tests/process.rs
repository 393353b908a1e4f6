// CLASSIFICATION: COMMUNITY
// Filename: process.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

use posixkit::{Capabilities, Errno, Posix, PosixError};

/// A pid above every kernel's `pid_max`.
const NO_SUCH_PID: libc::pid_t = libc::pid_t::MAX;

#[test]
fn pids_match_libc() {
    let posix = Posix::new();
    assert_eq!(posix.getpid() as u32, std::process::id());
    assert_eq!(posix.getppid(), unsafe { libc::getppid() });
    assert_eq!(posix.getpgrp(), unsafe { libc::getpgrp() });
}

#[test]
fn getpgid_of_self_is_process_group() {
    let posix = Posix::new();
    assert_eq!(posix.getpgid(0), Ok(posix.getpgrp()));
    assert_eq!(posix.getpgid(posix.getpid()), Ok(posix.getpgrp()));
}

#[test]
fn getpgid_is_gated_by_capability() {
    let posix = Posix::new().with_capabilities(Capabilities::all() - Capabilities::GETPGID);
    // A nonexistent pid would give ESRCH if the primitive were reached.
    assert_eq!(
        posix.getpgid(NO_SUCH_PID),
        Err(PosixError::Unsupported("getpgid"))
    );
    assert_eq!(posix.getpgid(0), Err(PosixError::Unsupported("getpgid")));
}

#[test]
fn getpgid_of_missing_process_fails() {
    let err = Posix::new().getpgid(NO_SUCH_PID).unwrap_err();
    assert_eq!(err.errno(), Some(Errno::ESRCH));
}

#[test]
fn getsid_matches_libc() {
    let posix = Posix::new();
    assert_eq!(posix.getsid(0), Ok(unsafe { libc::getsid(0) }));
    assert_eq!(
        posix.getsid(NO_SUCH_PID).unwrap_err().errno(),
        Some(Errno::ESRCH)
    );
}

#[test]
fn setpgid_on_missing_process_fails() {
    let err = Posix::new().setpgid(NO_SUCH_PID, 0).unwrap_err();
    assert_eq!(err.errno(), Some(Errno::ESRCH));
}

#[test]
fn setpgid_to_current_group_succeeds() {
    let posix = Posix::new();
    if posix.getsid(0) == Ok(posix.getpid()) {
        eprintln!("Skipping test: session leaders may not change process group");
        return;
    }
    let pgrp = posix.getpgrp();
    posix.setpgid(0, pgrp).expect("setpgid to own group");
    assert_eq!(posix.getpgrp(), pgrp);
}

#[test]
fn kill_probe() {
    let posix = Posix::new();
    assert!(posix.kill(posix.getpid(), 0).is_ok());
    let err = posix.kill(NO_SUCH_PID, 0).unwrap_err();
    assert_eq!(err, PosixError::Os { call: "kill", errno: Errno::ESRCH });
}

#[test]
fn kill_rejects_invalid_signal() {
    let posix = Posix::new();
    let err = posix.kill(posix.getpid(), -1).unwrap_err();
    assert_eq!(err.errno(), Some(Errno::EINVAL));
}

#[test]
fn getters_are_idempotent() {
    let posix = Posix::new();
    assert_eq!(posix.getpid(), posix.getpid());
    assert_eq!(posix.getppid(), posix.getppid());
    assert_eq!(posix.getpgrp(), posix.getpgrp());
    assert_eq!(posix.getsid(0), posix.getsid(0));
}
