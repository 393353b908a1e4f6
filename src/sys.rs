// CLASSIFICATION: COMMUNITY
// Filename: sys.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Raw libc plumbing shared by the facade methods.

use std::ffi::{CStr, CString};
use std::mem;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr;

use libc::{c_char, c_int};
use log::debug;

use crate::errno::{Errno, PosixError, Result};
use crate::types::{Bound, Gid, Group, Limit, Passwd, ResourceLimits};

/// Upper bound for reentrant lookup buffers.
const MAX_LOOKUP_BUFFER: usize = 1 << 20;

pub(crate) const HAS_INITGROUPS: bool = cfg!(has_initgroups);

extern "C" {
    fn ctermid(s: *mut c_char) -> *mut c_char;
    fn getlogin_r(buf: *mut c_char, bufsize: libc::size_t) -> c_int;
}

#[cfg(any(target_os = "linux", target_os = "emscripten", target_os = "redox"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__errno_location()
}

#[cfg(any(target_os = "android", target_os = "netbsd", target_os = "openbsd"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__errno()
}

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly"
))]
unsafe fn errno_location() -> *mut c_int {
    libc::__error()
}

/// Store `code` in the thread's OS error state.
pub(crate) fn set_errno(code: c_int) {
    unsafe { *errno_location() = code };
}

/// Build an error from the thread's current `errno`.
pub(crate) fn last_error(call: &'static str) -> PosixError {
    let errno = Errno::last();
    debug!("{call} failed: {errno}");
    PosixError::Os { call, errno }
}

/// Build an error from a code returned directly by the primitive.
pub(crate) fn returned_error(call: &'static str, code: c_int) -> PosixError {
    let errno = Errno::from_raw(code);
    debug!("{call} failed: {errno}");
    PosixError::Os { call, errno }
}

/// Map the usual `-1 means failure` convention onto `Result`.
pub(crate) fn check<T>(call: &'static str, rc: T) -> Result<T>
where
    T: PartialEq + From<i8>,
{
    if rc == T::from(-1) {
        Err(last_error(call))
    } else {
        Ok(rc)
    }
}

/// Convert to a C string. An interior NUL fails with `EINVAL`, left in the
/// OS error state as well so `errno()` agrees with the returned error.
pub(crate) fn c_string(call: &'static str, bytes: &[u8]) -> Result<CString> {
    CString::new(bytes).map_err(|_| {
        let err = returned_error(call, libc::EINVAL);
        set_errno(libc::EINVAL);
        err
    })
}

pub(crate) fn c_path(call: &'static str, path: &Path) -> Result<CString> {
    c_string(call, path.as_os_str().as_bytes())
}

/// Copy a possibly-null C string into an owned `String`.
///
/// # Safety
/// `p` must be null or point to a NUL-terminated string.
pub(crate) unsafe fn owned(p: *const c_char) -> String {
    if p.is_null() {
        String::new()
    } else {
        CStr::from_ptr(p).to_string_lossy().into_owned()
    }
}

/// Login name via the reentrant primitive; the code it returns is the error.
pub(crate) fn login_name() -> Result<String> {
    let mut buf: Vec<c_char> = vec![0; 256];
    loop {
        let rc = unsafe { getlogin_r(buf.as_mut_ptr(), buf.len()) };
        match rc {
            0 => return Ok(unsafe { owned(buf.as_ptr()) }),
            libc::ERANGE if buf.len() < 4096 => buf.resize(buf.len() * 2, 0),
            code => return Err(returned_error("getlogin", code)),
        }
    }
}

pub(crate) fn controlling_terminal() -> String {
    let mut buf = [0 as c_char; 256];
    unsafe { owned(ctermid(buf.as_mut_ptr())) }
}

#[cfg(has_initgroups)]
pub(crate) fn initgroups(user: &CStr, group: Gid) -> Result<()> {
    let rc = unsafe { libc::initgroups(user.as_ptr(), group as _) };
    check("initgroups", rc).map(|_| ())
}

#[cfg(not(has_initgroups))]
pub(crate) fn initgroups(_user: &CStr, _group: Gid) -> Result<()> {
    Err(PosixError::Unsupported("initgroups"))
}

/// Initial buffer size the host suggests for passwd/group lookups.
pub(crate) fn suggested_lookup_buffer() -> Option<usize> {
    let pw = unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) };
    let gr = unsafe { libc::sysconf(libc::_SC_GETGR_R_SIZE_MAX) };
    let best = pw.max(gr);
    (best > 0).then_some(best as usize)
}

/// Drive a `get{pw,gr}*_r` primitive.
///
/// The buffer doubles on `ERANGE`, which is how the reentrant interface asks
/// for more room. A null result is a miss; POSIX lets hosts report a miss
/// with any of the codes below as well as with zero.
fn reentrant<R, T, F>(call: &'static str, initial: usize, mut f: F, convert: unsafe fn(&R) -> T) -> Result<T>
where
    F: FnMut(*mut R, *mut c_char, usize, *mut *mut R) -> c_int,
{
    let mut buf: Vec<c_char> = vec![0; initial.clamp(64, MAX_LOOKUP_BUFFER)];
    loop {
        let mut entry: R = unsafe { mem::zeroed() };
        let mut result: *mut R = ptr::null_mut();
        let rc = f(&mut entry, buf.as_mut_ptr(), buf.len(), &mut result);
        if rc == libc::ERANGE && buf.len() < MAX_LOOKUP_BUFFER {
            let grown = (buf.len() * 2).min(MAX_LOOKUP_BUFFER);
            buf.resize(grown, 0);
            continue;
        }
        if result.is_null() {
            return match rc {
                0 | libc::ENOENT | libc::ESRCH | libc::EBADF | libc::EPERM => {
                    debug!("{call}: no entry");
                    Err(PosixError::NotFound { call })
                }
                code => Err(returned_error(call, code)),
            };
        }
        if rc != 0 {
            return Err(returned_error(call, rc));
        }
        return Ok(unsafe { convert(&entry) });
    }
}

unsafe fn passwd_from_raw(pw: &libc::passwd) -> Passwd {
    Passwd {
        name: owned(pw.pw_name),
        passwd: owned(pw.pw_passwd),
        uid: pw.pw_uid,
        gid: pw.pw_gid,
        gecos: owned(pw.pw_gecos),
        dir: owned(pw.pw_dir),
        shell: owned(pw.pw_shell),
    }
}

unsafe fn group_from_raw(gr: &libc::group) -> Group {
    let mut members = Vec::new();
    let mut cursor = gr.gr_mem;
    if !cursor.is_null() {
        while !(*cursor).is_null() {
            members.push(owned(*cursor));
            cursor = cursor.add(1);
        }
    }
    Group {
        name: owned(gr.gr_name),
        passwd: owned(gr.gr_passwd),
        gid: gr.gr_gid,
        members,
    }
}

pub(crate) fn getpwnam(name: &CStr, initial: usize) -> Result<Passwd> {
    reentrant(
        "getpwnam",
        initial,
        |pwd, buf, len, result| unsafe { libc::getpwnam_r(name.as_ptr(), pwd, buf, len, result) },
        passwd_from_raw,
    )
}

pub(crate) fn getpwuid(uid: libc::uid_t, initial: usize) -> Result<Passwd> {
    reentrant(
        "getpwuid",
        initial,
        |pwd, buf, len, result| unsafe { libc::getpwuid_r(uid, pwd, buf, len, result) },
        passwd_from_raw,
    )
}

pub(crate) fn getgrnam(name: &CStr, initial: usize) -> Result<Group> {
    reentrant(
        "getgrnam",
        initial,
        |grp, buf, len, result| unsafe { libc::getgrnam_r(name.as_ptr(), grp, buf, len, result) },
        group_from_raw,
    )
}

pub(crate) fn getgrgid(gid: Gid, initial: usize) -> Result<Group> {
    reentrant(
        "getgrgid",
        initial,
        |grp, buf, len, result| unsafe { libc::getgrgid_r(gid, grp, buf, len, result) },
        group_from_raw,
    )
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
type RlimitResource = libc::__rlimit_resource_t;
#[cfg(not(all(target_os = "linux", target_env = "gnu")))]
type RlimitResource = c_int;

/// Resources reported by `getrlimit`, under the names the host tools use.
const RESOURCES: &[(RlimitResource, &str)] = &[
    (libc::RLIMIT_CORE, "core"),
    (libc::RLIMIT_DATA, "data"),
    (libc::RLIMIT_STACK, "stack"),
    (libc::RLIMIT_AS, "totalmem"),
    (libc::RLIMIT_RSS, "rss"),
    (libc::RLIMIT_NPROC, "maxproc"),
    (libc::RLIMIT_MEMLOCK, "memlock"),
    (libc::RLIMIT_CPU, "cpu"),
    (libc::RLIMIT_FSIZE, "filesize"),
    (libc::RLIMIT_NOFILE, "openfiles"),
    #[cfg(target_os = "linux")]
    (libc::RLIMIT_MSGQUEUE, "msgqueue"),
    #[cfg(target_os = "linux")]
    (libc::RLIMIT_NICE, "nice"),
    #[cfg(target_os = "linux")]
    (libc::RLIMIT_RTPRIO, "rtprio"),
    #[cfg(target_os = "linux")]
    (libc::RLIMIT_RTTIME, "rttime"),
    #[cfg(target_os = "linux")]
    (libc::RLIMIT_SIGPENDING, "sigpending"),
];

fn bound(raw: libc::rlim_t) -> Bound {
    if raw == libc::RLIM_INFINITY {
        Bound::Unlimited
    } else {
        #[allow(clippy::unnecessary_cast)]
        Bound::Finite(raw as u64)
    }
}

pub(crate) fn getrlimit() -> Result<ResourceLimits> {
    let mut limits = ResourceLimits::default();
    for &(resource, name) in RESOURCES {
        let mut raw = libc::rlimit { rlim_cur: 0, rlim_max: 0 };
        let rc = unsafe { libc::getrlimit(resource, &mut raw) };
        check("getrlimit", rc)?;
        limits.insert(
            name,
            Limit {
                soft: bound(raw.rlim_cur),
                hard: bound(raw.rlim_max),
            },
        );
    }
    Ok(limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_maps_minus_one() {
        assert_eq!(check("getsid", 42), Ok(42));
        assert!(matches!(check("getsid", -1), Err(PosixError::Os { call: "getsid", .. })));
    }

    #[test]
    fn interior_nul_is_einval() {
        let err = c_string("getpwnam", b"ro\0ot").unwrap_err();
        assert_eq!(err.errno(), Some(Errno::EINVAL));
    }

    #[test]
    fn interior_nul_sets_os_error_state() {
        set_errno(libc::ESRCH);
        assert!(c_string("getgrnam", b"wh\0eel").is_err());
        assert_eq!(Errno::last(), Errno::EINVAL);
    }

    #[test]
    fn set_errno_is_visible_to_last() {
        set_errno(libc::ENOTTY);
        assert_eq!(Errno::last(), Errno::ENOTTY);
    }

    #[test]
    fn resource_names_are_unique() {
        let mut names: Vec<_> = RESOURCES.iter().map(|(_, n)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RESOURCES.len());
    }

    #[test]
    fn lookup_with_minimal_buffer() {
        let pw = getpwuid(0, 1).unwrap();
        assert_eq!(pw.uid, 0);
    }
}
