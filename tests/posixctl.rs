// CLASSIFICATION: COMMUNITY
// Filename: posixctl.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

use std::process::{Command, Output};

fn posixctl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_posixctl"))
        .args(args)
        .env_remove("POSIXKIT_DISABLE")
        .output()
        .expect("run posixctl")
}

fn json(args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let out = posixctl(&full);
    assert!(out.status.success(), "posixctl {:?} failed: {}", args, String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).expect("valid json")
}

#[test]
fn strerror_zero_is_success() {
    assert_eq!(json(&["strerror", "0"]), serde_json::json!("Success"));
}

#[test]
fn strerror_prints_plain_text() {
    let out = posixctl(&["strerror", "0"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Success\n");
}

#[test]
fn cwd_prints_plain_path() {
    let out = posixctl(&["cwd"]);
    assert!(out.status.success());
    let expected = format!("{}\n", std::env::current_dir().unwrap().display());
    assert_eq!(String::from_utf8_lossy(&out.stdout), expected);
}

#[test]
fn proc_of_another_pid_omits_parent() {
    let v = json(&["proc", "--pid", "1"]);
    assert_eq!(v["pid"].as_i64(), Some(1));
    assert!(v["ppid"].is_null());
}

#[test]
fn proc_of_self_reports_parent() {
    let v = json(&["proc"]);
    assert_eq!(v["ppid"].as_i64(), Some(std::process::id() as i64));
}

#[test]
fn uname_reports_sysname() {
    let v = json(&["uname"]);
    assert!(v.get("sysname").and_then(|s| s.as_str()).is_some());
}

#[test]
fn id_matches_libc() {
    let v = json(&["id"]);
    assert_eq!(v["uid"].as_u64(), Some(unsafe { libc::getuid() } as u64));
    assert!(v["groups"].is_array());
}

#[test]
fn limits_include_openfiles() {
    let v = json(&["limits"]);
    assert!(v.get("openfiles").is_some());
}

#[test]
fn user_lookup_by_uid() {
    let v = json(&["user", "0"]);
    assert_eq!(v["uid"].as_u64(), Some(0));
}

#[test]
fn denied_access_exits_nonzero() {
    let out = posixctl(&["access", "/posixkit/does/not/exist"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not accessible"));
}

#[test]
fn disabled_capability_is_reported_masked() {
    let out = Command::new(env!("CARGO_BIN_EXE_posixctl"))
        .arg("caps")
        .env("POSIXKIT_DISABLE", "getpgid")
        .output()
        .expect("run posixctl");
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.lines().any(|l| l.starts_with("getpgid") && l.ends_with("masked")));
    assert!(text.lines().any(|l| l.starts_with("getrlimit") && l.ends_with("available")));
}
