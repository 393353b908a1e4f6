// CLASSIFICATION: COMMUNITY
// Filename: build.rs v0.6
// Author: Lukas Bower
// Date Modified: 2026-10-19

fn main() {
    use std::env;

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(has_initgroups)");

    // Targets whose libc binding exports initgroups.
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if matches!(
        target_os.as_str(),
        "linux" | "macos" | "ios" | "freebsd" | "dragonfly" | "netbsd" | "openbsd"
    ) {
        println!("cargo:rustc-cfg=has_initgroups");
    }
}
