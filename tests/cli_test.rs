#![cfg(unix)]

use std::process::{Command, Output};
use tempfile::tempdir;

fn jar_install(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jar-install"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn successful_download_prints_installed() {
    let dir = tempdir().unwrap();
    let out = jar_install(&["-w", "true", "a:b:1.0", dir.path().to_str().unwrap()]);

    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Installed: a:b:1.0\n");
}

#[test]
fn failed_download_exits_non_zero_silently() {
    let dir = tempdir().unwrap();
    let out = jar_install(&["-w", "false", "a:b:1.0", dir.path().to_str().unwrap()]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to download"));
}

#[test]
fn malformed_coordinate_exits_before_downloading() {
    let dir = tempdir().unwrap();
    let jars = dir.path().join("jars");
    let out = jar_install(&["-w", "true", "onlytwo:parts", jars.to_str().unwrap()]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Malformed Maven coordinate"));
    // The jar directory is only created once the coordinate is accepted.
    assert!(!jars.exists());
}
