#![forbid(unsafe_code)]

//! End-to-end tests for the demo binary.
//!
//! # Invariants
//!
//! 1. **Clean stdout**: stdout carries only accepted records; prompts, alerts
//!    and logs go to stderr.
//! 2. **Exit status**: one-shot mode exits 0 when accepted and 2 when rejected.
//!
//! Run: `cargo test -p projform-demo --test cli_e2e`

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn demo(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_projform-demo"))
        .args(args)
        .arg("--no-alert-wait")
        .env_remove("PROJFORM_FORMAT")
        .env_remove("PROJFORM_PEOPLE_MAX")
        .env("PROJFORM_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn demo");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait demo")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn one_shot_accepted() {
    let out = demo(
        &["--title=Build a shed", "--description=A small shed", "--people=3"],
        "",
    );
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "Build a shed\tA small shed\t3\n");
}

#[test]
fn one_shot_rejected() {
    let out = demo(&["--title=", "--description=A small shed", "--people=3"], "");
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Invalid input"));
}

#[test]
fn one_shot_json() {
    let out = demo(
        &[
            "--title=Build a shed",
            "--description=A small shed",
            "--people=2.5",
            "--format=json",
        ],
        "",
    );
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(stdout(&out).trim()).unwrap();
    assert_eq!(value["people"], 2.5);
}

#[test]
fn people_max_from_env() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_projform-demo"))
        .args(["--title=T", "--description=A small shed", "--people=8"])
        .arg("--no-alert-wait")
        .env("PROJFORM_PEOPLE_MAX", "10")
        .env("PROJFORM_LOG", "off")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn demo");
    let status = child.wait().expect("wait demo");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn interactive_session_over_pipe() {
    let out = demo(&[], "Build a shed\nA small shed\n0\n\n\n5\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "Build a shed\tA small shed\t5\n");
    let err = stderr(&out);
    assert!(err.contains("Title: "));
    assert!(err.contains("Invalid input"));
}

#[test]
fn unknown_flag_fails() {
    let out = demo(&["--bogus"], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("unknown option"));
}
