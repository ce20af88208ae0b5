// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end tests for the `test-capture` binary.

#![cfg(unix)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn test_capture() -> Command {
    Command::cargo_bin("test-capture").unwrap()
}

#[test]
fn test_match_exits_zero_and_prints_nothing() {
    test_capture()
        .args(["--expected", "Hello iVolve Trainee", "--line", "--"])
        .args(["echo", "Hello iVolve Trainee"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_mismatch_exits_one_with_diff() {
    test_capture()
        .args(["--expected", "Hello iVolve Trainee", "--line", "--"])
        .args(["echo", "Hello Ivolve Trainee"])
        .assert()
        .code(1)
        .stdout("-Hello iVolve Trainee\n+Hello Ivolve Trainee\n");
}

#[test]
fn test_expected_without_line_flag_misses_terminator() {
    test_capture()
        .args(["--expected", "Hello Ivolve Trainee", "--"])
        .args(["echo", "Hello Ivolve Trainee"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No newline at end of output"));
}

#[test]
fn test_expected_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Hello Ivolve Trainee\n").unwrap();
    file.flush().unwrap();

    test_capture()
        .arg("--expected-file")
        .arg(file.path())
        .args(["--", "echo", "Hello Ivolve Trainee"])
        .assert()
        .success();
}

#[test]
fn test_json_report() {
    let output = test_capture()
        .args(["--expected", "hi", "--line", "--json", "--", "echo", "hi"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["matched"], true);
    assert_eq!(report["actual"], "hi\n");
}

#[test]
fn test_spawn_failure_exits_two() {
    test_capture()
        .args(["--expected", "x", "--", "definitely-not-a-real-program-xyz"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("Error: failed to run"));
}

#[test]
fn test_verbose_echoes_command() {
    test_capture()
        .args(["-v", "--expected", "a", "--line", "--", "echo", "a"])
        .assert()
        .success()
        .stderr(predicate::str::contains("test-capture: running echo a"));
}

#[test]
fn test_missing_command_is_usage_error() {
    test_capture()
        .args(["--expected", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_baseline_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();

    test_capture()
        .arg("--expected-file")
        .arg(dir.path().join("absent.txt"))
        .args(["--", "echo", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("Error: failed to read baseline"));
}
