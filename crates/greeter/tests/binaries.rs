// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Process-level behavior of the lab binaries.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

#[parameterized(
    gradle = { "hello-gradle", "Hello iVolve Trainee\n" },
    maven = { "hello-maven", "Hello Ivolve Trainee\n" },
)]
fn prints_greeting_and_exits_zero(bin: &str, expected: &str) {
    Command::cargo_bin(bin)
        .unwrap()
        .assert()
        .success()
        .code(0)
        .stdout(expected.to_string())
        .stderr("");
}

#[parameterized(
    gradle = { "hello-gradle", "Hello iVolve Trainee\n" },
    maven = { "hello-maven", "Hello Ivolve Trainee\n" },
)]
fn ignores_arguments(bin: &str, expected: &str) {
    Command::cargo_bin(bin)
        .unwrap()
        .args(["--help", "-x", "positional", "--version"])
        .assert()
        .success()
        .stdout(expected.to_string())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_no_stdin_needed() {
    Command::cargo_bin("hello-gradle")
        .unwrap()
        .write_stdin("ignored input\n")
        .assert()
        .success()
        .stdout("Hello iVolve Trainee\n");
}
