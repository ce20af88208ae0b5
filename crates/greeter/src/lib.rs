// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trainee greeters for the build-tool labs.
//!
//! Each lab ships a program that prints one fixed line. The greeting is
//! written to an injected sink so it can be captured in-process:
//!
//! ```
//! use greeter::{run, Lab};
//!
//! let mut out = Vec::new();
//! run(Lab::Gradle, &mut out).unwrap();
//! assert_eq!(out, b"Hello iVolve Trainee\n");
//! ```

pub mod cli;
mod lab;

pub use lab::{run, Lab};
