// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test capture and comparison utilities for the lab greeters.
//!
//! [`compare`] checks captured text against an expected literal and renders a
//! line diff on mismatch. [`check`] does the same for the stdout of a child
//! process.

mod check;
mod compare;

pub use check::{check, Baseline, Check, CheckError, Report};
pub use compare::{compare, Mismatch};
