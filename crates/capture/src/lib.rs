// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output sink handle and scoped capture for in-process assertions.
//!
//! Programs write through a [`Console`] instead of the process-wide stdout.
//! Tests take a [`CaptureGuard`] on the console, which swaps in an in-memory
//! buffer and puts the previous sink back when the guard ends.
//!
//! [`diagnostic`] holds the stderr error format the binaries share.

mod console;
pub mod diagnostic;
mod guard;

pub use console::{Console, SinkId};
pub use guard::{capture, CaptureError, CaptureGuard, Captured};
