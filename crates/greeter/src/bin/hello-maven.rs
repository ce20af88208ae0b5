// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Maven lab greeter.

use std::process::ExitCode;

use greeter::Lab;

fn main() -> ExitCode {
    greeter::cli::main(Lab::Maven)
}
