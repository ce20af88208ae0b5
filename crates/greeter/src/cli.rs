// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line entry point shared by the lab binaries.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use greeter_capture::diagnostic::print_error;
use greeter_capture::Console;

use crate::lab::{run, Lab};

/// Print the lab greeting.
///
/// There are no options. Every argument, including ones that look like flags,
/// is collected into `ignored` and has no effect.
#[derive(Parser, Clone, Debug, Default)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<OsString>,
}

/// Process entry point for a lab binary.
pub fn main(lab: Lab) -> ExitCode {
    let _ = Cli::parse();
    execute(lab, &Console::stdout())
}

/// Write the greeting for `lab` to `console`.
///
/// Returns failure, after reporting on stderr, only if the sink rejects the
/// write.
pub fn execute(lab: Lab, console: &Console) -> ExitCode {
    let mut out = console;
    match run(lab, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(format_args!("failed to write greeting: {}", e));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
