// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test capture CLI entry point.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use greeter_capture::diagnostic::print_error;
use test_capture::{check, Baseline, Check};

/// Exit codes for a capture run
mod exit_codes {
    /// Output matched the baseline
    pub const MATCHED: u8 = 0;
    /// Output differed from the baseline
    pub const MISMATCH: u8 = 1;
    /// The comparison could not be performed
    pub const ERROR: u8 = 2;
}

/// Capture a command's stdout and compare it against an expected baseline
#[derive(Parser, Debug)]
#[command(name = "test-capture")]
#[command(about = "Capture and compare CLI test output")]
struct Cli {
    /// Expected stdout, compared byte for byte
    #[arg(short, long, required_unless_present = "expected_file")]
    expected: Option<String>,

    /// Read the expected stdout from a file
    #[arg(long, conflicts_with = "expected")]
    expected_file: Option<PathBuf>,

    /// Append a single newline to --expected
    #[arg(long, requires = "expected")]
    line: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Echo the command being run to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Command to run, after `--`
    #[arg(last = true, required = true)]
    command: Vec<OsString>,
}

impl Cli {
    fn into_check(self) -> Option<Check> {
        let baseline = match (self.expected, self.expected_file) {
            (Some(mut text), _) => {
                if self.line {
                    text.push('\n');
                }
                Baseline::Text(text)
            }
            (None, Some(path)) => Baseline::File(path),
            (None, None) => return None,
        };
        let mut command = self.command.into_iter();
        let program = command.next()?;
        Some(Check {
            program,
            args: command.collect(),
            baseline,
        })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    if cli.verbose {
        let shown: Vec<_> = cli.command.iter().map(|a| a.to_string_lossy()).collect();
        eprintln!("test-capture: running {}", shown.join(" "));
    }

    let Some(spec) = cli.into_check() else {
        print_error("a command and an expected baseline are required");
        return ExitCode::from(exit_codes::ERROR);
    };

    let report = match check(&spec).await {
        Ok(report) => report,
        Err(e) => {
            print_error(e);
            return ExitCode::from(exit_codes::ERROR);
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                print_error(format_args!("failed to render report: {}", e));
                return ExitCode::from(exit_codes::ERROR);
            }
        }
    } else if let Some(ref diff) = report.diff {
        print!("{}", diff);
    }

    if report.matched {
        ExitCode::from(exit_codes::MATCHED)
    } else {
        ExitCode::from(exit_codes::MISMATCH)
    }
}
