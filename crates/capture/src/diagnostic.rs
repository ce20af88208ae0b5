// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting on stderr shared by the workspace binaries.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// How a diagnostic line is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// Red ANSI foreground, for terminals.
    Color,
}

impl Style {
    /// Color when stderr is a terminal.
    pub fn for_stderr() -> Self {
        if io::stderr().is_terminal() {
            Style::Color
        } else {
            Style::Plain
        }
    }
}

/// Report an error on stderr as `Error: <msg>`.
pub fn print_error(msg: impl Display) {
    let _ = write_error(&mut io::stderr().lock(), msg, Style::for_stderr());
}

/// Write one `Error: <msg>` line in the given style.
pub fn write_error<W: Write + ?Sized>(
    out: &mut W,
    msg: impl Display,
    style: Style,
) -> io::Result<()> {
    match style {
        Style::Plain => writeln!(out, "Error: {}", msg),
        Style::Color => writeln!(out, "\x1b[31mError: {}\x1b[0m", msg),
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
