// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lab greetings.

use std::fmt;
use std::io::{self, Write};

/// Build-tool lab that ships a greeter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lab {
    Gradle,
    Maven,
}

impl Lab {
    pub const ALL: [Lab; 2] = [Lab::Gradle, Lab::Maven];

    /// The fixed greeting printed by this lab's program.
    pub const fn greeting(self) -> &'static str {
        match self {
            Lab::Gradle => "Hello iVolve Trainee",
            Lab::Maven => "Hello Ivolve Trainee",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Lab::Gradle => "gradle",
            Lab::Maven => "maven",
        }
    }

    /// Exact bytes `run` writes: the greeting and one newline.
    pub fn expected_output(self) -> String {
        format!("{}\n", self.greeting())
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Write the lab's greeting to `out` as a single line.
pub fn run<W: Write + ?Sized>(lab: Lab, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", lab.greeting())?;
    out.flush()
}

#[cfg(test)]
#[path = "lab_tests.rs"]
mod tests;
