// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact output comparison with diff reporting.

use similar::{ChangeTag, TextDiff};

/// Captured output that differs from what was expected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("output mismatch\n  expected: {expected:?}\n    actual: {actual:?}\n{}", render_diff(.expected, .actual))]
pub struct Mismatch {
    pub expected: String,
    pub actual: String,
}

impl Mismatch {
    /// Line diff from expected (`-`) to actual (`+`).
    pub fn diff(&self) -> String {
        render_diff(&self.expected, &self.actual)
    }
}

/// Compare by exact equality, trailing line terminators included.
pub fn compare(expected: &str, actual: &str) -> Result<(), Mismatch> {
    if expected == actual {
        return Ok(());
    }
    Err(Mismatch {
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

fn render_diff(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => ' ',
        };
        out.push(sign);
        out.push_str(change.value());
        if change.missing_newline() {
            out.push_str("\n\\ No newline at end of output\n");
        }
    }
    out
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
