// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run a command and compare its stdout against a baseline.

use crate::compare::compare;
use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Where the expected output comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Baseline {
    Text(String),
    File(PathBuf),
}

/// A command to run and the output it must produce.
#[derive(Clone, Debug)]
pub struct Check {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub baseline: Baseline,
}

/// Errors that prevent a comparison from happening at all
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read baseline {path}: {source}")]
    ReadBaseline {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("stdout of {program} is not valid UTF-8")]
    NotUtf8 { program: String },
}

/// Outcome of a check.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub matched: bool,
    pub exit_code: Option<i32>,
    pub expected: String,
    pub actual: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Run the command with stdin closed and compare its stdout to the baseline.
///
/// A mismatch is reported through [`Report::matched`], not as an error.
pub async fn check(spec: &Check) -> Result<Report, CheckError> {
    let expected = load_baseline(&spec.baseline).await?;
    let program = spec.program.to_string_lossy().into_owned();

    let output = Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .await
        .map_err(|source| CheckError::Spawn {
            program: program.clone(),
            source,
        })?;

    let actual = String::from_utf8(output.stdout).map_err(|_| CheckError::NotUtf8 { program })?;
    let diff = compare(&expected, &actual).err().map(|m| m.diff());

    Ok(Report {
        matched: diff.is_none(),
        exit_code: output.status.code(),
        expected,
        actual,
        diff,
    })
}

async fn load_baseline(baseline: &Baseline) -> Result<String, CheckError> {
    match baseline {
        Baseline::Text(text) => Ok(text.clone()),
        Baseline::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CheckError::ReadBaseline {
                    path: path.display().to_string(),
                    source,
                })
        }
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
