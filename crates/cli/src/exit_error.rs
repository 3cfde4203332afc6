// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error carrying a specific process exit code.

use std::fmt;

/// Exit status for a command line that failed to parse.
pub const SYNTAX_ERROR: i32 = 2;

/// Returned through `anyhow` when a command needs a non-default exit code.
///
/// An empty message means the command already reported the problem and
/// `main` prints nothing further.
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: String) -> Self {
        Self { code, message }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}
