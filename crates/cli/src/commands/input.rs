// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where a command line comes from.

use anyhow::{Context, Result};
use std::io::Read;

/// The positional argument, or all of stdin when it is absent.
pub fn read_input(arg: Option<String>) -> Result<String> {
    if let Some(line) = arg {
        return Ok(line);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read command line from stdin")?;
    Ok(strip_trailing_newline(buf))
}

/// Drop one trailing `\n` or `\r\n`, as left by `echo` or a heredoc.
fn strip_trailing_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
