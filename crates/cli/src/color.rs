// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

pub mod codes {
    /// Node kinds: pastel cyan / steel blue
    pub const HEADER: u8 = 74;
    /// Words and operators: light grey
    pub const LITERAL: u8 = 250;
    /// Tree guides: darker grey
    pub const MUTED: u8 = 240;

    /// Pre-formatted ANSI escape sequences for use in tests
    #[cfg(test)]
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    #[cfg(test)]
    pub const LITERAL_START: &str = "\x1b[38;5;250m";
    #[cfg(test)]
    pub const MUTED_START: &str = "\x1b[38;5;240m";
    #[cfg(test)]
    pub const RESET: &str = "\x1b[0m";
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

/// Colors applied by a renderer, or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Palette following [`should_colorize`].
    pub fn detect() -> Self {
        Self::new(should_colorize())
    }

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(codes::HEADER, text)
    }

    pub fn literal(&self, text: &str) -> String {
        self.paint(codes::LITERAL, text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(codes::MUTED, text)
    }

    fn paint(&self, code: u8, text: &str) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", fg256(code))
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
