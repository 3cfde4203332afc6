// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

// --- Logging ---

/// `tracing` filter directives from SHTREE_LOG.
pub fn log_filter() -> Option<String> {
    std::env::var("SHTREE_LOG").ok().filter(|s| !s.is_empty())
}

// --- Parser ---

/// Raw SHTREE_MAX_DEPTH value; validated by the caller.
pub fn max_depth() -> Option<String> {
    std::env::var("SHTREE_MAX_DEPTH")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}
