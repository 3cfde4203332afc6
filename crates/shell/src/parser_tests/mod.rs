// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser tests, grouped by grammar area.

mod errors;
mod grammar;
mod nesting;
mod properties;
mod redirections;
