// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod display;
mod node;
mod serialize;
mod utils;
mod visitor;
