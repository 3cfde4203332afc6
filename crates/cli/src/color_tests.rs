// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::codes::{HEADER_START, LITERAL_START, MUTED_START, RESET};
use super::Palette;

#[test]
fn disabled_palette_leaves_text_alone() {
    let palette = Palette::new(false);
    assert_eq!(palette.header("Pipeline"), "Pipeline");
    assert_eq!(palette.literal("\"ls\""), "\"ls\"");
    assert_eq!(palette.muted("├── "), "├── ");
}

#[yare::parameterized(
    header  = { Palette::header,  HEADER_START },
    literal = { Palette::literal, LITERAL_START },
    muted   = { Palette::muted,   MUTED_START },
)]
fn enabled_palette_wraps_text(paint: fn(&Palette, &str) -> String, start: &str) {
    let palette = Palette::new(true);
    assert_eq!(paint(&palette, "x"), format!("{start}x{RESET}"));
}
