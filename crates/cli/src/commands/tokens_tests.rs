// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use shtree_shell::tokenize;

#[test]
fn text_lists_kind_and_text() {
    let out = format_tokens(&tokenize("cat 'a b' >> log"), OutputFormat::Text).unwrap();
    assert_eq!(out, "WORD\tcat\nWORD\ta b\nREDIR_APPEND\t>>\nWORD\tlog\n");
}

#[test]
fn text_is_empty_for_blank_input() {
    assert_eq!(format_tokens(&tokenize("  "), OutputFormat::Text).unwrap(), "");
}

#[test]
fn json_keeps_quoting_and_spans() {
    let out = format_tokens(&tokenize("x && ''"), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "kind": "WORD", "text": "x", "quoted": false, "span": { "start": 0, "end": 1 } },
            { "kind": "AND_AND", "text": "&&", "quoted": false, "span": { "start": 2, "end": 4 } },
            { "kind": "WORD", "text": "", "quoted": true, "span": { "start": 5, "end": 7 } },
        ])
    );
}
