// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn merge_covers_both_spans() {
    let merged = Span::new(5, 7).merge(Span::new(0, 4));
    assert_eq!(merged, Span::new(0, 7));
}

#[test]
fn contains_is_half_open() {
    let span = Span::new(2, 4);
    assert!(!span.contains(1));
    assert!(span.contains(2));
    assert!(span.contains(3));
    assert!(!span.contains(4));
}

#[test]
fn empty_span_has_zero_len() {
    let span = Span::empty(9);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(3, 40).slice("echo"), "");
}

#[test]
fn slice_off_char_boundary_is_empty() {
    // 'é' is two bytes wide
    assert_eq!(Span::new(1, 2).slice("é"), "");
}

#[test]
fn snippet_points_at_span() {
    let snippet = context_snippet("echo | | bad", Span::new(7, 8), 20);
    assert_eq!(snippet, "echo | | bad\n       ^");
}

#[test]
fn snippet_trims_to_context() {
    let snippet = context_snippet("aaaaaaaaaa && ) bbbbbbbbbb", Span::new(14, 15), 3);
    assert_eq!(snippet, "&& ) bb\n   ^");
}

#[test]
fn snippet_at_end_of_input_still_has_caret() {
    let snippet = context_snippet("echo >", Span::empty(6), 10);
    assert_eq!(snippet, "echo >\n      ^");
}

#[test]
fn locate_first_line() {
    let (line, col, text) = locate_span("echo hi", Span::new(5, 7));
    assert_eq!((line, col, text), (1, 5, "echo hi"));
}

#[test]
fn locate_later_line() {
    let (line, col, text) = locate_span("echo a\n| b", Span::new(7, 8));
    assert_eq!((line, col, text), (2, 0, "| b"));
}

#[test]
fn locate_counts_columns_in_chars() {
    let (_, col, _) = locate_span("ééé |", Span::new(7, 8));
    assert_eq!(col, 4);
}

#[test]
fn diagnostic_single_line() {
    let diag = diagnostic_context("a)", Span::new(1, 2), "trailing input");
    assert_eq!(
        diag,
        "error: trailing input\n  --> column 2\n   |\n  1 | a)\n   |  ^"
    );
}

#[test]
fn diagnostic_multi_line_mentions_line() {
    let diag = diagnostic_context("echo a\n( b", Span::new(7, 8), "oops");
    assert!(diag.contains("--> line 2, column 1"));
    assert!(diag.contains("  2 | ( b"));
}

#[test]
fn diagnostic_cuts_long_line_before_span() {
    let source = format!("{} )", "x".repeat(200));
    let diag = diagnostic_context(&source, Span::new(201, 202), "trailing input");
    assert_eq!(
        diag,
        format!(
            "error: trailing input\n  --> column 202\n   |\n  1 | ...{} )\n   | {}^",
            "x".repeat(39),
            " ".repeat(43)
        )
    );
}

#[test]
fn diagnostic_cuts_long_line_on_both_sides() {
    let source = "(".repeat(200_000);
    let diag = diagnostic_context(&source, Span::new(64, 65), "too deep");
    assert!(diag.len() < 300, "diagnostic is {} bytes", diag.len());
    assert!(diag.contains(&format!("  1 | ...{}...\n", "(".repeat(81))));
    assert!(diag.ends_with(&format!("   | {}^", " ".repeat(43))));
}

#[test]
fn diagnostic_caret_stays_inside_window_for_long_span() {
    let source = format!("echo {}", "y".repeat(300));
    let diag = diagnostic_context(&source, Span::new(5, 305), "long word");
    let caret_line = diag.lines().last().unwrap();
    assert_eq!(caret_line, format!("   | {}{}", " ".repeat(5), "^".repeat(80)));
}

#[test]
fn diagnostic_keeps_short_lines_whole() {
    let source = "z".repeat(120);
    let diag = diagnostic_context(&source, Span::empty(120), "end");
    assert!(diag.contains(&format!("  1 | {}\n", source)));
}
