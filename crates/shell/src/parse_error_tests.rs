// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::parse;

#[test]
fn unexpected_token_message() {
    let err = parse("(a b (c))").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected '(' at token 3, expected ')'"
    );
}

#[test]
fn end_of_input_message() {
    let err = parse("echo >").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected end of input at token 2, expected word"
    );
}

#[test]
fn empty_group_message() {
    let err = parse("()").unwrap_err();
    assert_eq!(
        err.to_string(),
        "empty subshell at token 1: found ')', expected a command"
    );
}

#[test]
fn trailing_input_message() {
    let err = parse("a)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected trailing ')' at token 1, expected end of input"
    );
}

#[test]
fn end_of_input_span_is_zero_width_at_end() {
    let err = parse("(a && b").unwrap_err();
    assert_eq!(err.span(), Span::empty(7));
    assert_eq!(err.index(), 4);
    assert_eq!(err.found(), None);
}

#[test]
fn accessors_agree_with_variant() {
    let err = parse("a | | b").unwrap_err();
    assert_eq!(err.kind_name(), "EmptyGroup");
    assert_eq!(err.expected(), Some(Expected::Command));
    assert_eq!(err.found(), Some(TokenKind::Pipe));
    assert_eq!(err.index(), 2);
    assert_eq!(err.span(), Span::new(4, 5));
}

#[test]
fn trailing_input_expects_end() {
    let err = parse("a ) b").unwrap_err();
    assert_eq!(err.expected(), Some(Expected::EndOfInput));
}

#[test]
fn context_highlights_token() {
    let err = parse("echo hi )").unwrap_err();
    assert_eq!(err.context("echo hi )", 40), "echo hi )\n        ^");
}

#[test]
fn diagnostic_includes_message_and_caret() {
    let input = "cat < | wc";
    let err = parse(input).unwrap_err();
    let diag = err.diagnostic(input);
    assert!(diag.starts_with("error: unexpected '|' at token 2, expected word"));
    assert!(diag.contains("  1 | cat < | wc"));
    assert!(diag.ends_with("|       ^"));
}

#[test]
fn group_kinds_display() {
    assert_eq!(GroupKind::Subshell.to_string(), "subshell");
    assert_eq!(GroupKind::Pipeline.to_string(), "pipeline");
    assert_eq!(GroupKind::AndOr.to_string(), "and-or list");
}
