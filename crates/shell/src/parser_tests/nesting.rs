// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subshell nesting limits.

use crate::parse_error::ParseError;
use crate::parser::{Parser, ParserConfig, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};

fn nested(depth: usize) -> String {
    format!("{}a{}", "(".repeat(depth), ")".repeat(depth))
}

fn with_max(max_depth: usize) -> ParserConfig {
    ParserConfig { max_depth }
}

#[test]
fn default_limit_is_accepted() {
    let ast = Parser::parse(&nested(DEFAULT_MAX_DEPTH)).unwrap();
    assert_eq!(ast.max_nesting_depth(), DEFAULT_MAX_DEPTH);
}

#[test]
fn one_past_default_limit_fails() {
    let err = Parser::parse(&nested(DEFAULT_MAX_DEPTH + 1)).unwrap_err();
    assert_eq!(
        err,
        ParseError::NestingTooDeep {
            depth: DEFAULT_MAX_DEPTH + 1,
            max: DEFAULT_MAX_DEPTH,
            index: DEFAULT_MAX_DEPTH,
            span: crate::Span::new(DEFAULT_MAX_DEPTH, DEFAULT_MAX_DEPTH + 1),
        }
    );
}

#[test]
fn zero_limit_rejects_any_group() {
    let err = Parser::parse_with_config("a | (b)", with_max(0)).unwrap_err();
    assert!(matches!(
        err,
        ParseError::NestingTooDeep {
            depth: 1,
            max: 0,
            index: 2,
            ..
        }
    ));
}

#[test]
fn zero_limit_allows_flat_lines() {
    let ast = Parser::parse_with_config("a | b && c > d", with_max(0)).unwrap();
    assert_eq!(ast.count_commands(), 3);
}

#[test]
fn limit_counts_depth_not_total_groups() {
    let ast = Parser::parse_with_config("(a) | (b) && (c)", with_max(1)).unwrap();
    assert_eq!(ast.max_nesting_depth(), 1);

    let err = Parser::parse_with_config("(a) | ((b))", with_max(1)).unwrap_err();
    assert!(matches!(err, ParseError::NestingTooDeep { depth: 2, .. }));
}

#[test]
fn pathological_nesting_fails_fast() {
    let input = "(".repeat(100_000);
    let err = Parser::parse(&input).unwrap_err();
    assert!(matches!(err, ParseError::NestingTooDeep { .. }));
    assert_eq!(err.index(), DEFAULT_MAX_DEPTH);
}

#[test]
fn raised_limit_allows_deeper_input() {
    let ast = Parser::parse_with_config(&nested(200), with_max(200)).unwrap();
    assert_eq!(ast.max_nesting_depth(), 200);
}

/// Run `f` on a thread with room for the deepest supported input in
/// unoptimized builds.
fn with_large_stack(f: impl FnOnce() + Send + 'static) {
    std::thread::Builder::new()
        .stack_size(16 << 20)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn limit_is_clamped_to_supported_maximum() {
    let config = with_max(usize::MAX);
    assert_eq!(config.effective_max_depth(), MAX_SUPPORTED_DEPTH);
    assert_eq!(with_max(3).effective_max_depth(), 3);
}

#[test]
fn unbounded_limit_still_rejects_past_supported_maximum() {
    with_large_stack(|| {
        let err = Parser::parse_with_config(&nested(2_000), with_max(1_000_000)).unwrap_err();
        assert_eq!(
            err,
            ParseError::NestingTooDeep {
                depth: MAX_SUPPORTED_DEPTH + 1,
                max: MAX_SUPPORTED_DEPTH,
                index: MAX_SUPPORTED_DEPTH,
                span: crate::Span::new(MAX_SUPPORTED_DEPTH, MAX_SUPPORTED_DEPTH + 1),
            }
        );
    });
}

#[test]
fn supported_maximum_is_accepted() {
    with_large_stack(|| {
        let ast =
            Parser::parse_with_config(&nested(MAX_SUPPORTED_DEPTH), with_max(usize::MAX)).unwrap();
        assert_eq!(ast.max_nesting_depth(), MAX_SUPPORTED_DEPTH);
    });
}
