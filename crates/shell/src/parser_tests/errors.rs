// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax errors: kind, position and what was expected.

use crate::parse_error::{Expected, GroupKind, ParseError};
use crate::parser::Parser;
use crate::token::{Span, TokenKind};

fn parse_err(input: &str) -> ParseError {
    match Parser::parse(input) {
        Ok(ast) => panic!("expected {input:?} to fail, got {ast:?}"),
        Err(e) => e,
    }
}

#[yare::parameterized(
    unclosed_subshell      = { "(a && b",     "UnexpectedEndOfInput", 4 },
    stray_close            = { "a)",          "TrailingInput",        1 },
    empty_parens           = { "()",          "EmptyGroup",           1 },
    missing_target         = { "echo >",      "UnexpectedEndOfInput", 2 },
    target_is_operator     = { "echo > |",    "UnexpectedToken",      2 },
    leading_pipe           = { "| a",         "EmptyGroup",           0 },
    trailing_pipe          = { "a |",         "UnexpectedEndOfInput", 2 },
    double_pipe_gap        = { "a | | b",     "EmptyGroup",           2 },
    leading_and            = { "&& a",        "EmptyGroup",           0 },
    trailing_or            = { "a ||",        "UnexpectedEndOfInput", 2 },
    doubled_and            = { "a && && b",   "EmptyGroup",           2 },
    lone_close             = { ")",           "UnexpectedToken",      0 },
    open_inside_command    = { "(a b (c))",   "UnexpectedToken",      3 },
    subshell_after_word    = { "a (b)",       "TrailingInput",        1 },
    redirected_subshell    = { "(a) > out",   "TrailingInput",        3 },
    nested_empty           = { "(()",         "EmptyGroup",           2 },
    lone_open              = { "(",           "UnexpectedEndOfInput", 1 },
)]
fn error_kind_and_index(input: &str, kind: &str, index: usize) {
    let err = parse_err(input);
    assert_eq!(err.kind_name(), kind, "{input:?}: {err}");
    assert_eq!(err.index(), index, "{input:?}: {err}");
}

#[test]
fn unclosed_subshell_expects_rparen() {
    assert_eq!(
        parse_err("(a && b"),
        ParseError::UnexpectedEndOfInput {
            expected: Expected::Token(TokenKind::RParen),
            index: 4,
            offset: 7,
        }
    );
}

#[test]
fn stray_close_is_trailing_input() {
    assert_eq!(
        parse_err("a)"),
        ParseError::TrailingInput {
            found: TokenKind::RParen,
            text: ")".to_string(),
            index: 1,
            span: Span::new(1, 2),
        }
    );
}

#[test]
fn empty_parens_are_empty_subshell() {
    assert_eq!(
        parse_err("()"),
        ParseError::EmptyGroup {
            group: GroupKind::Subshell,
            found: TokenKind::RParen,
            text: ")".to_string(),
            index: 1,
            span: Span::new(1, 2),
        }
    );
}

#[test]
fn empty_parens_with_space_are_empty_subshell() {
    assert!(matches!(
        parse_err("(   )"),
        ParseError::EmptyGroup {
            group: GroupKind::Subshell,
            ..
        }
    ));
}

#[test]
fn missing_redirection_target_expects_word() {
    assert_eq!(
        parse_err("echo >"),
        ParseError::UnexpectedEndOfInput {
            expected: Expected::Token(TokenKind::Word),
            index: 2,
            offset: 6,
        }
    );
}

#[test]
fn redirection_target_cannot_be_operator() {
    let err = parse_err("cat < | wc");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: Expected::Token(TokenKind::Word),
            found: TokenKind::Pipe,
            index: 2,
            ..
        }
    ));
}

#[yare::parameterized(
    leading_pipe   = { "| a",       GroupKind::Pipeline },
    pipe_gap       = { "a | | b",   GroupKind::Pipeline },
    pipe_then_and  = { "a | && b",  GroupKind::Pipeline },
    pipe_then_rpar = { "(a | )",    GroupKind::Pipeline },
    leading_and    = { "&& a",      GroupKind::AndOr },
    leading_or     = { "|| a",      GroupKind::AndOr },
    and_then_pipe  = { "a && | b",  GroupKind::AndOr },
    and_then_rpar  = { "(a && )",   GroupKind::AndOr },
    in_group_pipe  = { "( | a)",    GroupKind::Pipeline },
    empty_parens   = { "x | ()",    GroupKind::Subshell },
)]
fn empty_group_names_missing_operand(input: &str, group: GroupKind) {
    match parse_err(input) {
        ParseError::EmptyGroup { group: found, .. } => assert_eq!(found, group),
        other => panic!("{input:?}: expected EmptyGroup, got {other:?}"),
    }
}

#[test]
fn missing_operand_at_end_expects_command() {
    for input in ["a |", "a &&", "a ||", "(a |"] {
        let err = parse_err(input);
        assert!(
            matches!(
                err,
                ParseError::UnexpectedEndOfInput {
                    expected: Expected::Command,
                    ..
                }
            ),
            "{input:?}: {err:?}"
        );
    }
}

#[test]
fn lone_close_expects_command() {
    assert!(matches!(
        parse_err(")"),
        ParseError::UnexpectedToken {
            expected: Expected::Command,
            found: TokenKind::RParen,
            ..
        }
    ));
}

#[test]
fn unbalanced_open_inside_subshell_expects_rparen() {
    let err = parse_err("(a b (c))");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: Expected::Token(TokenKind::RParen),
            found: TokenKind::LParen,
            index: 3,
            ..
        }
    ));
}

#[test]
fn trailing_tokens_after_complete_line() {
    let err = parse_err("a && b ) c");
    assert!(matches!(
        err,
        ParseError::TrailingInput {
            found: TokenKind::RParen,
            index: 3,
            ..
        }
    ));
}

#[test]
fn error_span_points_at_offending_token() {
    let input = "ls | && wc";
    let err = parse_err(input);
    assert_eq!(err.span().slice(input), "&&");
}

#[test]
fn unterminated_quote_is_not_an_error() {
    let ast = Parser::parse("echo 'open").unwrap();
    assert_eq!(ast.command_names(), ["echo"]);
}
