// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Precedence, associativity and grouping.

use crate::ast::{LogicalOp, Unit, Word};
use crate::parser::Parser;
use crate::test_support::{parse_ok, sequence, shape_of, single_command, words};
use crate::token::Span;

// =============================================================================
// Blank Input
// =============================================================================

#[yare::parameterized(
    empty    = { "" },
    spaces   = { "   " },
    tabs     = { "\t \t" },
    newlines = { "\n\n" },
)]
fn blank_input_is_empty(input: &str) {
    assert!(Parser::parse(input).unwrap().is_empty());
}

// =============================================================================
// Simple Commands
// =============================================================================

#[test]
fn single_word() {
    let ast = parse_ok("ls");
    assert_eq!(words(single_command(&ast)), ["ls"]);
}

#[test]
fn words_keep_argument_order() {
    let ast = parse_ok("grep -n pattern file.txt");
    let cmd = single_command(&ast);
    let simple = cmd.simple.as_ref().unwrap();
    assert_eq!(simple.name().map(Word::as_str), Some("grep"));
    let args: Vec<&str> = simple.args().iter().map(|w| w.as_str()).collect();
    assert_eq!(args, ["-n", "pattern", "file.txt"]);
    assert!(cmd.redirections.is_empty());
}

#[test]
fn command_span_covers_words() {
    let ast = parse_ok("  echo hi  ");
    let cmd = single_command(&ast);
    assert_eq!(cmd.span, Span::new(2, 9));
    assert_eq!(sequence(&ast).span, Span::new(2, 9));
}

#[test]
fn lone_ampersand_is_an_argument() {
    let ast = parse_ok("sleep 1 &");
    assert_eq!(words(single_command(&ast)), ["sleep", "1", "&"]);
}

#[test]
fn quoted_operators_stay_in_one_word() {
    let ast = parse_ok(r#"echo "a && b""#);
    let cmd = single_command(&ast);
    assert_eq!(words(cmd), ["echo", "a && b"]);
    assert!(cmd.simple.as_ref().unwrap().words[1].quoted);
}

#[test]
fn single_quoted_pipe_is_literal() {
    let ast = parse_ok("printf '%s|%s' a b");
    assert_eq!(words(single_command(&ast)), ["printf", "%s|%s", "a", "b"]);
}

#[test]
fn empty_quoted_argument_is_kept() {
    let ast = parse_ok("test -n ''");
    assert_eq!(words(single_command(&ast)), ["test", "-n", ""]);
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn pipe_binds_tighter_than_and() {
    let ast = parse_ok("a && b | c");
    let body = &sequence(&ast).body;

    assert_eq!(body.first.len(), 1);
    assert_eq!(body.rest.len(), 1);
    let (op, right) = &body.rest[0];
    assert_eq!(*op, LogicalOp::And);
    assert_eq!(right.len(), 2);
}

#[test]
fn pipe_never_splits_above_and_or() {
    assert_eq!(
        shape_of("a && b | c"),
        "Sequence(AndOr[&&](\
         Pipeline(Command(SimpleCommand(Word[a]))) \
         Pipeline[|](Command(SimpleCommand(Word[b])) Command(SimpleCommand(Word[c])))))"
    );
}

#[test]
fn pipe_on_left_of_or() {
    let ast = parse_ok("a | b || c");
    let body = &sequence(&ast).body;
    assert_eq!(body.first.len(), 2);
    assert_eq!(body.rest[0].0, LogicalOp::Or);
    assert_eq!(body.rest[0].1.len(), 1);
}

#[test]
fn and_or_share_one_level_left_to_right() {
    let ast = parse_ok("a || b && c || d");
    let body = &sequence(&ast).body;
    let ops: Vec<LogicalOp> = body.operators().collect();
    assert_eq!(ops, [LogicalOp::Or, LogicalOp::And, LogicalOp::Or]);
    assert_eq!(body.pipelines().count(), 4);
    assert!(body.pipelines().all(|p| p.len() == 1));
}

#[test]
fn spacing_does_not_change_structure() {
    assert_eq!(shape_of("a&&b|c"), shape_of("a  &&  b |  c"));
    assert_eq!(shape_of("(a)|b"), shape_of("( a ) | b"));
}

#[test]
fn newline_is_whitespace() {
    assert_eq!(shape_of("a\n&& b"), shape_of("a && b"));
}

// =============================================================================
// Associativity
// =============================================================================

#[test]
fn pipeline_is_flat_and_ordered() {
    let ast = parse_ok("a | b | c");
    let pipeline = &sequence(&ast).body.first;
    assert_eq!(pipeline.len(), 3);
    assert!(pipeline.units().all(|u| matches!(u, Unit::Command(_))));
    assert_eq!(ast.command_names(), ["a", "b", "c"]);
}

#[test]
fn long_and_chain_is_flat() {
    let ast = parse_ok("a && b && c && d && e");
    let body = &sequence(&ast).body;
    assert_eq!(body.len(), 5);
    assert!(body.operators().all(|op| op == LogicalOp::And));
}

// =============================================================================
// Subshells
// =============================================================================

#[test]
fn subshell_groups_first_pipeline_stage() {
    let ast = parse_ok("(a && b) | c");
    let pipeline = &sequence(&ast).body.first;
    assert_eq!(pipeline.len(), 2);

    let Unit::Subshell(sub) = &pipeline.first else {
        panic!("expected subshell first");
    };
    assert_eq!(sub.body.len(), 2);
    assert_eq!(sub.body.rest[0].0, LogicalOp::And);
    assert!(matches!(&pipeline.rest[0], Unit::Command(c) if c.name().unwrap().as_str() == "c"));
}

#[test]
fn subshell_holds_full_and_or() {
    assert_eq!(
        shape_of("(a && b | c)"),
        "Sequence(AndOr(Pipeline(Subshell(AndOr[&&](\
         Pipeline(Command(SimpleCommand(Word[a]))) \
         Pipeline[|](Command(SimpleCommand(Word[b])) Command(SimpleCommand(Word[c]))))))))"
    );
}

#[test]
fn subshell_as_and_or_operand() {
    let ast = parse_ok("a || (b && c)");
    let body = &sequence(&ast).body;
    assert!(matches!(body.rest[0].1.first, Unit::Subshell(_)));
}

#[test]
fn nested_subshells() {
    let ast = parse_ok("((a))");
    assert_eq!(ast.max_nesting_depth(), 2);
    assert_eq!(
        shape_of("((a))"),
        "Sequence(AndOr(Pipeline(Subshell(AndOr(Pipeline(Subshell(AndOr(Pipeline(\
         Command(SimpleCommand(Word[a])))))))))))"
    );
}

#[test]
fn subshell_span_includes_parens() {
    let ast = parse_ok("x | ( y )");
    let pipeline = &sequence(&ast).body.first;
    assert_eq!(pipeline.rest[0].span(), Span::new(4, 9));
    assert_eq!(pipeline.span, Span::new(0, 9));
}

#[test]
fn subshell_without_spaces() {
    assert_eq!(shape_of("(a)|(b)"), shape_of("(a) | (b)"));
}
