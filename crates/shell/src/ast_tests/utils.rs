// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::ast::{AndOr, Ast, Command, Pipeline, Sequence, SimpleCommand, Unit, Word};
use crate::test_support::parse_ok;
use crate::token::Span;

fn hand_built(words: Vec<Word>) -> SimpleCommand {
    SimpleCommand {
        words,
        span: Span::empty(0),
    }
}

/// `simple` as the only command of a one-stage line.
fn line_of(simple: SimpleCommand) -> Ast {
    let span = simple.span;
    let command = Command {
        simple: Some(simple),
        redirections: Vec::new(),
        span,
    };
    let pipeline = Pipeline {
        first: Unit::Command(command),
        rest: Vec::new(),
        span,
    };
    let body = AndOr {
        first: pipeline,
        rest: Vec::new(),
        span,
    };
    Ast::Sequence(Sequence { body, span })
}

#[yare::parameterized(
    empty        = { "",                          0 },
    single       = { "ls",                        1 },
    pipeline     = { "a | b | c",                 3 },
    and_or       = { "a && b || c",               3 },
    subshells    = { "(a | (b && c)) || d",       4 },
    redir_only   = { "> out",                     1 },
)]
fn count_commands(input: &str, count: usize) {
    assert_eq!(parse_ok(input).count_commands(), count);
}

#[test]
fn command_names_in_source_order() {
    let ast = parse_ok("git diff | (grep x && wc -l) || echo none");
    assert_eq!(ast.command_names(), ["git", "grep", "wc", "echo"]);
}

#[test]
fn command_names_skip_redirection_only_commands() {
    let ast = parse_ok("> log && cat log");
    assert_eq!(ast.command_names(), ["cat"]);
    assert_eq!(ast.count_commands(), 2);
}

#[test]
fn command_names_use_unquoted_value() {
    let ast = parse_ok("'my tool' --flag");
    assert_eq!(ast.command_names(), ["my tool"]);
}

#[yare::parameterized(
    flat         = { "a | b && c",              0 },
    one          = { "(a)",                     1 },
    siblings     = { "(a) | (b) || (c)",        1 },
    deepest_wins = { "(a) | ((b) && (((c))))",  4 },
)]
fn max_nesting_depth(input: &str, depth: usize) {
    assert_eq!(parse_ok(input).max_nesting_depth(), depth);
}

#[test]
fn parse_matches_parser() {
    assert_eq!(Ast::parse("a && b").unwrap(), parse_ok("a && b"));
    assert!(Ast::parse("a &&").is_err());
}

#[test]
fn sequence_accessor() {
    assert!(parse_ok("").sequence().is_none());
    assert!(parse_ok("").is_empty());
    assert_eq!(parse_ok("a").sequence().unwrap().body.len(), 1);
}

#[test]
fn name_and_args_split_words() {
    let simple = hand_built(vec![
        Word::literal("grep", Span::new(0, 4)),
        Word::literal("-n", Span::new(5, 7)),
        Word::literal("x", Span::new(8, 9)),
    ]);
    assert_eq!(simple.name().map(Word::as_str), Some("grep"));
    let args: Vec<&str> = simple.args().iter().map(Word::as_str).collect();
    assert_eq!(args, ["-n", "x"]);

    let bare = hand_built(vec![Word::literal("ls", Span::new(0, 2))]);
    assert_eq!(bare.name().map(Word::as_str), Some("ls"));
    assert!(bare.args().is_empty());
}

#[test]
fn empty_simple_command_has_no_name_or_args() {
    let simple = hand_built(Vec::new());
    assert!(simple.name().is_none());
    assert!(simple.args().is_empty());

    let ast = line_of(simple);
    assert!(ast.command_names().is_empty());
    assert_eq!(ast.count_commands(), 1);
}
