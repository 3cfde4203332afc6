// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for unit tests.

use crate::{parse, Ast, Command, Node, Sequence, Unit};

/// Parse or fail the test with the error message.
pub fn parse_ok(input: &str) -> Ast {
    parse(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

/// The sequence of a non-blank input.
pub fn sequence(ast: &Ast) -> &Sequence {
    match ast {
        Ast::Sequence(seq) => seq,
        Ast::Empty => panic!("expected a sequence, got Empty"),
    }
}

/// The only command of a single-command input.
pub fn single_command(ast: &Ast) -> &Command {
    let body = &sequence(ast).body;
    assert!(body.rest.is_empty(), "expected one pipeline");
    assert!(body.first.rest.is_empty(), "expected one pipeline stage");
    match &body.first.first {
        Unit::Command(cmd) => cmd,
        Unit::Subshell(_) => panic!("expected a command, got a subshell"),
    }
}

/// Word values of a command, in order.
pub fn words(cmd: &Command) -> Vec<&str> {
    cmd.simple
        .iter()
        .flat_map(|s| s.words.iter().map(|w| w.as_str()))
        .collect()
}

/// Compact structural rendering: `Kind[label](child child)`.
///
/// Spans and quoting flags are ignored, so two trees with the same shape
/// compare equal even when parsed from differently spaced input.
pub fn shape(node: Node<'_>) -> String {
    let mut out = node.kind().as_str().to_string();
    if let Some(label) = node.label() {
        out.push('[');
        out.push_str(&label);
        out.push(']');
    }
    let children = node.children();
    if !children.is_empty() {
        let inner: Vec<String> = children.into_iter().map(shape).collect();
        out.push('(');
        out.push_str(&inner.join(" "));
        out.push(')');
    }
    out
}

pub fn shape_of(input: &str) -> String {
    shape(parse_ok(input).root())
}
