// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Uniform node view.

use crate::ast::{Node, NodeKind};
use crate::test_support::{parse_ok, shape};
use crate::token::Span;

fn kinds(nodes: &[Node<'_>]) -> Vec<NodeKind> {
    nodes.iter().map(Node::kind).collect()
}

#[test]
fn empty_root_is_a_leaf() {
    let ast = parse_ok("");
    let root = ast.root();
    assert_eq!(root.kind(), NodeKind::Empty);
    assert!(root.children().is_empty());
    assert!(root.label().is_none());
    assert!(root.span().is_none());
}

#[test]
fn sequence_wraps_one_and_or() {
    let ast = parse_ok("ls");
    let root = ast.root();
    assert_eq!(root.kind(), NodeKind::Sequence);
    assert_eq!(kinds(&root.children()), [NodeKind::AndOr]);
    assert_eq!(root.span(), Some(Span::new(0, 2)));
}

#[test]
fn and_or_label_lists_operators() {
    let ast = parse_ok("a && b || c");
    let and_or = ast.root().children()[0];
    assert_eq!(and_or.label().as_deref(), Some("&& ||"));
    assert_eq!(and_or.children().len(), 3);
}

#[test]
fn single_operand_chains_have_no_label() {
    let ast = parse_ok("a");
    let and_or = ast.root().children()[0];
    let pipeline = and_or.children()[0];
    assert!(and_or.label().is_none());
    assert!(pipeline.label().is_none());
}

#[test]
fn command_children_put_words_before_redirections() {
    let ast = parse_ok("> out echo hi");
    let pipeline = ast.root().children()[0].children()[0];
    let command = pipeline.children()[0];
    assert_eq!(command.kind(), NodeKind::Command);
    assert_eq!(
        kinds(&command.children()),
        [NodeKind::SimpleCommand, NodeKind::Redirection]
    );
}

#[test]
fn redirection_label_is_operator_and_child_is_target() {
    let ast = parse_ok("cmd >> log");
    let command = ast.root().children()[0].children()[0].children()[0];
    let redir = command.children()[1];
    assert_eq!(redir.label().as_deref(), Some(">>"));
    let target = redir.children()[0];
    assert_eq!(target.kind(), NodeKind::Word);
    assert_eq!(target.label().as_deref(), Some("log"));
    assert!(target.children().is_empty());
}

#[test]
fn subshell_wraps_and_or() {
    let ast = parse_ok("(a | b)");
    let unit = ast.root().children()[0].children()[0].children()[0];
    assert_eq!(unit.kind(), NodeKind::Subshell);
    assert_eq!(unit.span(), Some(Span::new(0, 7)));
    assert_eq!(kinds(&unit.children()), [NodeKind::AndOr]);
}

#[test]
fn shape_of_full_tree() {
    let ast = parse_ok("cat < in | (sort && uniq)");
    assert_eq!(
        shape(ast.root()),
        "Sequence(AndOr(Pipeline[|](\
         Command(SimpleCommand(Word[cat]) Redirection[<](Word[in])) \
         Subshell(AndOr[&&](\
         Pipeline(Command(SimpleCommand(Word[sort]))) \
         Pipeline(Command(SimpleCommand(Word[uniq]))))))))"
    );
}

#[test]
fn kind_names() {
    assert_eq!(NodeKind::SimpleCommand.as_str(), "SimpleCommand");
    assert_eq!(NodeKind::AndOr.as_str(), "AndOr");
}
