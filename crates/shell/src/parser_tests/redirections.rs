// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection attachment.

use crate::ast::{RedirectOp, Unit};
use crate::test_support::{parse_ok, sequence, single_command, words};
use crate::token::Span;

#[test]
fn output_redirection_after_words() {
    let ast = parse_ok("echo hi > out.txt");
    let cmd = single_command(&ast);

    assert_eq!(words(cmd), ["echo", "hi"]);
    assert_eq!(cmd.redirections.len(), 1);
    assert_eq!(cmd.redirections[0].op, RedirectOp::Out);
    assert_eq!(cmd.redirections[0].target.as_str(), "out.txt");
    assert_eq!(cmd.redirections[0].span, Span::new(8, 17));
    assert_eq!(cmd.span, Span::new(0, 17));
}

#[test]
fn redirection_before_words_attaches_to_same_command() {
    let leading = parse_ok("> out.txt echo hi");
    let trailing = parse_ok("echo hi > out.txt");

    let a = single_command(&leading);
    let b = single_command(&trailing);
    assert_eq!(words(a), words(b));
    assert_eq!(a.redirections.len(), 1);
    assert_eq!(a.redirections[0].op, b.redirections[0].op);
    assert_eq!(a.redirections[0].target.value, b.redirections[0].target.value);
}

#[test]
fn redirections_interleave_with_words() {
    let ast = parse_ok("sort < in.txt -r > out.txt -u");
    let cmd = single_command(&ast);

    assert_eq!(words(cmd), ["sort", "-r", "-u"]);
    let redirs: Vec<(RedirectOp, &str)> = cmd
        .redirections
        .iter()
        .map(|r| (r.op, r.target.as_str()))
        .collect();
    assert_eq!(
        redirs,
        [(RedirectOp::In, "in.txt"), (RedirectOp::Out, "out.txt")]
    );
    // Simple command span runs from the first word to the last one
    assert_eq!(cmd.simple.as_ref().unwrap().span, Span::new(0, 29));
}

#[yare::parameterized(
    input   = { "cat < f",  RedirectOp::In },
    output  = { "cat > f",  RedirectOp::Out },
    append  = { "cat >> f", RedirectOp::Append },
    heredoc = { "cat << f", RedirectOp::HereDoc },
)]
fn each_operator(input: &str, op: RedirectOp) {
    let ast = parse_ok(input);
    let cmd = single_command(&ast);
    assert_eq!(words(cmd), ["cat"]);
    assert_eq!(cmd.redirections[0].op, op);
    assert_eq!(cmd.redirections[0].target.as_str(), "f");
}

#[test]
fn redirection_without_words() {
    let ast = parse_ok("> empty.txt");
    let cmd = single_command(&ast);
    assert!(cmd.simple.is_none());
    assert!(cmd.name().is_none());
    assert_eq!(cmd.redirections[0].target.as_str(), "empty.txt");
}

#[test]
fn several_redirections_keep_order() {
    let ast = parse_ok("cmd >> log 2 > err");
    let cmd = single_command(&ast);
    assert_eq!(words(cmd), ["cmd", "2"]);
    let ops: Vec<RedirectOp> = cmd.redirections.iter().map(|r| r.op).collect();
    assert_eq!(ops, [RedirectOp::Append, RedirectOp::Out]);
}

#[test]
fn quoted_target() {
    let ast = parse_ok("echo x > 'my file.txt'");
    let target = &single_command(&ast).redirections[0].target;
    assert_eq!(target.as_str(), "my file.txt");
    assert!(target.quoted);
}

#[test]
fn heredoc_delimiter_is_a_word() {
    let ast = parse_ok("cat << EOF | wc -l");
    let pipeline = &sequence(&ast).body.first;
    let Unit::Command(cat) = &pipeline.first else {
        panic!("expected command");
    };
    assert_eq!(cat.redirections[0].op, RedirectOp::HereDoc);
    assert_eq!(cat.redirections[0].target.as_str(), "EOF");
    assert_eq!(pipeline.len(), 2);
}

#[test]
fn redirection_stays_with_its_pipeline_stage() {
    let ast = parse_ok("a > x | b < y");
    let pipeline = &sequence(&ast).body.first;
    let targets: Vec<Vec<&str>> = pipeline
        .units()
        .map(|u| match u {
            Unit::Command(c) => c.redirections.iter().map(|r| r.target.as_str()).collect(),
            Unit::Subshell(_) => panic!("unexpected subshell"),
        })
        .collect();
    assert_eq!(targets, [vec!["x"], vec!["y"]]);
}

#[test]
fn redirection_inside_subshell() {
    let ast = parse_ok("(make > build.log) && echo done");
    let body = &sequence(&ast).body;
    let Unit::Subshell(sub) = &body.first.first else {
        panic!("expected subshell");
    };
    let Unit::Command(make) = &sub.body.first.first else {
        panic!("expected command");
    };
    assert_eq!(make.redirections[0].target.as_str(), "build.log");
}
