// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn text(input: &str) -> String {
    let ast = shtree_shell::parse(input).unwrap();
    format_ast(&ast, OutputFormat::Text, Palette::new(false)).unwrap()
}

fn json(input: &str) -> serde_json::Value {
    let ast = shtree_shell::parse(input).unwrap();
    let out = format_ast(&ast, OutputFormat::Json, Palette::new(false)).unwrap();
    assert!(out.ends_with('\n'));
    serde_json::from_str(&out).unwrap()
}

#[test]
fn text_output_is_outline() {
    assert!(text("ls").starts_with("Sequence\n└── AndOr\n"));
}

#[test]
fn json_output_is_serialized_ast() {
    let value = json("a | b");
    assert_eq!(value["type"], "Sequence");
    assert_eq!(value["body"]["first"]["rest"][0]["type"], "Command");
}

#[test]
fn json_output_for_blank_input() {
    assert_eq!(json(""), serde_json::json!({ "type": "Empty" }));
}

#[test]
fn syntax_error_exits_with_code_two() {
    let input = "a &&";
    let err = shtree_shell::parse(input).unwrap_err();
    let err = report_syntax_error(input, &err);
    let exit = err.downcast_ref::<ExitError>().unwrap();
    assert_eq!(exit.code, SYNTAX_ERROR);
    assert!(exit.message.is_empty());
}
