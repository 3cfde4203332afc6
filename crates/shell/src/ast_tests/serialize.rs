// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON form of the tree.

use serde_json::json;

use crate::test_support::parse_ok;

#[test]
fn empty_is_tagged() {
    let value = serde_json::to_value(parse_ok("")).unwrap();
    assert_eq!(value, json!({ "type": "Empty" }));
}

#[test]
fn sequence_is_tagged_with_body() {
    let value = serde_json::to_value(parse_ok("a && b")).unwrap();
    assert_eq!(value["type"], "Sequence");
    assert_eq!(value["span"], json!({ "start": 0, "end": 6 }));
    assert_eq!(value["body"]["rest"][0][0], "&&");
    assert_eq!(value["body"]["first"]["first"]["type"], "Command");
}

#[test]
fn command_fields() {
    let value = serde_json::to_value(parse_ok("echo 'hi' > out")).unwrap();
    let command = &value["body"]["first"]["first"];
    assert_eq!(
        command["simple"]["words"][1],
        json!({ "value": "hi", "quoted": true, "span": { "start": 5, "end": 9 } })
    );
    assert_eq!(command["redirections"][0]["op"], ">");
    assert_eq!(command["redirections"][0]["target"]["value"], "out");
}

#[test]
fn redirection_only_command_has_null_simple() {
    let value = serde_json::to_value(parse_ok("< in")).unwrap();
    let command = &value["body"]["first"]["first"];
    assert!(command["simple"].is_null());
    assert_eq!(command["redirections"][0]["op"], "<");
}

#[test]
fn subshell_is_tagged_unit() {
    let value = serde_json::to_value(parse_ok("x | (y)")).unwrap();
    let stage = &value["body"]["first"]["rest"][0];
    assert_eq!(stage["type"], "Subshell");
    assert_eq!(stage["body"]["first"]["first"]["type"], "Command");
}
