//! `shtree tokens` output specs

use crate::prelude::*;

#[test]
fn one_token_per_line() {
    cli()
        .args(&["tokens", "grep -v x>>out.log&&wc"])
        .passes()
        .stdout_eq("WORD\tgrep\nWORD\t-v\nWORD\tx\nREDIR_APPEND\t>>\nWORD\tout.log\nAND_AND\t&&\nWORD\twc\n");
}

#[test]
fn quotes_and_escapes_are_removed() {
    cli()
        .args(&["tokens", r#"echo "a | b" c\ d"#])
        .passes()
        .stdout_eq("WORD\techo\nWORD\ta | b\nWORD\tc d\n");
}

#[test]
fn tokens_from_stdin() {
    cli()
        .args(&["tokens"])
        .stdin("a || b\n")
        .passes()
        .stdout_eq("WORD\ta\nOR_OR\t||\nWORD\tb\n");
}

#[test]
fn tokenizing_never_fails() {
    cli().args(&["tokens", "'unterminated ) (("]).passes();
}

#[test]
fn blank_input_has_no_tokens() {
    cli().args(&["tokens", " "]).passes().stdout_empty();
}

#[test]
fn json_array() {
    let run = cli().args(&["tokens", "-o", "json", "(a)"]).passes();
    let value = run.stdout_json();
    let kinds: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, ["LPAREN", "WORD", "RPAREN"]);
    assert_eq!(value[1]["span"], serde_json::json!({ "start": 1, "end": 2 }));
}
