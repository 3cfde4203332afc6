// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical rendering.

use crate::test_support::{parse_ok, shape_of};

#[yare::parameterized(
    spacing          = { "a&&b|c",              "a && b | c" },
    extra_blanks     = { "  ls   -la  ",        "ls -la" },
    subshell         = { "( a|b )&&c",          "(a | b) && c" },
    nested           = { "((a))",               "((a))" },
    leading_redir    = { "> out echo hi",       "echo hi > out" },
    interleaved      = { "sort <in -r >out",    "sort -r < in > out" },
    heredoc          = { "cat<<EOF",            "cat << EOF" },
    redir_only       = { ">>log",               ">> log" },
    quoted_operator  = { r#"echo "a && b""#,    "echo 'a && b'" },
    apostrophe       = { r#"echo "it's""#,      r#"echo "it's""# },
    both_quotes      = { r#"x "a'b"'"c'"#,      r#"x 'a'"'"'b"c'"# },
    escaped_space    = { r"a\ b",               r"a\ b" },
    escaped_pipe     = { r"echo a\|b",          r"echo a\|b" },
    empty_quoted     = { r#"x """#,             "x ''" },
    lone_ampersand   = { "sleep 1 &",           r"sleep 1 \&" },
    mixed_chain      = { "a||b&&c",             "a || b && c" },
)]
fn renders_canonical_text(input: &str, expected: &str) {
    assert_eq!(parse_ok(input).to_string(), expected);
}

#[test]
fn empty_renders_nothing() {
    assert_eq!(parse_ok("   ").to_string(), "");
}

#[yare::parameterized(
    quoted_operators = { r#"echo "a | b" '&&' x"# },
    escapes          = { r"echo \( a\ b \)" },
    subshells        = { "(a && (b | c)) || d > out" },
    mixed_quotes     = { r#"printf "%s's" 'say "hi"'"# },
)]
fn rendering_reparses_to_same_shape(input: &str) {
    let rendered = parse_ok(input).to_string();
    assert_eq!(shape_of(&rendered), shape_of(input), "rendered as {rendered:?}");
}
