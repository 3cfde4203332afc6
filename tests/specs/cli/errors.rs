//! Syntax and usage error specs
//!
//! Syntax errors exit 2 with a caret diagnostic; usage errors exit 1.

use crate::prelude::*;

#[test]
fn missing_operand_at_end() {
    cli()
        .args(&["parse", "a &&"])
        .fails()
        .code(2)
        .stdout_empty()
        .stderr_eq(
            "\
error: unexpected end of input at token 2, expected a command
  --> column 5
   |
  1 | a &&
   |     ^
",
        );
}

#[test]
fn empty_pipeline_stage() {
    cli()
        .args(&["parse", "ls | )"])
        .fails()
        .code(2)
        .stderr_eq(
            "\
error: empty pipeline at token 2: found ')', expected a command
  --> column 6
   |
  1 | ls | )
   |      ^
",
        );
}

#[test]
fn unclosed_subshell() {
    cli()
        .args(&["parse", "(a && b"])
        .fails()
        .code(2)
        .stderr_has("unexpected end of input at token 4, expected ')'");
}

#[test]
fn trailing_input() {
    cli()
        .args(&["parse", "a ) b"])
        .fails()
        .code(2)
        .stderr_has("unexpected trailing ')' at token 1, expected end of input");
}

#[test]
fn syntax_error_from_stdin_points_at_line() {
    cli()
        .args(&["parse"])
        .stdin("echo a\n| &&\n")
        .fails()
        .code(2)
        .stderr_has("--> line 2, column 3");
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cli()
        .args(&["frobnicate"])
        .fails()
        .code(1)
        .stderr_has("frobnicate");
}

#[test]
fn invalid_output_format_is_usage_error() {
    cli()
        .args(&["parse", "-o", "yaml", "ls"])
        .fails()
        .code(1)
        .stderr_has("invalid value 'yaml'");
}

#[test]
fn max_depth_above_supported_maximum_is_usage_error() {
    cli()
        .args(&["parse", "--max-depth", "5000", "(a)"])
        .fails()
        .code(1)
        .stdout_empty()
        .stderr_has("invalid value '5000'")
        .stderr_has("exceeds the supported maximum of 256");
}

#[test]
fn env_max_depth_above_supported_maximum_is_usage_error() {
    cli()
        .args(&["parse", "(a)"])
        .env("SHTREE_MAX_DEPTH", "1000000")
        .fails()
        .code(1)
        .stderr_has("invalid SHTREE_MAX_DEPTH '1000000'");
}

#[test]
fn unparsable_env_max_depth_is_usage_error() {
    cli()
        .args(&["parse", "a"])
        .env("SHTREE_MAX_DEPTH", "deep")
        .fails()
        .code(1)
        .stderr_has("invalid SHTREE_MAX_DEPTH 'deep'");
}

#[test]
fn deep_input_at_supported_maximum_is_a_syntax_error_not_a_crash() {
    let input = "(".repeat(100_000);
    let run = cli()
        .args(&["parse", "--max-depth", "256"])
        .stdin(&input)
        .fails()
        .code(2)
        .stderr_has("nesting");
    assert!(run.stderr().len() < 1_000, "diagnostic not cut: {} bytes", run.stderr().len());
}
