//! `shtree parse` output specs

use crate::prelude::*;

#[test]
fn outline_for_argument() {
    cli()
        .args(&["parse", "cat < in | sort && echo ok"])
        .passes()
        .stdout_eq(
            "\
Sequence
└── AndOr &&
    ├── Pipeline |
    │   ├── Command
    │   │   ├── SimpleCommand
    │   │   │   └── Word \"cat\"
    │   │   └── Redirection <
    │   │       └── Word \"in\"
    │   └── Command
    │       └── SimpleCommand
    │           └── Word \"sort\"
    └── Pipeline
        └── Command
            └── SimpleCommand
                ├── Word \"echo\"
                └── Word \"ok\"
",
        );
}

#[test]
fn reads_stdin_when_input_is_omitted() {
    cli()
        .args(&["parse"])
        .stdin("(ls)\n")
        .passes()
        .stdout_eq(
            "\
Sequence
└── AndOr
    └── Pipeline
        └── Subshell
            └── AndOr
                └── Pipeline
                    └── Command
                        └── SimpleCommand
                            └── Word \"ls\"
",
        );
}

#[test]
fn blank_input_is_empty() {
    cli().args(&["parse", "   "]).passes().stdout_eq("Empty\n");
}

#[test]
fn json_output() {
    let run = cli().args(&["parse", "-o", "json", "echo 'a b'"]).passes();
    let value = run.stdout_json();
    assert_eq!(value["type"], "Sequence");
    let words = &value["body"]["first"]["first"]["simple"]["words"];
    assert_eq!(words[1]["value"], "a b");
    assert_eq!(words[1]["quoted"], true);
}

#[test]
fn json_output_for_blank_input() {
    let run = cli().args(&["--output", "json", "parse", ""]).passes();
    assert_eq!(run.stdout_json(), serde_json::json!({ "type": "Empty" }));
}

#[test]
fn max_depth_flag_limits_nesting() {
    cli().args(&["parse", "--max-depth", "2", "((a))"]).passes();
    cli()
        .args(&["parse", "--max-depth", "1", "((a))"])
        .fails()
        .code(2)
        .stderr_has("subshell nesting depth 2 at token 1 exceeds the limit of 1");
}

#[test]
fn max_depth_from_environment() {
    cli()
        .args(&["parse", "(a)"])
        .env("SHTREE_MAX_DEPTH", "0")
        .fails()
        .code(2)
        .stderr_has("exceeds the limit of 0");
}

#[test]
fn max_depth_flag_beats_environment() {
    cli()
        .args(&["parse", "--max-depth", "1", "(a)"])
        .env("SHTREE_MAX_DEPTH", "0")
        .passes();
}

#[test]
fn debug_logging_goes_to_stderr() {
    cli()
        .args(&["parse", "-o", "json", "ls"])
        .env("SHTREE_LOG", "debug")
        .passes()
        .stderr_has("parsed command line");
}
