// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property tests over arbitrary and grammar-generated command lines.

use proptest::prelude::*;

use crate::parser::Parser;
use crate::test_support::shape;
use crate::token::Span;

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9._-]{1,6}",
        1 => "'[a-z &|()<>]{0,5}'",
        1 => "\"[a-z '|]{0,5}\"",
        1 => "[a-z]{1,3}\\\\[ &|()][a-z]{0,3}",
    ]
}

fn redirection() -> impl Strategy<Value = String> {
    (prop_oneof![Just("<"), Just(">"), Just(">>"), Just("<<")], word())
        .prop_map(|(op, target)| format!("{op} {target}"))
}

fn command() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(word(), 1..4),
        prop::collection::vec(redirection(), 0..3),
    )
        .prop_map(|(words, redirs)| {
            words
                .into_iter()
                .chain(redirs)
                .collect::<Vec<_>>()
                .join(" ")
        })
}

fn and_or(unit: BoxedStrategy<String>) -> BoxedStrategy<String> {
    let pipeline = || prop::collection::vec(unit.clone(), 1..4).prop_map(|units| units.join(" | "));
    (
        pipeline(),
        prop::collection::vec((prop_oneof![Just("&&"), Just("||")], pipeline()), 0..3),
    )
        .prop_map(|(first, rest)| {
            rest.into_iter().fold(first, |mut line, (op, pipeline)| {
                line.push_str(&format!(" {op} {pipeline}"));
                line
            })
        })
        .boxed()
}

/// Well-formed command lines with up to four levels of subshells.
fn command_line() -> impl Strategy<Value = String> {
    let unit = command()
        .boxed()
        .prop_recursive(4, 32, 3, |inner| and_or(inner).prop_map(|s| format!("({s})")));
    and_or(unit.boxed())
}

proptest! {
    #[test]
    fn never_panics(input in "\\PC{0,64}") {
        let _ = Parser::parse(&input);
    }

    #[test]
    fn never_panics_on_operator_soup(input in "[a-z&|<>() '\"\\\\\n]{0,48}") {
        let _ = Parser::parse(&input);
    }

    #[test]
    fn parsing_is_deterministic(input in "[a-z&|<>() ']{0,32}") {
        prop_assert_eq!(Parser::parse(&input), Parser::parse(&input));
    }

    #[test]
    fn errors_point_inside_input(input in "[a-z&|<>() ]{0,32}") {
        if let Err(err) = Parser::parse(&input) {
            let span: Span = err.span();
            prop_assert!(span.start <= span.end);
            prop_assert!(span.end <= input.len());
        }
    }

    #[test]
    fn generated_lines_parse(line in command_line()) {
        let result = Parser::parse(&line);
        prop_assert!(result.is_ok(), "{:?} failed: {:?}", line, result);
    }

    #[test]
    fn rendering_reparses_to_same_shape(line in command_line()) {
        let ast = Parser::parse(&line).unwrap();
        let rendered = ast.to_string();
        let reparsed = Parser::parse(&rendered).unwrap();
        prop_assert_eq!(shape(reparsed.root()), shape(ast.root()), "rendered as {:?}", rendered);
    }

    #[test]
    fn rendering_is_a_fixed_point(line in command_line()) {
        let once = Parser::parse(&line).unwrap().to_string();
        let twice = Parser::parse(&once).unwrap().to_string();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn nesting_never_exceeds_generated_depth(line in command_line()) {
        let ast = Parser::parse(&line).unwrap();
        prop_assert!(ast.max_nesting_depth() <= 4);
        let opens = line.matches('(').count();
        prop_assert!(ast.count_commands() >= 1);
        prop_assert!(ast.max_nesting_depth() <= opens);
    }
}
