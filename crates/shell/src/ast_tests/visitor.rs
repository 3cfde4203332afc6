// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::ast::{AstVisitor, Pipeline, Redirection, Subshell, Word};
use crate::test_support::parse_ok;

#[derive(Default)]
struct WordCollector {
    words: Vec<String>,
}

impl AstVisitor for WordCollector {
    fn visit_word(&mut self, word: &Word) {
        self.words.push(word.value.clone());
    }
}

fn collect_words(input: &str) -> Vec<String> {
    let mut collector = WordCollector::default();
    collector.visit_ast(&parse_ok(input));
    collector.words
}

#[test]
fn visits_words_in_source_order() {
    assert_eq!(
        collect_words("a x | (b > f) && c"),
        ["a", "x", "b", "f", "c"]
    );
}

#[test]
fn visits_command_words_before_redirection_targets() {
    assert_eq!(collect_words("< in sort -u"), ["sort", "-u", "in"]);
}

#[test]
fn empty_ast_visits_nothing() {
    assert!(collect_words("").is_empty());
}

#[test]
fn skipping_walk_prunes_subtree() {
    #[derive(Default)]
    struct OutsideSubshells(Vec<String>);

    impl AstVisitor for OutsideSubshells {
        fn visit_subshell(&mut self, _subshell: &Subshell) {}

        fn visit_word(&mut self, word: &Word) {
            self.0.push(word.value.clone());
        }
    }

    let mut visitor = OutsideSubshells::default();
    visitor.visit_ast(&parse_ok("a | (b && c) || d"));
    assert_eq!(visitor.0, ["a", "d"]);
}

#[test]
fn pipeline_and_redirection_hooks() {
    #[derive(Default)]
    struct Counts {
        pipelines: usize,
        redirections: usize,
    }

    impl AstVisitor for Counts {
        fn visit_pipeline(&mut self, pipeline: &Pipeline) {
            self.pipelines += 1;
            self.walk_pipeline(pipeline);
        }

        fn visit_redirection(&mut self, redir: &Redirection) {
            self.redirections += 1;
            self.walk_redirection(redir);
        }
    }

    let mut counts = Counts::default();
    counts.visit_ast(&parse_ok("a > x && (b < y | c) || d"));
    assert_eq!(counts.pipelines, 4);
    assert_eq!(counts.redirections, 2);
}
