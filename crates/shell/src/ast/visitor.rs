// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visitor pattern for traversing the AST.

use super::{
    AndOr, Ast, Command, Pipeline, Redirection, Sequence, SimpleCommand, Subshell, Unit, Word,
};

/// Visitor trait for traversing the AST.
///
/// Every `visit_*` method defaults to its `walk_*` counterpart, which
/// descends into the children. Override a `visit_*` method to act on a
/// node; call the matching `walk_*` from it to keep descending, or skip
/// the call to prune that subtree.
///
/// # Example: Collect Redirection Targets
///
/// ```
/// use shtree_shell::{parse, AstVisitor, Redirection};
///
/// struct Targets(Vec<String>);
///
/// impl AstVisitor for Targets {
///     fn visit_redirection(&mut self, redir: &Redirection) {
///         self.0.push(redir.target.value.clone());
///     }
/// }
///
/// let ast = parse("sort < in.txt | (uniq > out.txt)")?;
/// let mut targets = Targets(Vec::new());
/// targets.visit_ast(&ast);
/// assert_eq!(targets.0, ["in.txt", "out.txt"]);
/// # Ok::<(), shtree_shell::ParseError>(())
/// ```
pub trait AstVisitor {
    fn visit_ast(&mut self, ast: &Ast) {
        self.walk_ast(ast);
    }

    fn visit_sequence(&mut self, seq: &Sequence) {
        self.walk_sequence(seq);
    }

    fn visit_and_or(&mut self, and_or: &AndOr) {
        self.walk_and_or(and_or);
    }

    fn visit_pipeline(&mut self, pipeline: &Pipeline) {
        self.walk_pipeline(pipeline);
    }

    fn visit_unit(&mut self, unit: &Unit) {
        self.walk_unit(unit);
    }

    fn visit_subshell(&mut self, subshell: &Subshell) {
        self.walk_subshell(subshell);
    }

    fn visit_command(&mut self, command: &Command) {
        self.walk_command(command);
    }

    fn visit_simple_command(&mut self, cmd: &SimpleCommand) {
        self.walk_simple_command(cmd);
    }

    fn visit_redirection(&mut self, redir: &Redirection) {
        self.walk_redirection(redir);
    }

    /// Words are leaves; there is no `walk_word`.
    fn visit_word(&mut self, _word: &Word) {}

    // Default walk implementations

    fn walk_ast(&mut self, ast: &Ast) {
        match ast {
            Ast::Empty => {}
            Ast::Sequence(seq) => self.visit_sequence(seq),
        }
    }

    fn walk_sequence(&mut self, seq: &Sequence) {
        self.visit_and_or(&seq.body);
    }

    /// Visit every pipeline in source order.
    fn walk_and_or(&mut self, and_or: &AndOr) {
        for pipeline in and_or.pipelines() {
            self.visit_pipeline(pipeline);
        }
    }

    fn walk_pipeline(&mut self, pipeline: &Pipeline) {
        for unit in pipeline.units() {
            self.visit_unit(unit);
        }
    }

    fn walk_unit(&mut self, unit: &Unit) {
        match unit {
            Unit::Command(cmd) => self.visit_command(cmd),
            Unit::Subshell(sub) => self.visit_subshell(sub),
        }
    }

    fn walk_subshell(&mut self, subshell: &Subshell) {
        self.visit_and_or(&subshell.body);
    }

    /// Visit the words first, then redirections in source order.
    fn walk_command(&mut self, command: &Command) {
        if let Some(simple) = &command.simple {
            self.visit_simple_command(simple);
        }
        for redir in &command.redirections {
            self.visit_redirection(redir);
        }
    }

    fn walk_simple_command(&mut self, cmd: &SimpleCommand) {
        for word in &cmd.words {
            self.visit_word(word);
        }
    }

    fn walk_redirection(&mut self, redir: &Redirection) {
        self.visit_word(&redir.target);
    }
}
