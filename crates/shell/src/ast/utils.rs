// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Utility methods for querying and analyzing AST nodes.

use super::{Ast, AstVisitor, Command, Node, Subshell, Word};
use crate::parse_error::ParseError;
use crate::parser::Parser;

impl Ast {
    /// Parse input string into an AST.
    ///
    /// This is a convenience wrapper around [`Parser::parse`].
    ///
    /// ```
    /// use shtree_shell::Ast;
    ///
    /// assert!(Ast::parse("   ")?.is_empty());
    /// # Ok::<(), shtree_shell::ParseError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Parser::parse(input)
    }

    /// Number of `Command` nodes, including those inside subshells.
    ///
    /// ```
    /// use shtree_shell::Ast;
    ///
    /// let ast = Ast::parse("cat f | (grep a && wc -l > out)")?;
    /// assert_eq!(ast.count_commands(), 3);
    /// # Ok::<(), shtree_shell::ParseError>(())
    /// ```
    pub fn count_commands(&self) -> usize {
        struct Counter(usize);
        impl AstVisitor for Counter {
            fn visit_command(&mut self, cmd: &Command) {
                self.0 += 1;
                self.walk_command(cmd);
            }
        }
        let mut counter = Counter(0);
        counter.visit_ast(self);
        counter.0
    }

    /// Program names in source order. Redirection-only commands have no
    /// name and are skipped.
    ///
    /// ```
    /// use shtree_shell::Ast;
    ///
    /// let ast = Ast::parse("make && (cd out || > log) | tee x")?;
    /// assert_eq!(ast.command_names(), ["make", "cd", "tee"]);
    /// # Ok::<(), shtree_shell::ParseError>(())
    /// ```
    pub fn command_names(&self) -> Vec<&str> {
        // Node borrows live as long as `self`; visitor borrows do not.
        let mut names = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            match node {
                Node::SimpleCommand(simple) => names.extend(simple.name().map(Word::as_str)),
                _ => stack.extend(node.children().into_iter().rev()),
            }
        }
        names
    }

    /// Deepest subshell nesting; 0 when there are no parentheses.
    ///
    /// ```
    /// use shtree_shell::Ast;
    ///
    /// assert_eq!(Ast::parse("a | b")?.max_nesting_depth(), 0);
    /// assert_eq!(Ast::parse("((a) | (b && (c)))")?.max_nesting_depth(), 3);
    /// # Ok::<(), shtree_shell::ParseError>(())
    /// ```
    pub fn max_nesting_depth(&self) -> usize {
        struct DepthTracker {
            current: usize,
            max: usize,
        }
        impl AstVisitor for DepthTracker {
            fn visit_subshell(&mut self, subshell: &Subshell) {
                self.current += 1;
                self.max = self.max.max(self.current);
                self.walk_subshell(subshell);
                self.current -= 1;
            }
        }
        let mut tracker = DepthTracker { current: 0, max: 0 };
        tracker.visit_ast(self);
        tracker.max
    }
}
