// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Lexer and parser for a restricted shell command-line grammar.
//!
//! A command line goes through two pure stages:
//!
//! 1. [`tokenize`] splits it into [`Token`]s. This never fails.
//! 2. [`parse`] runs a recursive-descent parser over the tokens and
//!    returns an [`Ast`], or the first [`ParseError`] it hits.
//!
//! # Quick Start
//!
//! ```
//! use shtree_shell::{parse, NodeKind};
//!
//! let ast = parse("make && (cat log | grep err > out.txt) || echo ok")?;
//! assert_eq!(ast.root().kind(), NodeKind::Sequence);
//! assert_eq!(ast.command_names(), ["make", "cat", "grep", "echo"]);
//! # Ok::<(), shtree_shell::ParseError>(())
//! ```
//!
//! # Grammar
//!
//! `&&` and `||` bind loosest (one level, left to right), `|` binds
//! tighter, and redirections attach to the command they appear in.
//! Parentheses group a full and-or list.
//!
//! # AST Structure
//!
//! ```text
//! Ast
//! ├── Empty
//! └── Sequence
//!     └── AndOr (first + (op, Pipeline)*)
//!         └── Pipeline (first + Unit*)
//!             ├── Subshell
//!             │   └── AndOr
//!             └── Command
//!                 ├── SimpleCommand
//!                 │   └── Word+
//!                 └── Redirection*
//!                     └── Word
//! ```
//!
//! Consumers that only need kind, label and children can walk the
//! [`Node`] view from [`Ast::root`]. [`AstVisitor`] gives typed traversal,
//! and `Display` renders any node back to canonical shell text.

mod ast;
mod lexer;
mod parse_error;
mod parser;
pub mod span;
mod token;

#[cfg(test)]
mod test_support;

// AST types
pub use ast::{
    AndOr, Ast, AstVisitor, Command, LogicalOp, Node, NodeKind, Pipeline, RedirectOp,
    Redirection, Sequence, SimpleCommand, Subshell, Unit, Word,
};

// Lexer
pub use lexer::{tokenize, Lexer};

// Parser
pub use parse_error::{Expected, GroupKind, ParseError};
pub use parser::{
    parse, parse_with_config, Parser, ParserConfig, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH,
};

// Source locations
pub use span::{context_snippet, diagnostic_context, locate_span, Span};

// Tokens
pub use token::{Token, TokenKind};
