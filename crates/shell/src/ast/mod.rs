// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Abstract Syntax Tree types for parsed command lines.
//!
//! Chains are stored as a mandatory `first` element plus a `rest` list, so
//! an and-or list or pipeline with zero operands cannot be represented.
//! Every node owns its children; the tree is built once by the parser and
//! never mutated.

mod display;
mod node;
mod utils;
mod visitor;

use serde::Serialize;

use crate::token::{Span, Token, TokenKind};

pub use node::{Node, NodeKind};
pub use visitor::AstVisitor;

/// Root of a parse: either a blank line or a full sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Ast {
    /// Blank or whitespace-only input.
    Empty,
    Sequence(Sequence),
}

impl Ast {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Ast::Empty)
    }

    /// The sequence, unless the input was blank.
    pub fn sequence(&self) -> Option<&Sequence> {
        match self {
            Ast::Empty => None,
            Ast::Sequence(seq) => Some(seq),
        }
    }
}

/// Top-level node wrapping exactly one and-or list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    pub body: AndOr,
    pub span: Span,
}

/// `&&` or `||`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogicalOp {
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
}

impl LogicalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

/// Pipelines joined by `&&`/`||`.
///
/// Both operators share one precedence level and associate left to right:
/// `a && b || c` is `first = a, rest = [(&&, b), (||, c)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AndOr {
    pub first: Pipeline,
    pub rest: Vec<(LogicalOp, Pipeline)>,
    pub span: Span,
}

impl AndOr {
    /// All pipelines in source order.
    pub fn pipelines(&self) -> impl Iterator<Item = &Pipeline> {
        std::iter::once(&self.first).chain(self.rest.iter().map(|(_, p)| p))
    }

    /// Operators in source order; one fewer than [`AndOr::pipelines`].
    pub fn operators(&self) -> impl Iterator<Item = LogicalOp> + '_ {
        self.rest.iter().map(|(op, _)| *op)
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always false: a chain has at least one operand.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Units joined by `|`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pipeline {
    pub first: Unit,
    pub rest: Vec<Unit>,
    pub span: Span,
}

impl Pipeline {
    /// All stages in source order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always false: a chain has at least one operand.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// One pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Unit {
    Command(Command),
    Subshell(Subshell),
}

impl Unit {
    pub fn span(&self) -> Span {
        match self {
            Unit::Command(cmd) => cmd.span,
            Unit::Subshell(sub) => sub.span,
        }
    }
}

/// A parenthesized group: `( and_or )`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subshell {
    pub body: Box<AndOr>,
    pub span: Span,
}

/// Words plus redirections.
///
/// The parser only builds a `Command` when at least one of `simple` and
/// `redirections` is non-empty. Redirections are collected in source
/// order wherever they appear relative to the words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub simple: Option<SimpleCommand>,
    pub redirections: Vec<Redirection>,
    pub span: Span,
}

impl Command {
    /// Program name, if the command has words.
    pub fn name(&self) -> Option<&Word> {
        self.simple.as_ref().and_then(SimpleCommand::name)
    }
}

/// A non-empty list of words; the first is the program name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleCommand {
    pub words: Vec<Word>,
    pub span: Span,
}

impl SimpleCommand {
    /// First word. Parsed commands always have one; `None` only for a
    /// hand-built empty list.
    pub fn name(&self) -> Option<&Word> {
        self.words.first()
    }

    /// Words after the name.
    pub fn args(&self) -> &[Word] {
        self.words.get(1..).unwrap_or_default()
    }
}

/// Redirection operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RedirectOp {
    #[serde(rename = "<")]
    In,
    #[serde(rename = ">")]
    Out,
    #[serde(rename = ">>")]
    Append,
    #[serde(rename = "<<")]
    HereDoc,
}

impl RedirectOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedirectOp::In => "<",
            RedirectOp::Out => ">",
            RedirectOp::Append => ">>",
            RedirectOp::HereDoc => "<<",
        }
    }

    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::RedirIn => Some(RedirectOp::In),
            TokenKind::RedirOut => Some(RedirectOp::Out),
            TokenKind::RedirAppend => Some(RedirectOp::Append),
            TokenKind::HereDoc => Some(RedirectOp::HereDoc),
            _ => None,
        }
    }
}

/// `op target`, e.g. `> out.txt`.
///
/// For `<<` the target is the here-doc delimiter word; no body is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirection {
    pub op: RedirectOp,
    pub target: Word,
    pub span: Span,
}

/// A literal word. Quote delimiters are gone; nothing is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub value: String,
    /// Some part of the source word was quoted.
    pub quoted: bool,
    pub span: Span,
}

impl Word {
    /// Unquoted word, mostly for building trees by hand.
    pub fn literal(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            quoted: false,
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl From<Token> for Word {
    fn from(token: Token) -> Self {
        Self {
            value: token.text,
            quoted: token.quoted,
            span: token.span,
        }
    }
}

#[cfg(test)]
#[path = "../ast_tests/mod.rs"]
mod tests;
