// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Uniform borrowed view over AST nodes.
//!
//! Consumers that draw or explain a tree only need three things from each
//! node: its kind, an optional label, and its children in order. [`Node`]
//! provides exactly that without the consumer matching on every concrete
//! type.

use serde::Serialize;

use super::{
    AndOr, Ast, Command, Pipeline, Redirection, Sequence, SimpleCommand, Subshell, Unit, Word,
};
use crate::token::Span;

/// Tag identifying a node variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Empty,
    Sequence,
    AndOr,
    Pipeline,
    Command,
    SimpleCommand,
    Redirection,
    Subshell,
    Word,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Empty => "Empty",
            NodeKind::Sequence => "Sequence",
            NodeKind::AndOr => "AndOr",
            NodeKind::Pipeline => "Pipeline",
            NodeKind::Command => "Command",
            NodeKind::SimpleCommand => "SimpleCommand",
            NodeKind::Redirection => "Redirection",
            NodeKind::Subshell => "Subshell",
            NodeKind::Word => "Word",
        }
    }
}

/// A borrowed reference to any node in an [`Ast`].
///
/// # Examples
///
/// ```
/// use shtree_shell::{parse, NodeKind};
///
/// let ast = parse("ls | wc")?;
/// let pipeline = ast.root().children()[0].children()[0];
/// assert_eq!(pipeline.kind(), NodeKind::Pipeline);
/// assert_eq!(pipeline.label().as_deref(), Some("|"));
/// assert_eq!(pipeline.children().len(), 2);
/// # Ok::<(), shtree_shell::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Empty,
    Sequence(&'a Sequence),
    AndOr(&'a AndOr),
    Pipeline(&'a Pipeline),
    Command(&'a Command),
    SimpleCommand(&'a SimpleCommand),
    Redirection(&'a Redirection),
    Subshell(&'a Subshell),
    Word(&'a Word),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Empty => NodeKind::Empty,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::AndOr(_) => NodeKind::AndOr,
            Node::Pipeline(_) => NodeKind::Pipeline,
            Node::Command(_) => NodeKind::Command,
            Node::SimpleCommand(_) => NodeKind::SimpleCommand,
            Node::Redirection(_) => NodeKind::Redirection,
            Node::Subshell(_) => NodeKind::Subshell,
            Node::Word(_) => NodeKind::Word,
        }
    }

    /// Display text for the node, if it has any.
    ///
    /// Words show their value and redirections their operator. A pipeline
    /// with more than one stage shows `|`, and an and-or list with more
    /// than one pipeline shows its operators in order (`&& ||`).
    pub fn label(&self) -> Option<String> {
        match self {
            Node::Word(word) => Some(word.value.clone()),
            Node::Redirection(redir) => Some(redir.op.as_str().to_string()),
            Node::Pipeline(pipeline) if !pipeline.rest.is_empty() => Some("|".to_string()),
            Node::AndOr(and_or) if !and_or.rest.is_empty() => Some(
                and_or
                    .operators()
                    .map(|op| op.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            Node::Empty
            | Node::Sequence(_)
            | Node::AndOr(_)
            | Node::Pipeline(_)
            | Node::Command(_)
            | Node::SimpleCommand(_)
            | Node::Subshell(_) => None,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Empty | Node::Word(_) => Vec::new(),
            Node::Sequence(seq) => vec![Node::AndOr(&seq.body)],
            Node::AndOr(and_or) => and_or.pipelines().map(Node::Pipeline).collect(),
            Node::Pipeline(pipeline) => pipeline.units().map(Node::from).collect(),
            Node::Command(cmd) => cmd
                .simple
                .iter()
                .map(Node::SimpleCommand)
                .chain(cmd.redirections.iter().map(Node::Redirection))
                .collect(),
            Node::SimpleCommand(simple) => simple.words.iter().map(Node::Word).collect(),
            Node::Redirection(redir) => vec![Node::Word(&redir.target)],
            Node::Subshell(sub) => vec![Node::AndOr(&sub.body)],
        }
    }

    /// Source span; `None` for [`Node::Empty`].
    pub fn span(&self) -> Option<Span> {
        match self {
            Node::Empty => None,
            Node::Sequence(n) => Some(n.span),
            Node::AndOr(n) => Some(n.span),
            Node::Pipeline(n) => Some(n.span),
            Node::Command(n) => Some(n.span),
            Node::SimpleCommand(n) => Some(n.span),
            Node::Redirection(n) => Some(n.span),
            Node::Subshell(n) => Some(n.span),
            Node::Word(n) => Some(n.span),
        }
    }
}

impl<'a> From<&'a Unit> for Node<'a> {
    fn from(unit: &'a Unit) -> Self {
        match unit {
            Unit::Command(cmd) => Node::Command(cmd),
            Unit::Subshell(sub) => Node::Subshell(sub),
        }
    }
}

impl Ast {
    /// View of the root node.
    pub fn root(&self) -> Node<'_> {
        match self {
            Ast::Empty => Node::Empty,
            Ast::Sequence(seq) => Node::Sequence(seq),
        }
    }
}
