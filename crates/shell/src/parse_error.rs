// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use std::fmt;

use thiserror::Error;

use crate::span::{context_snippet, diagnostic_context};
use crate::token::{Span, TokenKind};

/// What the parser needed at the failing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific token, e.g. `)` or a redirection target word.
    Token(TokenKind),
    /// The start of a command or subshell.
    Command,
    /// Nothing more; the sequence was complete.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => kind.fmt(f),
            Expected::Command => f.write_str("a command"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// The chain or group that ended up with no operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// `()`
    Subshell,
    /// A side of `|`.
    Pipeline,
    /// A side of `&&` or `||`.
    AndOr,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroupKind::Subshell => "subshell",
            GroupKind::Pipeline => "pipeline",
            GroupKind::AndOr => "and-or list",
        })
    }
}

/// Parser errors.
///
/// All errors are fatal: the parser stops at the first violated rule and
/// returns no tree. Every variant records the token `index` at which
/// parsing stopped. Use [`ParseError::diagnostic`] to render a message
/// pointing into the original input.
///
/// # Examples
///
/// ```
/// use shtree_shell::{parse, Expected, ParseError, TokenKind};
///
/// let err = parse("(a && b").unwrap_err();
/// assert!(matches!(
///     err,
///     ParseError::UnexpectedEndOfInput { expected: Expected::Token(TokenKind::RParen), .. }
/// ));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token was found where a different kind was required.
    #[error("unexpected {found} at token {index}, expected {expected}")]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        /// Text of the offending token.
        text: String,
        index: usize,
        span: Span,
    },

    /// Input ended while a mandatory token was still required.
    #[error("unexpected end of input at token {index}, expected {expected}")]
    UnexpectedEndOfInput {
        expected: Expected,
        index: usize,
        /// Byte offset just past the last token.
        offset: usize,
    },

    /// A subshell, pipeline stage or and-or operand is missing.
    #[error("empty {group} at token {index}: found {found}, expected a command")]
    EmptyGroup {
        group: GroupKind,
        found: TokenKind,
        text: String,
        index: usize,
        span: Span,
    },

    /// Tokens remain after a complete sequence.
    #[error("unexpected trailing {found} at token {index}, expected end of input")]
    TrailingInput {
        found: TokenKind,
        text: String,
        index: usize,
        span: Span,
    },

    /// Subshells nest deeper than the configured limit.
    #[error("subshell nesting depth {depth} at token {index} exceeds the limit of {max}")]
    NestingTooDeep {
        depth: usize,
        max: usize,
        index: usize,
        span: Span,
    },
}

impl ParseError {
    /// Index of the token at which parsing stopped.
    ///
    /// For [`ParseError::UnexpectedEndOfInput`] this equals the number of
    /// tokens.
    pub fn index(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { index, .. }
            | ParseError::UnexpectedEndOfInput { index, .. }
            | ParseError::EmptyGroup { index, .. }
            | ParseError::TrailingInput { index, .. }
            | ParseError::NestingTooDeep { index, .. } => *index,
        }
    }

    /// Source span of the offending token; a zero-width span at the end of
    /// input for [`ParseError::UnexpectedEndOfInput`].
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::EmptyGroup { span, .. }
            | ParseError::TrailingInput { span, .. }
            | ParseError::NestingTooDeep { span, .. } => *span,
            ParseError::UnexpectedEndOfInput { offset, .. } => Span::empty(*offset),
        }
    }

    /// What the parser needed at the failing position.
    pub fn expected(&self) -> Option<Expected> {
        match self {
            ParseError::UnexpectedToken { expected, .. }
            | ParseError::UnexpectedEndOfInput { expected, .. } => Some(*expected),
            ParseError::EmptyGroup { .. } => Some(Expected::Command),
            ParseError::TrailingInput { .. } => Some(Expected::EndOfInput),
            ParseError::NestingTooDeep { .. } => None,
        }
    }

    /// Kind of the token actually found, `None` at end of input.
    pub fn found(&self) -> Option<TokenKind> {
        match self {
            ParseError::UnexpectedToken { found, .. }
            | ParseError::EmptyGroup { found, .. }
            | ParseError::TrailingInput { found, .. } => Some(*found),
            ParseError::NestingTooDeep { .. } => Some(TokenKind::LParen),
            ParseError::UnexpectedEndOfInput { .. } => None,
        }
    }

    /// Stable name of the error kind, e.g. `"TrailingInput"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ParseError::EmptyGroup { .. } => "EmptyGroup",
            ParseError::TrailingInput { .. } => "TrailingInput",
            ParseError::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// Excerpt of `input` with a caret under the error position.
    ///
    /// ```text
    /// echo | | bad
    ///        ^
    /// ```
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }

    /// rustc-style diagnostic with the message and a caret line.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}

#[cfg(test)]
#[path = "parse_error_tests.rs"]
mod tests;
