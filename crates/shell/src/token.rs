// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types produced by the lexer.

use std::fmt;

use serde::Serialize;

pub use crate::span::Span;

/// The kind of a lexical token.
///
/// Operators carry no payload; their text is fixed and available from
/// [`TokenKind::operator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `|`
    Pipe,
    /// `<`
    RedirIn,
    /// `>`
    RedirOut,
    /// `>>`
    RedirAppend,
    /// `<<`
    HereDoc,
    /// Any other run of characters, quotes stripped.
    Word,
}

impl TokenKind {
    /// Upper-case tag, e.g. `AND_AND`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::AndAnd => "AND_AND",
            TokenKind::OrOr => "OR_OR",
            TokenKind::Pipe => "PIPE",
            TokenKind::RedirIn => "REDIR_IN",
            TokenKind::RedirOut => "REDIR_OUT",
            TokenKind::RedirAppend => "REDIR_APPEND",
            TokenKind::HereDoc => "HEREDOC",
            TokenKind::Word => "WORD",
        }
    }

    /// Fixed source text of an operator, `None` for words.
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::AndAnd => Some("&&"),
            TokenKind::OrOr => Some("||"),
            TokenKind::Pipe => Some("|"),
            TokenKind::RedirIn => Some("<"),
            TokenKind::RedirOut => Some(">"),
            TokenKind::RedirAppend => Some(">>"),
            TokenKind::HereDoc => Some("<<"),
            TokenKind::Word => None,
        }
    }

    #[inline]
    pub fn is_redirection(&self) -> bool {
        matches!(
            self,
            TokenKind::RedirIn | TokenKind::RedirOut | TokenKind::RedirAppend | TokenKind::HereDoc
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator() {
            Some(op) => write!(f, "'{op}'"),
            None => f.write_str("word"),
        }
    }
}

/// A token with its text and source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Operator text, or the word content with quote delimiters and
    /// escaping backslashes removed.
    pub text: String,
    /// True if any part of a word was quoted. Always false for operators.
    pub quoted: bool,
    pub span: Span,
}

impl Token {
    /// Build an operator token; `kind` must not be [`TokenKind::Word`].
    pub(crate) fn operator(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            text: kind.operator().unwrap_or_default().to_string(),
            quoted: false,
            span,
        }
    }

    pub(crate) fn word(text: String, quoted: bool, span: Span) -> Self {
        Self {
            kind: TokenKind::Word,
            text,
            quoted,
            span,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
