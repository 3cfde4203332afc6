// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer that splits a command line into operator and word tokens.
//!
//! The lexer is total: every input yields some token stream. Characters
//! that do not start an operator simply become part of a word, and an
//! unterminated quote runs to the end of input.

use crate::token::{Span, Token, TokenKind};

/// Streaming tokenizer over a single command line.
///
/// `Lexer` is an [`Iterator`] of [`Token`]s; [`Lexer::tokenize`] collects
/// them eagerly.
///
/// # Examples
///
/// ```
/// use shtree_shell::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("cat a >> b").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Word, TokenKind::Word, TokenKind::RedirAppend, TokenKind::Word]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenize the whole input.
    ///
    /// Never fails; see the module docs.
    pub fn tokenize(input: &str) -> Vec<Token> {
        let tokens: Vec<Token> = Lexer::new(input).collect();
        tracing::trace!(bytes = input.len(), tokens = tokens.len(), "tokenized");
        tokens
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline]
    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    /// Match an operator at the cursor. Two-character operators win over
    /// their one-character prefixes.
    fn operator_at(rest: &str) -> Option<(TokenKind, usize)> {
        let op = match rest.as_bytes() {
            [b'(', ..] => (TokenKind::LParen, 1),
            [b')', ..] => (TokenKind::RParen, 1),
            [b'&', b'&', ..] => (TokenKind::AndAnd, 2),
            [b'|', b'|', ..] => (TokenKind::OrOr, 2),
            [b'>', b'>', ..] => (TokenKind::RedirAppend, 2),
            [b'<', b'<', ..] => (TokenKind::HereDoc, 2),
            [b'|', ..] => (TokenKind::Pipe, 1),
            [b'>', ..] => (TokenKind::RedirOut, 1),
            [b'<', ..] => (TokenKind::RedirIn, 1),
            _ => return None,
        };
        Some(op)
    }

    /// True if an unquoted word must stop before the cursor.
    fn at_word_boundary(&self) -> bool {
        let rest = self.rest();
        rest.starts_with(char::is_whitespace) || Self::operator_at(rest).is_some()
    }

    fn lex_operator(&mut self) -> Option<Token> {
        let (kind, len) = Self::operator_at(self.rest())?;
        let start = self.pos;
        self.pos += len;
        Some(Token::operator(kind, Span::new(start, self.pos)))
    }

    /// Accumulate a word up to the next unquoted, unescaped boundary.
    ///
    /// Must be called with the cursor on a character that is neither
    /// whitespace nor the start of an operator, so at least one character
    /// is consumed.
    fn lex_word(&mut self) -> Token {
        let start = self.pos;
        let mut text = String::new();
        let mut quoted = false;
        let mut open_quote: Option<char> = None;

        while let Some(c) = self.peek_char() {
            if let Some(q) = open_quote {
                self.bump();
                if c == q {
                    open_quote = None;
                } else {
                    text.push(c);
                }
                continue;
            }

            if self.at_word_boundary() {
                break;
            }
            self.bump();
            match c {
                '\'' | '"' => {
                    open_quote = Some(c);
                    quoted = true;
                }
                // Trailing backslash has nothing to escape and stays literal
                '\\' => text.push(self.bump().unwrap_or('\\')),
                _ => text.push(c),
            }
        }

        Token::word(text, quoted, Span::new(start, self.pos))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            return None;
        }
        self.lex_operator().or_else(|| Some(self.lex_word()))
    }
}

/// Tokenize `input`. Shorthand for [`Lexer::tokenize`].
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::tokenize(input)
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
