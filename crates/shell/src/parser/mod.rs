// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser that turns tokens into an [`Ast`].
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! Sequence      := AndOr
//! AndOr         := Pipeline ( ("&&" | "||") Pipeline )*
//! Pipeline      := Unit ( "|" Unit )*
//! Unit          := Subshell | Command
//! Subshell      := "(" AndOr ")"
//! Command       := ( WORD | Redir )+
//! Redir         := ("<" | ">" | ">>" | "<<") WORD
//! ```

mod redirections;

use super::ast::*;
use super::lexer::Lexer;
use super::parse_error::{Expected, GroupKind, ParseError};
use super::token::{Span, Token, TokenKind};

/// Default limit on subshell nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Highest nesting limit the parser honors.
///
/// Each level of nesting costs several stack frames, so the limit stays
/// well below what a 2 MiB thread stack can hold.
pub const MAX_SUPPORTED_DEPTH: usize = 256;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum subshell nesting. `0` rejects any parenthesized group.
    ///
    /// Values above [`MAX_SUPPORTED_DEPTH`] are clamped to it.
    pub max_depth: usize,
}

impl ParserConfig {
    /// The limit actually enforced.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_SUPPORTED_DEPTH)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Shell parser that transforms tokens into an AST.
///
/// # Examples
///
/// ```
/// use shtree_shell::{Parser, Unit};
///
/// let ast = Parser::parse("(a && b) | c")?;
/// let seq = ast.sequence().expect("not blank");
/// let pipeline = &seq.body.first;
/// assert_eq!(pipeline.len(), 2);
/// assert!(matches!(pipeline.first, Unit::Subshell(_)));
/// # Ok::<(), shtree_shell::ParseError>(())
/// ```
pub struct Parser {
    /// The tokens to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    config: ParserConfig,
    /// Subshells currently open.
    depth: usize,
}

impl Parser {
    /// Parse a command line with the default configuration.
    ///
    /// Blank input yields [`Ast::Empty`].
    pub fn parse(input: &str) -> Result<Ast, ParseError> {
        Self::parse_with_config(input, ParserConfig::default())
    }

    /// Parse a command line with an explicit configuration.
    pub fn parse_with_config(input: &str, config: ParserConfig) -> Result<Ast, ParseError> {
        Self::parse_tokens(Lexer::tokenize(input), config)
    }

    /// Parse an already tokenized command line.
    pub fn parse_tokens(tokens: Vec<Token>, config: ParserConfig) -> Result<Ast, ParseError> {
        if tokens.is_empty() {
            return Ok(Ast::Empty);
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            config,
            depth: 0,
        };
        match parser.parse_sequence() {
            Ok(seq) => {
                tracing::debug!(tokens = parser.tokens.len(), "parsed command line");
                Ok(Ast::Sequence(seq))
            }
            Err(e) => {
                tracing::debug!(kind = e.kind_name(), index = e.index(), "parse failed: {e}");
                Err(e)
            }
        }
    }

    /// Sequence := AndOr, with nothing left over.
    fn parse_sequence(&mut self) -> Result<Sequence, ParseError> {
        let body = self.parse_and_or()?;

        if let Some(token) = self.peek() {
            return Err(ParseError::TrailingInput {
                found: token.kind,
                text: token.text.clone(),
                index: self.pos,
                span: token.span,
            });
        }

        Ok(Sequence {
            span: body.span,
            body,
        })
    }

    /// Parse an and-or list: pipeline (('&&' | '||') pipeline)*
    ///
    /// AND and OR have equal precedence and are left-associative.
    fn parse_and_or(&mut self) -> Result<AndOr, ParseError> {
        let first = self.parse_pipeline(None)?;
        let mut span = first.span;
        let mut rest = Vec::new();

        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::AndAnd) => LogicalOp::And,
                Some(TokenKind::OrOr) => LogicalOp::Or,
                _ => break,
            };
            self.advance(); // consume && or ||
            let pipeline = self.parse_pipeline(Some(GroupKind::AndOr))?;
            span = span.merge(pipeline.span);
            rest.push((op, pipeline));
        }

        Ok(AndOr { first, rest, span })
    }

    /// Parse a pipeline: unit ('|' unit)*
    ///
    /// Pipe binds tighter than `&&` and `||`. `operand_of` names the chain
    /// the first unit belongs to, or `None` at the start of an and-or list.
    fn parse_pipeline(&mut self, operand_of: Option<GroupKind>) -> Result<Pipeline, ParseError> {
        let first = self.parse_unit(operand_of)?;
        let mut span = first.span();
        let mut rest = Vec::new();

        while self.peek_kind() == Some(TokenKind::Pipe) {
            self.advance(); // consume |
            let unit = self.parse_unit(Some(GroupKind::Pipeline))?;
            span = span.merge(unit.span());
            rest.push(unit);
        }

        Ok(Pipeline { first, rest, span })
    }

    /// Parse a subshell or a command.
    fn parse_unit(&mut self, operand_of: Option<GroupKind>) -> Result<Unit, ParseError> {
        match self.peek_kind() {
            None => Err(self.unexpected(Expected::Command)),
            Some(TokenKind::LParen) => self.parse_subshell().map(Unit::Subshell),
            Some(kind) if kind == TokenKind::Word || kind.is_redirection() => {
                self.parse_command().map(Unit::Command)
            }
            Some(_) => Err(self.missing_operand(operand_of)),
        }
    }

    /// Parse a subshell: `(` and_or `)`.
    fn parse_subshell(&mut self) -> Result<Subshell, ParseError> {
        let open_index = self.pos;
        let open = self.expect(TokenKind::LParen)?;

        let max = self.config.effective_max_depth();
        if self.depth >= max {
            return Err(ParseError::NestingTooDeep {
                depth: self.depth + 1,
                max,
                index: open_index,
                span: open.span,
            });
        }

        self.depth += 1;
        let body = self.parse_and_or();
        self.depth -= 1;
        let body = body?;

        let close = self.expect(TokenKind::RParen)?;
        Ok(Subshell {
            body: Box::new(body),
            span: open.span.merge(close.span),
        })
    }

    /// Parse a command: (WORD | redirection)+
    ///
    /// Words form the simple command in order; redirections may appear
    /// before, between or after them and all attach to this command.
    fn parse_command(&mut self) -> Result<Command, ParseError> {
        let start = self.pos;
        let mut words: Vec<Word> = Vec::new();
        let mut redirections = Vec::new();

        loop {
            match self.peek_kind() {
                Some(TokenKind::Word) => {
                    let token = self.expect(TokenKind::Word)?;
                    words.push(Word::from(token));
                }
                Some(kind) if kind.is_redirection() => {
                    redirections.push(self.parse_redirection()?);
                }
                _ => break,
            }
        }

        if self.pos == start {
            return Err(self.unexpected(Expected::Command));
        }

        let simple = match (words.first(), words.last()) {
            (Some(first), Some(last)) => Some(SimpleCommand {
                span: first.span.merge(last.span),
                words,
            }),
            _ => None,
        };

        Ok(Command {
            simple,
            redirections,
            span: self.span_since(start),
        })
    }

    /// Peek at the current token without consuming it.
    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Peek at the kind of the current token.
    #[inline]
    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    /// Advance to the next token.
    #[inline]
    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    ///
    /// On mismatch the cursor stays put and the error names `kind`.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        match self.peek() {
            Some(token) if token.is(kind) => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(Expected::Token(kind))),
        }
    }

    /// Span from the token at `start` through the last consumed token.
    fn span_since(&self, start: usize) -> Span {
        match (self.tokens.get(start), self.pos.checked_sub(1)) {
            (Some(first), Some(last)) if last >= start => {
                first.span.merge(self.tokens[last].span)
            }
            _ => Span::empty(self.end_offset()),
        }
    }

    /// Byte offset just past the last token.
    fn end_offset(&self) -> usize {
        self.tokens.last().map_or(0, |t| t.span.end)
    }

    /// Error for a mismatch at the cursor.
    fn unexpected(&self, expected: Expected) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.kind,
                text: token.text.clone(),
                index: self.pos,
                span: token.span,
            },
            None => ParseError::UnexpectedEndOfInput {
                expected,
                index: self.pos,
                offset: self.end_offset(),
            },
        }
    }

    /// Error for a unit position holding `|`, `&&`, `||` or `)`.
    ///
    /// The empty group is the chain whose operand is missing. At the start
    /// of an and-or list it is decided by the token found: `)` inside a
    /// subshell means `()`.
    fn missing_operand(&self, operand_of: Option<GroupKind>) -> ParseError {
        let Some(token) = self.peek() else {
            return self.unexpected(Expected::Command);
        };
        let group = match (operand_of, token.kind) {
            (Some(group), _) => group,
            (None, TokenKind::Pipe) => GroupKind::Pipeline,
            (None, TokenKind::AndAnd | TokenKind::OrOr) => GroupKind::AndOr,
            (None, TokenKind::RParen) if self.depth > 0 => GroupKind::Subshell,
            (None, _) => return self.unexpected(Expected::Command),
        };
        ParseError::EmptyGroup {
            group,
            found: token.kind,
            text: token.text.clone(),
            index: self.pos,
            span: token.span,
        }
    }
}

/// Parse `input` with the default configuration.
///
/// ```
/// use shtree_shell::parse;
///
/// assert!(parse("")?.is_empty());
/// assert_eq!(parse("echo   hi")?.to_string(), "echo hi");
/// # Ok::<(), shtree_shell::ParseError>(())
/// ```
pub fn parse(input: &str) -> Result<Ast, ParseError> {
    Parser::parse(input)
}

/// Parse `input` with an explicit configuration.
pub fn parse_with_config(input: &str, config: ParserConfig) -> Result<Ast, ParseError> {
    Parser::parse_with_config(input, config)
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
