// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection parsing: `<`, `>`, `>>`, `<<` followed by a target word.

use super::Parser;
use crate::ast::{RedirectOp, Redirection, Word};
use crate::parse_error::{Expected, ParseError};
use crate::token::TokenKind;

impl Parser {
    /// Parse a redirection operator and its mandatory target word.
    ///
    /// The caller has checked that the current token is a redirection
    /// operator. A missing target reports `word` as the expected token.
    pub(super) fn parse_redirection(&mut self) -> Result<Redirection, ParseError> {
        let Some(op_token) = self.peek().cloned() else {
            return Err(self.unexpected(Expected::Command));
        };
        let Some(op) = RedirectOp::from_token_kind(op_token.kind) else {
            return Err(self.unexpected(Expected::Command));
        };
        self.advance(); // consume the operator
        let target = Word::from(self.expect(TokenKind::Word)?);

        Ok(Redirection {
            op,
            span: op_token.span.merge(target.span),
            target,
        })
    }
}
