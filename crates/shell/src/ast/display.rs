// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical shell text for AST nodes.
//!
//! The rendering re-parses to a structurally equal tree. Operators get
//! single spaces, redirections follow the words of their command, and
//! words are quoted or escaped only where the lexer would otherwise split
//! them.

use std::fmt::{self, Display, Formatter, Write};

use super::{
    AndOr, Ast, Command, LogicalOp, Pipeline, RedirectOp, Redirection, Sequence, SimpleCommand,
    Subshell, Unit, Word,
};

impl Display for Ast {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Empty => Ok(()),
            Ast::Sequence(seq) => seq.fmt(f),
        }
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.body.fmt(f)
    }
}

impl Display for LogicalOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for RedirectOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for AndOr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.first.fmt(f)?;
        for (op, pipeline) in &self.rest {
            write!(f, " {op} {pipeline}")?;
        }
        Ok(())
    }
}

impl Display for Pipeline {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.first.fmt(f)?;
        for unit in &self.rest {
            write!(f, " | {unit}")?;
        }
        Ok(())
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Command(cmd) => cmd.fmt(f),
            Unit::Subshell(sub) => sub.fmt(f),
        }
    }
}

impl Display for Subshell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.body)
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(simple) = &self.simple {
            simple.fmt(f)?;
            sep = " ";
        }
        for redir in &self.redirections {
            write!(f, "{sep}{redir}")?;
            sep = " ";
        }
        Ok(())
    }
}

impl Display for SimpleCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for word in &self.words {
            write!(f, "{sep}{word}")?;
            sep = " ";
        }
        Ok(())
    }
}

impl Display for Redirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.target)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.quoted || self.value.is_empty() {
            write_quoted(f, &self.value)
        } else {
            write_escaped(f, &self.value)
        }
    }
}

/// Characters that end or alter an unquoted word.
fn is_special(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\'' | '"' | '\\' | '(' | ')' | '|' | '<' | '>' | '&')
}

fn write_escaped(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        if is_special(c) {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    Ok(())
}

/// Single quotes when possible, then double quotes, then a mix of
/// single-quoted runs and `"'"` for each embedded single quote.
fn write_quoted(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    if !value.contains('\'') {
        return write!(f, "'{value}'");
    }
    if !value.contains('"') {
        return write!(f, "\"{value}\"");
    }
    for (i, run) in value.split('\'').enumerate() {
        if i > 0 {
            f.write_str("\"'\"")?;
        }
        if !run.is_empty() {
            write!(f, "'{run}'")?;
        }
    }
    Ok(())
}
