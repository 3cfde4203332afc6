// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shtree parse`: show the syntax tree of a command line.

use anyhow::Result;
use clap::Args;
use shtree_shell::{Ast, ParseError, ParserConfig};

use crate::color::Palette;
use crate::exit_error::{ExitError, SYNTAX_ERROR};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ParseArgs {
    /// Command line to parse; read from stdin when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,
}

pub fn handle(args: ParseArgs, config: ParserConfig, format: OutputFormat) -> Result<()> {
    let input = super::input::read_input(args.input)?;
    tracing::debug!(bytes = input.len(), max_depth = config.max_depth, "parsing");

    match shtree_shell::parse_with_config(&input, config) {
        Ok(ast) => {
            print!("{}", format_ast(&ast, format, Palette::detect())?);
            Ok(())
        }
        Err(err) => Err(report_syntax_error(&input, &err)),
    }
}

/// The tree as an outline (text) or pretty-printed JSON, newline-terminated.
pub fn format_ast(ast: &Ast, format: OutputFormat, palette: Palette) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(crate::outline::render(ast.root(), palette)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(ast)?)),
    }
}

/// Print the caret diagnostic and turn `err` into a syntax-error exit.
pub fn report_syntax_error(input: &str, err: &ParseError) -> anyhow::Error {
    eprintln!("{}", err.diagnostic(input));
    ExitError::new(SYNTAX_ERROR, String::new()).into()
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
