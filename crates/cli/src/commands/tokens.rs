// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shtree tokens`: show how a command line is split into tokens.

use anyhow::Result;
use clap::Args;
use shtree_shell::Token;

use crate::output::OutputFormat;

#[derive(Args)]
pub struct TokensArgs {
    /// Command line to tokenize; read from stdin when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,
}

pub fn handle(args: TokensArgs, format: OutputFormat) -> Result<()> {
    let input = super::input::read_input(args.input)?;
    let tokens = shtree_shell::tokenize(&input);
    print!("{}", format_tokens(&tokens, format)?);
    Ok(())
}

/// One `KIND<TAB>text` line per token, or a JSON array.
pub fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(tokens
            .iter()
            .map(|t| format!("{}\t{}\n", t.kind.name(), t.text))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(tokens)?)),
    }
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;
