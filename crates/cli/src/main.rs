// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shtree - inspect how shell command lines tokenize and parse

mod color;
mod commands;
mod env;
mod exit_error;
mod logging;
mod outline;
mod output;

use output::OutputFormat;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use commands::{parse, tokens};
use shtree_shell::{ParserConfig, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};

#[derive(Parser)]
#[command(
    name = "shtree",
    version,
    about = "Tokenize and parse shell command lines"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Maximum subshell nesting, at most 256 (falls back to SHTREE_MAX_DEPTH, then 64)
    #[arg(
        long = "max-depth",
        value_name = "N",
        value_parser = parse_max_depth,
        global = true
    )]
    max_depth: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a command line and print its syntax tree
    Parse(parse::ParseArgs),
    /// Split a command line into tokens
    Tokens(tokens::TokensArgs),
}

fn main() {
    logging::setup_logging();

    // Usage errors exit 1; help and version go to stdout and exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

fn cli_command() -> clap::Command {
    Cli::command()
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered so
/// context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

/// Parse a nesting limit, rejecting values above [`MAX_SUPPORTED_DEPTH`].
fn parse_max_depth(s: &str) -> Result<usize, String> {
    let depth: usize = s.trim().parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    if depth > MAX_SUPPORTED_DEPTH {
        return Err(format!(
            "{depth} exceeds the supported maximum of {MAX_SUPPORTED_DEPTH}"
        ));
    }
    Ok(depth)
}

/// Flag beats environment beats the library default.
///
/// The environment value goes through the same check as the flag.
fn resolve_max_depth(flag: Option<usize>, from_env: Option<&str>) -> Result<usize> {
    if let Some(depth) = flag {
        return Ok(depth);
    }
    match from_env {
        Some(raw) => parse_max_depth(raw)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid SHTREE_MAX_DEPTH '{raw}'")),
        None => Ok(DEFAULT_MAX_DEPTH),
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Parse(args) => {
            let config = ParserConfig {
                max_depth: resolve_max_depth(cli.max_depth, env::max_depth().as_deref())?,
            };
            parse::handle(args, config, format)
        }
        Commands::Tokens(args) => tokens::handle(args, format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
