//! Help and version specs

use crate::prelude::*;

#[test]
fn no_subcommand_prints_help() {
    cli()
        .passes()
        .stdout_has("Usage: shtree")
        .stdout_has("parse")
        .stdout_has("tokens");
}

#[test]
fn help_lists_global_flags() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("--output")
        .stdout_has("--max-depth");
}

#[test]
fn version_prints_package_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_eq(&format!("shtree {}\n", env!("CARGO_PKG_VERSION")));
}
