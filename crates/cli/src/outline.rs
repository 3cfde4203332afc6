// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Box-drawing outline of a parsed command line.
//!
//! ```text
//! Sequence
//! └── AndOr &&
//!     ├── Pipeline
//!     │   └── Command
//!     │       └── SimpleCommand
//!     │           └── Word "make"
//!     └── Pipeline
//!         └── ...
//! ```

use std::fmt::Write;

use shtree_shell::{Node, NodeKind};

use crate::color::Palette;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Render `root` and its descendants, one node per line.
pub fn render(root: Node<'_>, palette: Palette) -> String {
    let mut out = String::new();
    write_line(&mut out, root, palette);
    write_children(&mut out, root, "", palette);
    out
}

/// `Kind`, plus its label: words are quoted so blanks stay visible.
fn line(node: Node<'_>, palette: Palette) -> String {
    let kind = palette.header(node.kind().as_str());
    match node.label() {
        Some(label) if node.kind() == NodeKind::Word => {
            format!("{kind} {}", palette.literal(&format!("{label:?}")))
        }
        Some(label) => format!("{kind} {}", palette.literal(&label)),
        None => kind,
    }
}

fn write_line(out: &mut String, node: Node<'_>, palette: Palette) {
    let _ = writeln!(out, "{}", line(node, palette));
}

fn write_children(out: &mut String, node: Node<'_>, prefix: &str, palette: Palette) {
    let children = node.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        let last = i + 1 == count;
        let (branch, indent) = if last {
            (LAST_BRANCH, SPACE)
        } else {
            (BRANCH, PIPE)
        };
        out.push_str(&palette.muted(&format!("{prefix}{branch}")));
        write_line(out, child, palette);
        write_children(out, child, &format!("{prefix}{indent}"), palette);
    }
}

#[cfg(test)]
#[path = "outline_tests.rs"]
mod tests;
