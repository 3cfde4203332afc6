// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-offset source locations and caret diagnostics.

use serde::Serialize;

/// A half-open byte range `start..end` into the parsed command line.
///
/// # Examples
///
/// ```
/// use shtree_shell::Span;
///
/// let span = Span::new(5, 8);
/// assert_eq!(span.slice("echo hi > out"), " hi");
/// assert_eq!(span.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a span from `start` to `end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// A zero-width span at `pos`.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True if `start <= pos < end`.
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        (self.start..self.end).contains(&pos)
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The spanned text, or `""` when the span does not fall on valid
    /// character boundaries of `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Clamp `pos` into `source` and back off to the nearest char boundary.
fn floor_boundary(source: &str, pos: usize) -> usize {
    let mut pos = pos.min(source.len());
    while !source.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Excerpt of `input` around `span` with a caret line underneath.
///
/// Shows up to `context_chars` characters on either side of the span start.
///
/// ```text
/// echo | | bad
///        ^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let at = floor_boundary(input, span.start);

    let start = input[..at]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map_or(at, |(i, _)| i);

    let end = input[at..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map_or(input.len(), |(i, c)| at + i + c.len_utf8());

    let caret_col = input[start..at].chars().count();
    let caret_len = span.slice(input).chars().count().max(1);

    format!(
        "{}\n{}{}",
        &input[start..end],
        " ".repeat(caret_col),
        "^".repeat(caret_len)
    )
}

/// Find the line holding `span.start`.
///
/// Returns `(line, column, line_text)` with a 1-based line number and a
/// 0-based column counted in characters.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let at = floor_boundary(source, span.start);
    let before = &source[..at];

    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[line_start..]
        .find('\n')
        .map_or(source.len(), |i| line_start + i);
    let column = source[line_start..at].chars().count();

    (line, column, &source[line_start..line_end])
}

/// rustc-style diagnostic for `span` in `source`.
///
/// ```text
/// error: unexpected end of input at token 2, expected word
///   --> column 7
///    |
///  1 | echo >
///    |       ^
/// ```
///
/// Lines longer than 120 characters are cut to a window around the span,
/// with `...` marking the dropped ends.
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line, column, text) = locate_span(source, span);
    let width = span.slice(source).chars().count().max(1);

    let location = if source.contains('\n') {
        format!("line {}, column {}", line, column + 1)
    } else {
        format!("column {}", column + 1)
    };
    let (text, column, width) = window_line(text, column, width);

    format!(
        "error: {message}\n  --> {location}\n   |\n{line:>3} | {text}\n   | {}{}",
        " ".repeat(column),
        "^".repeat(width)
    )
}

/// Longest line [`diagnostic_context`] prints in full.
const MAX_LINE_CHARS: usize = 120;
/// Characters kept on each side of the span when a line is cut.
const WINDOW_CHARS: usize = 40;
const ELLIPSIS: &str = "...";

/// Cut `text` down to a window around `column`, returning the shown text
/// and the caret column and width within it.
fn window_line(text: &str, column: usize, width: usize) -> (String, usize, usize) {
    let total = text.chars().count();
    if total <= MAX_LINE_CHARS {
        return (text.to_string(), column, width);
    }

    let first = column.saturating_sub(WINDOW_CHARS);
    let last = (column + width.min(WINDOW_CHARS) + WINDOW_CHARS).min(total);

    let mut shown: String = text.chars().skip(first).take(last - first).collect();
    let mut caret_column = column - first;
    if first > 0 {
        shown.insert_str(0, ELLIPSIS);
        caret_column += ELLIPSIS.len();
    }
    if last < total {
        shown.push_str(ELLIPSIS);
    }

    let caret_width = width.min(last - column).max(1);
    (shown, caret_column, caret_width)
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
