//! Source location spans.

use std::fmt;

/// Byte range `[start, end)` into the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

/// One-based line and column of a byte offset.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl Span {
    /// Placeholder for nodes built outside the parser.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Convert a lexer byte range, saturating at `u32::MAX`.
    ///
    /// Sources larger than 4GB are not supported; saturating keeps the
    /// conversion infallible so the lexer never has to report it.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let start = u32::try_from(range.start).unwrap_or(u32::MAX);
        let end = u32::try_from(range.end).unwrap_or(u32::MAX);
        Span { start, end }
    }

    /// Line and column of `start` within `source`.
    ///
    /// Columns count characters, not bytes. Offsets past the end of the
    /// source resolve to the position just after the last character.
    pub fn line_col(&self, source: &str) -> LineCol {
        let offset = usize::try_from(self.start)
            .unwrap_or(usize::MAX)
            .min(source.len());
        let mut line = 1;
        let mut col = 1;
        for (idx, ch) in source.char_indices() {
            if idx >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        LineCol { line, col }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
