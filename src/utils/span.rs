//! Source location tracking

use serde::Serialize;
use std::fmt;

/// Line/column location of a token.
///
/// Lines and columns are 1-based and the column range is inclusive, so a
/// single-character token has `start_column == end_column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Line number
    pub line: usize,
    /// First column of the token
    pub start_column: usize,
    /// Last column of the token
    pub end_column: usize,
}

impl Span {
    /// Create a new span
    pub fn new(line: usize, start_column: usize, end_column: usize) -> Self {
        Self { line, start_column, end_column }
    }

    /// Span covering one character
    pub fn single(line: usize, column: usize) -> Self {
        Self::new(line, column, column)
    }
}

/// The character a diagnostic points at, or the end-of-input sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Char(char),
    EndOfInput,
}

impl Symbol {
    pub fn from_option(c: Option<char>) -> Self {
        c.map_or(Symbol::EndOfInput, Symbol::Char)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "'{}'", c.escape_debug()),
            Symbol::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_span() {
        assert_eq!(Span::single(3, 7), Span::new(3, 7, 7));
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::Char('x').to_string(), "'x'");
        assert_eq!(Symbol::Char('\n').to_string(), "'\\n'");
        assert_eq!(Symbol::from_option(None).to_string(), "end of input");
    }
}
