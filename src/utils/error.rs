//! Error handling for listlang
//!
//! The scanner and parser never fail: every problem they find is data
//! (`LexicalError` on an Error token, `SyntaxErrorKind` on a `ParseError`).
//! `Error` covers the reporting edge only.

use serde::Serialize;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Failure outside the analysis itself
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

// ==================== Lexical Errors ====================

/// Why the scanner produced an Error token
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LexicalError {
    #[error("invalid character")]
    InvalidCharacter,

    #[error("invalid character in identifier")]
    InvalidIdentifierCharacter,

    #[error("malformed number")]
    MalformedNumber,

    #[error("unterminated string")]
    UnterminatedString,
}

// ==================== Syntax Errors ====================

/// Symbol the parser expected at a fixed grammar point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    Assign,
    LBracket,
    RBracket,
    Semicolon,
    OpeningQuote,
}

impl Expected {
    pub fn as_char(&self) -> char {
        match self {
            Expected::Assign => '=',
            Expected::LBracket => '[',
            Expected::RBracket => ']',
            Expected::Semicolon => ';',
            Expected::OpeningQuote => '"',
        }
    }
}

/// Diagnostic category reported by the parser
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxErrorKind {
    #[error("identifier must start with an ASCII letter")]
    InvalidIdentifierStart,

    #[error("digit is not allowed in identifier")]
    DigitInIdentifier,

    #[error("expected '{}'", .0.as_char())]
    MissingSymbol(Expected),

    #[error("expected element (number or string)")]
    MissingElement,

    #[error("string is not closed with a quote")]
    UnterminatedString,

    #[error("expected digit after sign")]
    MissingDigitAfterSign,

    #[error("expected at least one digit after '.'")]
    MissingDigitAfterDot,

    #[error("unexpected characters after end of list")]
    TrailingContent,
}
