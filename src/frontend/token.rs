//! Token definitions for the typed list language

use serde::Serialize;

use crate::utils::{LexicalError, Span};

/// Words classified as `Keyword` instead of `Identifier`
pub const KEYWORDS: &[&str] = &["List"];

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub code: TokenCode,
    pub lexeme: String,
    pub span: Span,
    /// Set on `TokenCode::Error` tokens only
    pub fault: Option<LexicalError>,
}

impl Token {
    pub fn new(code: TokenCode, lexeme: impl Into<String>, span: Span) -> Self {
        Self { code, lexeme: lexeme.into(), span, fault: None }
    }

    pub fn error(fault: LexicalError, lexeme: impl Into<String>, span: Span) -> Self {
        Self { code: TokenCode::Error, lexeme: lexeme.into(), span, fault: Some(fault) }
    }

    /// Human-readable category of this token
    pub fn label(&self) -> String {
        match self.fault {
            Some(fault) => fault.to_string(),
            None => self.code.label().to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.code == TokenCode::Error
    }
}

/// Token categories
///
/// The discriminants are the numeric codes shown in the token table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenCode {
    /// Digit sequence
    Integer = 1,
    /// Digit sequence with one `.`
    Float = 2,
    Identifier = 3,
    /// =
    AssignOp = 4,
    /// -
    Minus = 5,
    /// ,
    Comma = 6,
    /// [
    LBracket = 7,
    /// ]
    RBracket = 8,
    /// ;
    Semicolon = 9,
    /// Full `"..."` literal, only with `ScannerConfig::read_string_literals`
    StringLiteral = 10,
    Keyword = 11,
    /// +
    Plus = 13,
    /// Lone `"` placeholder
    StringQuoteMarker = 14,
    Error = 99,
}

impl TokenCode {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            TokenCode::Integer => "integer",
            TokenCode::Float => "float",
            TokenCode::Identifier => "identifier",
            TokenCode::AssignOp => "assignment operator",
            TokenCode::Minus => "minus sign",
            TokenCode::Comma => "comma",
            TokenCode::LBracket => "opening bracket",
            TokenCode::RBracket => "closing bracket",
            TokenCode::Semicolon => "end of statement",
            TokenCode::StringLiteral => "string",
            TokenCode::Keyword => "keyword",
            TokenCode::Plus => "plus sign",
            TokenCode::StringQuoteMarker => "quote",
            TokenCode::Error => "invalid character",
        }
    }

    /// Code for a single-character punctuation token
    pub fn punctuation(c: char) -> Option<Self> {
        match c {
            '=' => Some(TokenCode::AssignOp),
            '[' => Some(TokenCode::LBracket),
            ']' => Some(TokenCode::RBracket),
            ',' => Some(TokenCode::Comma),
            ';' => Some(TokenCode::Semicolon),
            '+' => Some(TokenCode::Plus),
            '-' => Some(TokenCode::Minus),
            _ => None,
        }
    }

    pub fn keyword_or_identifier(text: &str) -> Self {
        if KEYWORDS.contains(&text) {
            TokenCode::Keyword
        } else {
            TokenCode::Identifier
        }
    }
}
