//! Analysis reports
//!
//! Runs the scanner and the parser over the same text and renders their
//! output: a token table, an error log, or JSON for programmatic use.

use serde::Serialize;

use crate::frontend::{ListParser, ParseError, Scanner, ScannerConfig, Token, TokenCode};
use crate::utils::Result;

/// Shown by [`render_errors`] when the parser accepted the text
pub const NO_ERRORS: &str = "No errors found";

const TABLE_HEADER: [&str; 6] = ["Code", "Type", "Lexeme", "Line", "Start", "End"];

/// Which output streams a report carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Streams {
    Tokens,
    Errors,
    Both,
}

impl Streams {
    pub fn tokens(self) -> bool {
        self != Streams::Errors
    }

    pub fn errors(self) -> bool {
        self != Streams::Tokens
    }
}

/// Scanner and parser output for one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub errors: Vec<ParseError>,
}

impl Analysis {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn lexical_error_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_error()).count()
    }
}

/// Scan and parse `text`. The parser does not see the tokens.
pub fn analyze(text: &str, config: &ScannerConfig) -> Analysis {
    Analysis {
        tokens: Scanner::new(*config).scan(text),
        errors: ListParser::new().parse(text),
    }
}

// ==================== Text Output ====================

fn token_cells(token: &Token) -> [String; 6] {
    [
        token.code.code().to_string(),
        token.label(),
        token.lexeme.escape_debug().to_string(),
        token.span.line.to_string(),
        token.span.start_column.to_string(),
        token.span.end_column.to_string(),
    ]
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Token table, one row per token under a header row
pub fn render_token_table(tokens: &[Token]) -> String {
    let header: Vec<String> = TABLE_HEADER.iter().map(|h| h.to_string()).collect();
    let rows: Vec<[String; 6]> = tokens.iter().map(token_cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

/// Error log: one line per error, or [`NO_ERRORS`]
pub fn render_errors(errors: &[ParseError]) -> String {
    if errors.is_empty() {
        return NO_ERRORS.to_string();
    }
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n")
}

// ==================== JSON Output ====================

#[derive(Serialize)]
struct TokenRow<'a> {
    code: u8,
    kind: TokenCode,
    label: String,
    lexeme: &'a str,
    line: usize,
    start: usize,
    end: usize,
}

impl<'a> From<&'a Token> for TokenRow<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            code: token.code.code(),
            kind: token.code,
            label: token.label(),
            lexeme: &token.lexeme,
            line: token.span.line,
            start: token.span.start_column,
            end: token.span.end_column,
        }
    }
}

#[derive(Serialize)]
struct ErrorRow<'a> {
    message: String,
    found: String,
    #[serde(flatten)]
    error: &'a ParseError,
}

impl<'a> From<&'a ParseError> for ErrorRow<'a> {
    fn from(error: &'a ParseError) -> Self {
        Self {
            message: error.message(),
            found: error.symbol.to_string(),
            error,
        }
    }
}

#[derive(Serialize)]
struct AnalysisReport<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<TokenRow<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<ErrorRow<'a>>>,
}

/// Pretty-printed JSON carrying the selected output streams
pub fn to_json(analysis: &Analysis, streams: Streams) -> Result<String> {
    let report = AnalysisReport {
        valid: analysis.is_valid(),
        tokens: streams
            .tokens()
            .then(|| analysis.tokens.iter().map(TokenRow::from).collect()),
        errors: streams
            .errors()
            .then(|| analysis.errors.iter().map(ErrorRow::from).collect()),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
