//! Syntax checker for the typed list language
//!
//! Recursive descent over the raw characters with one character of lookahead:
//!
//! ```text
//! START -> ID '=' '[' ELEMS ']' ';'
//! ID    -> LETTER { LETTER | DIGIT }
//! ELEMS -> ε | ELEM { ',' ELEM } [',']
//! ELEM  -> STRING | NUMBER
//! STRING -> '"' { any char except '"' } '"'
//! NUMBER -> ['+' | '-'] DIGIT+ ['.' DIGIT+]
//! ```
//!
//! The parser does not consume scanner tokens. Every mismatch is recorded and
//! followed by a skip to the grammar point's [`SyncSet`], so a single pass
//! reports all errors instead of the first one.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::frontend::recovery::{skip_until, SyncSet};
use crate::utils::{Expected, Symbol, SyntaxErrorKind};

/// One syntax diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub kind: SyntaxErrorKind,
    /// Character found at `position`, or the end-of-input sentinel
    pub symbol: Symbol,
    /// Zero-based character offset into the checked text
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: SyntaxErrorKind, symbol: Symbol, position: usize) -> Self {
        Self { kind, symbol, position }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[position {}] {} (found {})", self.position, self.kind, self.symbol)
    }
}

/// Grammar checker entry point. Stateless; each call owns its cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListParser;

impl ListParser {
    pub fn new() -> Self {
        Self
    }

    /// Check `text` against the grammar. An empty result means it is accepted.
    pub fn parse(&self, text: &str) -> Vec<ParseError> {
        let mut state = ParseState::new(text);
        state.parse_start();
        debug!("parsed {} chars, {} errors", state.source.len(), state.errors.len());
        state.errors
    }
}

/// Check `text` with a fresh parser
pub fn parse(text: &str) -> Vec<ParseError> {
    ListParser::new().parse(text)
}

struct ParseState {
    source: Vec<char>,
    pos: usize,
    errors: Vec<ParseError>,
}

impl ParseState {
    fn new(text: &str) -> Self {
        Self {
            source: text.chars().collect(),
            pos: 0,
            errors: Vec::new(),
        }
    }

    // ==================== Helper Methods ====================

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn bump(&mut self) {
        if self.pos < self.source.len() {
            self.pos += 1;
        }
    }

    fn check_digit(&self) -> bool {
        self.peek().map_or(false, |c| c.is_ascii_digit())
    }

    fn skip_spaces(&mut self) {
        while self.peek().map_or(false, char::is_whitespace) {
            self.bump();
        }
    }

    fn skip_digits(&mut self) {
        while self.check_digit() {
            self.bump();
        }
    }

    fn error_here(&mut self, kind: SyntaxErrorKind) {
        let error = ParseError::new(kind, Symbol::from_option(self.peek()), self.pos);
        debug!("{}", error);
        self.errors.push(error);
    }

    /// Record `kind` at the cursor, then skip to the next member of `sync`
    fn recover(&mut self, kind: SyntaxErrorKind, sync: SyncSet) {
        self.error_here(kind);
        let from = self.pos;
        self.pos = skip_until(&self.source, self.pos, sync);
        debug!("recovered at {} after skipping {} chars", self.pos, self.pos - from);
    }

    /// Consume `expected` or report it missing and synchronize
    fn expect(&mut self, expected: Expected, sync: SyncSet) -> bool {
        if self.peek() == Some(expected.as_char()) {
            self.bump();
            true
        } else {
            self.recover(SyntaxErrorKind::MissingSymbol(expected), sync);
            false
        }
    }

    // ==================== Grammar Rules ====================

    fn parse_start(&mut self) {
        self.skip_spaces();
        self.parse_identifier();
        self.skip_spaces();
        self.expect(Expected::Assign, SyncSet::ASSIGN);
        self.skip_spaces();
        self.expect(Expected::LBracket, SyncSet::OPEN_LIST);
        self.parse_elements();
        self.skip_spaces();
        self.expect(Expected::RBracket, SyncSet::CLOSE_LIST);
        self.skip_spaces();
        self.expect(Expected::Semicolon, SyncSet::END);
        self.skip_spaces();

        if !self.at_end() {
            self.error_here(SyntaxErrorKind::TrailingContent);
            self.pos = self.source.len();
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Digits after the first letter are reported but stay part of the name
    fn parse_identifier(&mut self) {
        if !self.peek().map_or(false, |c| c.is_ascii_alphabetic()) {
            self.recover(SyntaxErrorKind::InvalidIdentifierStart, SyncSet::IDENT);
            return;
        }
        self.bump();

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.error_here(SyntaxErrorKind::DigitInIdentifier);
            } else if !c.is_ascii_alphabetic() {
                break;
            }
            self.bump();
        }
    }

    fn parse_elements(&mut self) {
        self.skip_spaces();
        // A missing `]` at end of input is reported by the caller.
        if matches!(self.peek(), None | Some(']')) {
            return;
        }

        self.parse_element();
        loop {
            self.skip_spaces();
            if self.peek() != Some(',') {
                break;
            }
            self.bump();
            self.skip_spaces();
            if self.peek() == Some(']') {
                break;
            }
            self.parse_element();
        }
    }

    fn parse_element(&mut self) {
        self.skip_spaces();
        match self.peek() {
            Some('"') => self.parse_string(),
            Some('+' | '-') => self.parse_number(),
            Some(c) if c.is_ascii_digit() => self.parse_number(),
            _ => self.recover(SyntaxErrorKind::MissingElement, SyncSet::ELEMENT),
        }
    }

    fn parse_string(&mut self) {
        if !self.expect(Expected::OpeningQuote, SyncSet::ELEMENT) {
            return;
        }
        while let Some(c) = self.peek() {
            self.bump();
            if c == '"' {
                return;
            }
        }
        self.recover(SyntaxErrorKind::UnterminatedString, SyncSet::ELEMENT);
    }

    fn parse_number(&mut self) {
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        if !self.check_digit() {
            self.recover(SyntaxErrorKind::MissingDigitAfterSign, SyncSet::ELEMENT);
            return;
        }
        self.skip_digits();

        if self.peek() == Some('.') {
            self.bump();
            if !self.check_digit() {
                self.recover(SyntaxErrorKind::MissingDigitAfterDot, SyncSet::ELEMENT);
                return;
            }
            self.skip_digits();
        }
    }
}
