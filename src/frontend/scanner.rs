//! Scanner for the typed list language
//!
//! Converts source text into a flat list of classified tokens in one forward
//! pass. Malformed input never stops the scan: it becomes `TokenCode::Error`
//! tokens covering exactly the offending characters.

use log::{debug, trace};

use crate::frontend::token::{Token, TokenCode};
use crate::utils::{LexicalError, Span};

/// Scanner settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Read `"..."` as one `StringLiteral` token instead of emitting a lone
    /// quote marker for the opening `"`.
    pub read_string_literals: bool,
}

/// Tokenizer entry point.
///
/// Holds configuration only; every call to [`Scanner::scan`] works on its own
/// cursor, so one scanner can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScannerConfig,
}

impl Scanner {
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Tokenize the entire text
    pub fn scan(&self, text: &str) -> Vec<Token> {
        let mut state = ScanState::new(text, self.config);
        state.run();
        debug!(
            "scanned {} chars into {} tokens ({} errors)",
            state.source.len(),
            state.tokens.len(),
            state.tokens.iter().filter(|t| t.is_error()).count()
        );
        state.tokens
    }
}

/// Tokenize `text` with the default configuration
pub fn scan(text: &str) -> Vec<Token> {
    Scanner::default().scan(text)
}

/// Cursor and output of a single scan
struct ScanState {
    source: Vec<char>,
    /// Absolute position in `source`
    pos: usize,
    line: usize,
    /// Column of `pos` on the current line
    col: usize,
    config: ScannerConfig,
    tokens: Vec<Token>,
}

impl ScanState {
    fn new(text: &str, config: ScannerConfig) -> Self {
        Self {
            source: text.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            config,
            tokens: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn push(&mut self, token: Token) {
        trace!(
            "{}:{}-{} {:?} {:?}",
            token.span.line,
            token.span.start_column,
            token.span.end_column,
            token.code,
            token.lexeme
        );
        self.tokens.push(token);
    }

    /// Emit a one-character token for the current character and step past it
    fn single(&mut self, code: TokenCode) {
        let span = Span::single(self.line, self.col);
        if let Some(c) = self.advance() {
            self.push(Token::new(code, c, span));
        }
    }

    fn single_error(&mut self, fault: LexicalError) {
        let span = Span::single(self.line, self.col);
        if let Some(c) = self.advance() {
            self.push(Token::error(fault, c, span));
        }
    }

    fn run(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else if c.is_alphabetic() {
                self.read_identifier();
            } else if c.is_ascii_digit() {
                self.read_number();
            } else if c == '"' {
                if self.config.read_string_literals {
                    self.read_string();
                } else {
                    self.single(TokenCode::StringQuoteMarker);
                }
            } else if let Some(code) = TokenCode::punctuation(c) {
                // Signs are never folded into the number that follows.
                self.single(code);
            } else {
                self.single_error(LexicalError::InvalidCharacter);
            }
        }
    }

    /// Read an identifier or keyword.
    ///
    /// Non-ASCII letters inside the word become their own Error tokens without
    /// ending it; those tokens are emitted right after the identifier.
    fn read_identifier(&mut self) {
        let line = self.line;
        let start = self.col;

        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => {
                self.single_error(LexicalError::InvalidCharacter);
                return;
            }
        }

        let mut text = String::new();
        let mut inline_errors = Vec::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
                self.advance();
            } else if c.is_alphabetic() {
                inline_errors.push(Token::error(
                    LexicalError::InvalidIdentifierCharacter,
                    c,
                    Span::single(self.line, self.col),
                ));
                self.advance();
            } else {
                break;
            }
        }

        let code = TokenCode::keyword_or_identifier(&text);
        self.push(Token::new(code, text, Span::new(line, start, self.col - 1)));
        for token in inline_errors {
            self.push(token);
        }
    }

    /// Read an integer or float; at most one `.` belongs to the number
    fn read_number(&mut self) {
        let line = self.line;
        let start = self.col;
        let mut text = String::new();
        let mut has_dot = false;
        let mut has_digits = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                has_digits = true;
            } else if c == '.' && !has_dot {
                has_dot = true;
            } else {
                break;
            }
            text.push(c);
            self.advance();
        }

        let span = Span::new(line, start, self.col - 1);
        let token = if !has_digits {
            Token::error(LexicalError::MalformedNumber, text, span)
        } else if has_dot {
            Token::new(TokenCode::Float, text, span)
        } else {
            Token::new(TokenCode::Integer, text, span)
        };
        self.push(token);
    }

    /// Read a full string literal; the lexeme is the text between the quotes.
    ///
    /// The span stays on the starting line even when the literal crosses a
    /// newline: its end column counts every consumed character, quotes
    /// included, from the opening quote.
    fn read_string(&mut self) {
        let line = self.line;
        let start = self.col;
        let from = self.pos;
        self.advance(); // opening quote

        let mut value = String::new();
        let mut closed = false;
        while let Some(c) = self.advance() {
            if c == '"' {
                closed = true;
                break;
            }
            value.push(c);
        }

        let span = Span::new(line, start, start + (self.pos - from) - 1);
        let token = if closed {
            Token::new(TokenCode::StringLiteral, value, span)
        } else {
            Token::error(LexicalError::UnterminatedString, value, span)
        };
        self.push(token);
    }
}
