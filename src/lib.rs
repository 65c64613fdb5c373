//! listlang
//!
//! Tokenizer and syntax checker for the typed list language
//! (`ID = [ elem, elem, ... ];`). The scanner and the parser read the same
//! text independently: tokens are for display, and the parser collects every
//! syntax error in one pass using synchronization-set recovery.

pub mod frontend;
pub mod report;
pub mod utils;

pub use frontend::{parse, scan, ListParser, ParseError, Scanner, ScannerConfig, Token, TokenCode};
pub use report::{analyze, Analysis};
