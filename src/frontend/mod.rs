//! Frontend module - Scanner, Parser, Recovery

pub mod token;
pub mod scanner;
pub mod recovery;
pub mod parser;

pub use parser::{parse, ListParser, ParseError};
pub use scanner::{scan, Scanner, ScannerConfig};
pub use token::{Token, TokenCode};
