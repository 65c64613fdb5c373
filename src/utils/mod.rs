//! Utility module

mod span;
mod error;

pub use span::{Span, Symbol};
pub use error::{Error, Expected, LexicalError, Result, SyntaxErrorKind};
