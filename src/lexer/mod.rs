//! Tokenization of stylesheet source text.

mod scanner;
mod token;

pub use scanner::{INVALID_COLOR, Lexer};
pub use token::{Span, Token, TokenKind};
