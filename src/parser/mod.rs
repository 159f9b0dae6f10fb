//! Recursive-descent parsing of the token stream.

mod css_parser;
mod error;

pub use css_parser::{Parser, parse_css};
pub use error::ParseError;
