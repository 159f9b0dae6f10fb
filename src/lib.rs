//! Flat CSS-like stylesheet reader.
//!
//! `flatstyle` parses a restricted subset of CSS — named rules, each holding a
//! flat set of `property: value;` declarations — into a plain nested map. It
//! is meant for applications that want CSS-looking configuration without CSS
//! semantics: no cascading, no combinators, no nested selectors, no units.
//! All values are opaque text at this layer.
//!
//! # Example
//!
//! ```
//! use flatstyle::Stylesheet;
//!
//! let sheet = Stylesheet::from_css("button { color: #1a2b3c; padding: 4; }")?;
//! assert_eq!(sheet.value("button", "padding"), Some("4"));
//! # Ok::<(), flatstyle::Error>(())
//! ```
//!
//! The `Result`-returning helpers above reject malformed input outright.
//! Callers that want the partially built stylesheet alongside the recorded
//! error drive a [`parser::Parser`] session directly and check its
//! [`had_error`](parser::Parser::had_error) flag after parsing.

pub mod lexer;
pub mod parser;
pub mod rules;

mod error;

pub use error::{Error, Result};
pub use rules::{PropertyTable, Stylesheet};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::lexer::{Lexer, Span, Token, TokenKind};
    pub use crate::parser::{ParseError, Parser, parse_css};
    pub use crate::rules::{PropertyTable, Stylesheet};
}
