//! Parse errors recorded by a parsing session.

use std::fmt;

use crate::lexer::Span;

/// Syntax error with location information.
///
/// A session retains at most one of these at a time: each newly recorded
/// error replaces the previous one, and the session's sticky `had_error` flag
/// records that any error happened at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The error message describing what was expected.
    pub message: String,
    /// Position of the token the parser found instead (1-indexed).
    pub span: Span,
    /// The source line the error points into, trimmed. Empty when the session
    /// was built from a raw token sequence with no source text to quote.
    pub excerpt: String,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(message: impl Into<String>, span: Span, excerpt: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span,
            excerpt: excerpt.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at {}: {}", self.span, self.message)?;
        if !self.excerpt.is_empty() {
            write!(f, "\n> {}", self.excerpt)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
