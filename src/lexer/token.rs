//! Token definitions produced by the scanner.

use std::fmt;

/// Source position captured during the scan (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of ASCII letters, digits, and hyphens; may lead with a hyphen.
    Identifier,
    /// Run of decimal digits. No sign, no decimal point, no exponent.
    Number,
    /// Double-quoted text. The token text excludes the quotes.
    String,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// Six-character color body introduced by `#`.
    HexColor,
    /// Anything the scanner does not recognize. The scan itself never fails;
    /// rejection is deferred to the grammar layer.
    Unknown,
    /// Appended exactly once after the scan completes.
    EndOfInput,
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lexical category.
    pub kind: TokenKind,
    /// The exact lexeme (empty for the end-of-input marker).
    pub text: String,
    /// Position of the first character of the lexeme.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}
