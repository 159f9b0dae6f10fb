//! Error types for the stylesheet reader.

use std::path::PathBuf;

use crate::parser::ParseError;

/// Result type alias for stylesheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the convenience entry points.
///
/// A [`Parser`](crate::parser::Parser) session never returns these; it records
/// a [`ParseError`] as data instead. This enum exists for the
/// `Result`-returning wrappers (`parse_css`, `Stylesheet::from_css`,
/// `Stylesheet::from_file`).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Syntax error in stylesheet text.
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// File I/O error.
    #[error("failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse {
            message: error.message,
            line: error.span.line,
            column: error.span.column,
        }
    }
}
