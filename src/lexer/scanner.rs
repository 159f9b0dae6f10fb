//! Single-pass scanner for the flat stylesheet format.
//!
//! The scanner classifies characters into tokens, left to right, and never
//! fails: anything it does not recognize becomes a [`TokenKind::Unknown`]
//! token carrying the raw text, leaving rejection to the parser. Whitespace
//! and `/* ... */` comments are skipped and produce no tokens.

use crate::lexer::{Span, Token, TokenKind};

/// Placeholder text held by the Unknown token produced for a `#` color whose
/// body is not exactly 6 characters long.
pub const INVALID_COLOR: &str = "<InvalidColor>";

/// Single-pass lexer over stylesheet source text.
///
/// Positions are tracked as 1-indexed line/column pairs so every token can be
/// tagged with the [`Span`] of its first character.
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Create a lexer over `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scan the entire input, producing the token sequence in source order.
    ///
    /// The sequence is terminated by exactly one [`TokenKind::EndOfInput`]
    /// token spanned at the position past the last character.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            let span = self.span();
            match c {
                c if c.is_ascii_whitespace() => {
                    self.bump();
                }
                c if c.is_ascii_alphabetic() || c == '-' => {
                    tokens.push(self.lex_identifier(span));
                }
                c if c.is_ascii_digit() => {
                    tokens.push(self.lex_number(span));
                }
                '"' => {
                    tokens.push(self.lex_string(span));
                }
                ':' => {
                    self.bump();
                    tokens.push(Token::new(TokenKind::Colon, ":", span));
                }
                ';' => {
                    self.bump();
                    tokens.push(Token::new(TokenKind::Semicolon, ";", span));
                }
                '{' => {
                    self.bump();
                    tokens.push(Token::new(TokenKind::BraceOpen, "{", span));
                }
                '}' => {
                    self.bump();
                    tokens.push(Token::new(TokenKind::BraceClose, "}", span));
                }
                '#' => {
                    tokens.push(self.lex_hex_color(span));
                }
                '/' if self.peek_second() == Some('*') => {
                    self.skip_comment();
                }
                _ => {
                    self.bump();
                    tokens.push(Token::new(TokenKind::Unknown, c.to_string(), span));
                }
            }
        }

        tokens.push(Token::new(TokenKind::EndOfInput, "", self.span()));
        tracing::debug!("scanned {} tokens", tokens.len());
        tokens
    }

    fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume characters while `keep` holds, returning the matched slice.
    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'src str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !keep(c) {
                break;
            }
            self.bump();
        }
        &self.source[start..self.pos]
    }

    fn lex_identifier(&mut self, span: Span) -> Token {
        let text = self.take_while(|c| c.is_ascii_alphanumeric() || c == '-');
        Token::new(TokenKind::Identifier, text, span)
    }

    fn lex_number(&mut self, span: Span) -> Token {
        let text = self.take_while(|c| c.is_ascii_digit());
        Token::new(TokenKind::Number, text, span)
    }

    /// An unterminated string consumes to end of input with no error; the
    /// closing quote is optional in practice.
    fn lex_string(&mut self, span: Span) -> Token {
        self.bump(); // opening quote
        let text = self.take_while(|c| c != '"');
        self.bump(); // closing quote, if present
        Token::new(TokenKind::String, text, span)
    }

    /// `#` introduces a color candidate whose body runs up to the next `;`.
    /// Only a body of exactly 6 characters becomes a HexColor token (the
    /// characters are not validated as hex digits); anything else becomes an
    /// Unknown token holding [`INVALID_COLOR`], which the parser rejects
    /// wherever a value is required.
    fn lex_hex_color(&mut self, span: Span) -> Token {
        self.bump(); // '#'
        let body = self.take_while(|c| c != ';');
        if body.chars().count() == 6 {
            Token::new(TokenKind::HexColor, body, span)
        } else {
            Token::new(TokenKind::Unknown, INVALID_COLOR, span)
        }
    }

    /// Skip a `/* ... */` block comment, including the delimiters. An
    /// unterminated comment silently consumes to end of input.
    fn skip_comment(&mut self) {
        self.bump(); // '/'
        self.bump(); // '*'
        while let Some(c) = self.bump() {
            if c == '*' && self.peek() == Some('/') {
                self.bump();
                break;
            }
        }
    }
}
