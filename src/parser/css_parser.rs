//! Recursive-descent parser for the flat stylesheet grammar.
//!
//! ```text
//! stylesheet   := rule*
//! rule         := Identifier BraceOpen declaration* BraceClose
//! declaration  := Identifier Colon value Semicolon
//! value        := Number | String | Identifier | HexColor
//! ```
//!
//! The parser walks the token sequence with one-token lookahead. Syntax
//! errors are recorded as data rather than returned: a sticky `had_error`
//! flag plus a single last-error slot, where each new error replaces the
//! previous one. Parsing a malformed document never panics; the partially
//! built stylesheet stays readable afterward.

use crate::lexer::{Lexer, Span, Token, TokenKind};
use crate::parser::ParseError;
use crate::rules::Stylesheet;
use crate::{Error, Result};

/// Parse stylesheet text into a [`Stylesheet`].
///
/// Convenience wrapper over one [`Parser`] session. The recorded syntax
/// error, if any, is converted into [`Error::Parse`]; callers that want the
/// partial stylesheet for malformed input should drive a session themselves.
pub fn parse_css(css: &str) -> Result<Stylesheet> {
    let mut parser = Parser::new(css);
    parser.parse();
    if let Some(error) = parser.last_error() {
        return Err(Error::from(error.clone()));
    }
    Ok(parser.into_stylesheet())
}

/// A parsing session over one source text.
///
/// Construction tokenizes the source immediately; [`parse`](Self::parse) then
/// runs the grammar pass once. The session owns its copy of the source, the
/// token sequence, the stylesheet under construction, and the last recorded
/// error, all released together when the session is dropped.
pub struct Parser {
    source: String,
    tokens: Vec<Token>,
    position: usize,
    stylesheet: Stylesheet,
    had_error: bool,
    last_error: Option<ParseError>,
}

impl Parser {
    /// Create a session from source text. The text is tokenized up front;
    /// the scan itself cannot fail.
    pub fn new(css: &str) -> Self {
        let tokens = Lexer::new(css).tokenize();
        Self {
            source: css.to_owned(),
            tokens,
            position: 0,
            stylesheet: Stylesheet::new(),
            had_error: false,
            last_error: None,
        }
    }

    /// Create a session directly from a token sequence, bypassing the
    /// scanner. Useful for driving the grammar in isolation.
    ///
    /// The sequence is normalized to end with exactly one end-of-input
    /// marker. Recorded errors carry empty excerpts since there is no source
    /// text to quote.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if tokens
            .last()
            .is_none_or(|token| token.kind != TokenKind::EndOfInput)
        {
            let span = tokens.last().map_or(Span::new(1, 1), |token| token.span);
            tokens.push(Token::new(TokenKind::EndOfInput, "", span));
        }
        Self {
            source: String::new(),
            tokens,
            position: 0,
            stylesheet: Stylesheet::new(),
            had_error: false,
            last_error: None,
        }
    }

    /// Run the grammar pass once: parse rules until end of input, stopping as
    /// soon as an error has been recorded even if more rules remain.
    pub fn parse(&mut self) {
        while !self.is_at_end() && !self.had_error {
            self.parse_rule();
        }
    }

    /// The stylesheet built so far. Partial when an error was recorded.
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Consume the session, keeping only the stylesheet.
    pub fn into_stylesheet(self) -> Stylesheet {
        self.stylesheet
    }

    /// Whether any syntax error was recorded. Never cleared once set.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// The most recently recorded error, if any. Earlier errors from the
    /// same run have been replaced.
    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    fn record_error(&mut self, message: &str) {
        let span = self.peek().span;
        let excerpt = self
            .source
            .lines()
            .nth(span.line as usize - 1)
            .unwrap_or("")
            .trim()
            .to_owned();
        let error = ParseError::new(message, span, excerpt);
        tracing::warn!("stylesheet parse error: {}", error);
        self.last_error = Some(error);
        self.had_error = true;
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::EndOfInput
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    /// Consume one token if it has the expected kind. Consumes nothing on a
    /// mismatch; end of input never matches.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.is_at_end() || self.peek().kind != kind {
            return false;
        }
        self.advance();
        true
    }

    fn parse_rule(&mut self) {
        let selector = self.parse_selector();

        // A rule owns its table even when the block turns out to be empty or
        // malformed; re-declaring a selector merges into the existing table.
        self.stylesheet.entry(&selector);

        if !self.match_token(TokenKind::BraceOpen) {
            self.record_error("Expected '{' after selector.");
            return;
        }

        while self.peek().kind != TokenKind::BraceClose && !self.is_at_end() && !self.had_error {
            self.parse_declaration(&selector);
        }
        if self.had_error {
            return;
        }

        if !self.match_token(TokenKind::BraceClose) {
            self.record_error("Expected '}' after declaration block.");
        }
    }

    /// The selector is optional; a rule with no leading identifier lands
    /// under the empty name.
    fn parse_selector(&mut self) -> String {
        if self.match_token(TokenKind::Identifier) {
            self.previous().text.clone()
        } else {
            String::new()
        }
    }

    fn parse_declaration(&mut self, selector: &str) {
        if !self.match_token(TokenKind::Identifier) {
            self.record_error("Expected property name.");
            return;
        }
        let property = self.previous().text.clone();

        if !self.match_token(TokenKind::Colon) {
            self.record_error("Expected ':' after property name.");
            return;
        }

        let Some(value) = self.parse_value() else {
            self.record_error("Expected a value after '<property>:'.");
            return;
        };

        if !self.match_token(TokenKind::Semicolon) {
            self.record_error("Expected ';' after property value.");
            return;
        }

        self.stylesheet.insert(selector, property, value);
    }

    /// Every accepted value is kept verbatim as text, whatever its lexical
    /// kind.
    fn parse_value(&mut self) -> Option<String> {
        if self.match_token(TokenKind::Number)
            || self.match_token(TokenKind::String)
            || self.match_token(TokenKind::Identifier)
            || self.match_token(TokenKind::HexColor)
        {
            Some(self.previous().text.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(css: &str) -> Parser {
        let mut parser = Parser::new(css);
        parser.parse();
        parser
    }

    #[test]
    fn empty_input_is_an_empty_stylesheet() {
        let parser = parse("");
        assert!(!parser.had_error());
        assert!(parser.stylesheet().is_empty());
    }

    #[test]
    fn single_rule() {
        let parser = parse("a { color: red; }");
        assert!(!parser.had_error());
        assert_eq!(parser.stylesheet().value("a", "color"), Some("red"));
        assert_eq!(parser.stylesheet().len(), 1);
    }

    #[test]
    fn empty_declaration_block_is_legal() {
        let parser = parse("/* c */ a {}");
        assert!(!parser.had_error());
        assert_eq!(parser.stylesheet().len(), 1);
        assert!(parser.stylesheet().rule("a").unwrap().is_empty());
    }

    #[test]
    fn multiple_rules() {
        let parser = parse("a { x: 1; } b { y: 2; }");
        assert!(!parser.had_error());
        assert_eq!(parser.stylesheet().value("a", "x"), Some("1"));
        assert_eq!(parser.stylesheet().value("b", "y"), Some("2"));
    }

    #[test]
    fn values_are_stored_verbatim_regardless_of_kind() {
        let parser = parse("a { w: 14; x: \"str\"; y: keyword; z: #aabbcc; }");
        assert!(!parser.had_error());
        let sheet = parser.stylesheet();
        assert_eq!(sheet.value("a", "w"), Some("14"));
        assert_eq!(sheet.value("a", "x"), Some("str"));
        assert_eq!(sheet.value("a", "y"), Some("keyword"));
        assert_eq!(sheet.value("a", "z"), Some("aabbcc"));
    }

    #[test]
    fn redeclared_property_overwrites() {
        let parser = parse("a { x: 1; x: 2; }");
        assert!(!parser.had_error());
        assert_eq!(parser.stylesheet().value("a", "x"), Some("2"));
        assert_eq!(parser.stylesheet().rule("a").unwrap().len(), 1);
    }

    #[test]
    fn redeclared_selector_merges_into_existing_rule() {
        let parser = parse("a { x: 1; } a { y: 2; x: 3; }");
        assert!(!parser.had_error());
        assert_eq!(parser.stylesheet().len(), 1);
        assert_eq!(parser.stylesheet().value("a", "x"), Some("3"));
        assert_eq!(parser.stylesheet().value("a", "y"), Some("2"));
    }

    #[test]
    fn missing_colon_is_reported() {
        let parser = parse("a { color red; }");
        assert!(parser.had_error());
        let error = parser.last_error().unwrap();
        assert_eq!(error.message, "Expected ':' after property name.");
        assert_eq!(error.span, Span::new(1, 11));
        assert_eq!(error.excerpt, "a { color red; }");
    }

    #[test]
    fn short_hex_color_fails_value_parsing() {
        let parser = parse("a { c: #fff; }");
        assert!(parser.had_error());
        assert_eq!(
            parser.last_error().unwrap().message,
            "Expected a value after '<property>:'."
        );
    }

    #[test]
    fn missing_value_is_reported() {
        let parser = parse("a { c: ; }");
        assert!(parser.had_error());
        assert_eq!(
            parser.last_error().unwrap().message,
            "Expected a value after '<property>:'."
        );
    }

    #[test]
    fn missing_semicolon_is_reported() {
        let parser = parse("a { c: red }");
        assert!(parser.had_error());
        assert_eq!(
            parser.last_error().unwrap().message,
            "Expected ';' after property value."
        );
    }

    #[test]
    fn missing_property_name_is_reported() {
        let parser = parse("a { : red; }");
        assert!(parser.had_error());
        assert_eq!(parser.last_error().unwrap().message, "Expected property name.");
    }

    #[test]
    fn missing_open_brace_is_reported() {
        let parser = parse("a color: red; }");
        assert!(parser.had_error());
        assert_eq!(
            parser.last_error().unwrap().message,
            "Expected '{' after selector."
        );
    }

    #[test]
    fn truncated_input_reports_missing_close_brace() {
        let parser = parse("a { x: 1;");
        assert!(parser.had_error());
        assert_eq!(
            parser.last_error().unwrap().message,
            "Expected '}' after declaration block."
        );
        // Properties parsed before the truncation are retained.
        assert_eq!(parser.stylesheet().value("a", "x"), Some("1"));
    }

    #[test]
    fn no_rules_are_added_after_the_first_error() {
        let parser = parse("a { color red; } b { x: 1; }");
        assert!(parser.had_error());
        assert_eq!(
            parser.last_error().unwrap().message,
            "Expected ':' after property name."
        );
        assert!(parser.stylesheet().rule("b").is_none());
    }

    #[test]
    fn unknown_token_inside_block_terminates_with_an_error() {
        let parser = parse("a { @ }");
        assert!(parser.had_error());
        assert_eq!(parser.last_error().unwrap().message, "Expected property name.");
    }

    #[test]
    fn selector_is_optional() {
        let parser = parse("{ x: 1; }");
        assert!(!parser.had_error());
        assert_eq!(parser.stylesheet().value("", "x"), Some("1"));
    }

    #[test]
    fn comments_inside_blocks_are_elided() {
        let parser = parse("a { /* note */ x: 1; /* more */ }");
        assert!(!parser.had_error());
        assert_eq!(parser.stylesheet().value("a", "x"), Some("1"));
    }

    #[test]
    fn error_flag_is_sticky_and_single_slot() {
        let parser = parse("a { color red; }");
        assert!(parser.had_error());
        // Exactly one error survives, the most recently recorded one.
        assert!(parser.last_error().is_some());
    }

    #[test]
    fn grammar_can_be_driven_from_raw_tokens() {
        let at = Span::new(1, 1);
        let tokens = vec![
            Token::new(TokenKind::Identifier, "button", at),
            Token::new(TokenKind::BraceOpen, "{", at),
            Token::new(TokenKind::Identifier, "margin", at),
            Token::new(TokenKind::Colon, ":", at),
            Token::new(TokenKind::Number, "0", at),
            Token::new(TokenKind::Semicolon, ";", at),
            Token::new(TokenKind::BraceClose, "}", at),
        ];
        let mut parser = Parser::from_tokens(tokens);
        parser.parse();
        assert!(!parser.had_error());
        assert_eq!(parser.stylesheet().value("button", "margin"), Some("0"));
    }

    #[test]
    fn raw_token_session_reports_errors_without_excerpts() {
        let at = Span::new(1, 1);
        let mut parser = Parser::from_tokens(vec![Token::new(TokenKind::Identifier, "a", at)]);
        parser.parse();
        assert!(parser.had_error());
        let error = parser.last_error().unwrap();
        assert_eq!(error.message, "Expected '{' after selector.");
        assert_eq!(error.excerpt, "");
    }

    #[test]
    fn error_spans_point_at_later_lines() {
        let parser = parse("a {\n  x: 1;\n  y 2;\n}");
        assert!(parser.had_error());
        let error = parser.last_error().unwrap();
        assert_eq!(error.message, "Expected ':' after property name.");
        assert_eq!(error.span.line, 3);
        assert_eq!(error.excerpt, "y 2;");
    }

    #[test]
    fn malformed_input_logs_a_warning_and_completes() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let parser = parse("a { color: }");
        assert!(parser.had_error());
        assert_eq!(
            parser.last_error().unwrap().message,
            "Expected a value after '<property>:'."
        );
    }

    #[test]
    fn parse_css_rejects_malformed_input() {
        let error = parse_css("a { color red; }").unwrap_err();
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn parse_css_accepts_well_formed_input() {
        let sheet = parse_css("window { background-color: #08090E; font-size: 14; }").unwrap();
        assert_eq!(sheet.value("window", "background-color"), Some("08090E"));
        assert_eq!(sheet.value("window", "font-size"), Some("14"));
    }
}
