//! Token types shared by lexers, mappers and the parser.
//!
//!     A token is the unit that flows through the front-end pipeline: the selected lexer
//!     definition produces them, the mapper chain rewrites them one at a time, and the
//!     grammar stage consumes the result.
//!
//!     The `TokenKind` enum doubles as the logos definition used by the default text lexer
//!     (see [base_tokenization](crate::frontend::lexers::base_tokenization)). Custom lexers
//!     reuse the same kinds so that mappers can filter on them.

use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range as ByteRange;

/// Kinds of tokens produced by the lexers.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Number,

    // Double-quoted, backslash escapes, single line
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    // Anything else, one character at a time
    #[regex(r#"[^A-Za-z0-9_ \t\r\n"]"#)]
    Punct,
}

impl TokenKind {
    /// Name used in configuration files and debug output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Ident => "ident",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::Punct => "punct",
        }
    }

    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexed token: its kind, literal text and byte range in the source.
///
/// Tokens are values. Mappers never mutate a token in place; they receive one and
/// return a (possibly different) one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: ByteRange<usize>,
}

impl Token {
    /// Create a synthetic token with an empty span.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
            span: 0..0,
        }
    }

    pub fn with_span(mut self, span: ByteRange<usize>) -> Self {
        self.span = span;
        self
    }

    /// Return this token with its literal text replaced. Kind and span are kept.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Return this token retagged as `kind`. Value and span are kept.
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{:?}", self.kind, self.value, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logos_kinds() {
        let mut lexer = TokenKind::lexer("foo 42 \"hi\"\n;");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Ident)));
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Whitespace)));
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Number)));
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Whitespace)));
        assert_eq!(lexer.next(), Some(Ok(TokenKind::String)));
        assert_eq!(lexer.slice(), "\"hi\"");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Newline)));
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Punct)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_string_with_escapes() {
        let mut lexer = TokenKind::lexer(r#""a\"b""#);
        assert_eq!(lexer.next(), Some(Ok(TokenKind::String)));
        assert_eq!(lexer.slice(), r#""a\"b""#);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let mut lexer = TokenKind::lexer("\"abc");
        assert_eq!(lexer.next(), Some(Err(())));
    }

    #[test]
    fn test_with_helpers_keep_other_fields() {
        let token = Token::new(TokenKind::Ident, "foo").with_span(3..6);

        let renamed = token.clone().with_value("bar");
        assert_eq!(renamed.kind, TokenKind::Ident);
        assert_eq!(renamed.span, 3..6);
        assert_eq!(renamed.value, "bar");

        let retagged = token.with_kind(TokenKind::Punct);
        assert_eq!(retagged.value, "foo");
        assert_eq!(retagged.span, 3..6);
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::Ident, "foo").with_span(0..3);
        assert_eq!(token.to_string(), "ident(\"foo\")@0..3");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_value(Token::new(TokenKind::Number, "7")).unwrap();
        assert_eq!(json["kind"], "number");
        assert_eq!(json["value"], "7");

        let kind: TokenKind = serde_json::from_str("\"whitespace\"").unwrap();
        assert_eq!(kind, TokenKind::Whitespace);
        assert!(kind.is_trivia());
    }
}
