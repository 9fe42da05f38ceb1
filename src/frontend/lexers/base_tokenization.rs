//! Base tokenization using the logos lexer
//!
//! This is where source strings become tokens for the default `text` lexer definition.
//! It is NOT a mapper: mappers rewrite tokens one at a time after this step.

use crate::frontend::lexers::common::{LexError, Lexer};
use crate::frontend::token::{Token, TokenKind};
use logos::Logos;

/// Tokenize source code with location information
///
/// Returns every token in source order. Input logos cannot match (an unterminated
/// string, for instance) fails the whole tokenization rather than being skipped.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                value: lexer.slice().to_string(),
                span: lexer.span(),
            }),
            Err(()) => {
                return Err(LexError::TokenizationFailed(format!(
                    "unexpected input {:?} at byte {}",
                    lexer.slice(),
                    lexer.span().start
                )))
            }
        }
    }

    Ok(tokens)
}

/// The built-in lexer definition, registered as `text`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextLexer;

impl TextLexer {
    pub const NAME: &'static str = "text";
}

impl Lexer for TextLexer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        tokenize(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenizes() {
        let tokens = tokenize("hello world").unwrap();
        assert_eq!(tokens.len(), 3);

        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "hello").with_span(0..5));
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[2], Token::new(TokenKind::Ident, "world").with_span(6..11));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
    }

    #[test]
    fn test_mixed_input() {
        let tokens = tokenize("let x = \"a b\";\n").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Ident,
                TokenKind::Whitespace,
                TokenKind::Ident,
                TokenKind::Whitespace,
                TokenKind::Punct,
                TokenKind::Whitespace,
                TokenKind::String,
                TokenKind::Punct,
                TokenKind::Newline,
            ]
        );
        assert_eq!(tokens[6].value, "\"a b\"");
    }

    #[test]
    fn test_spans_cover_source() {
        let source = "a1 + 22";
        let tokens = tokenize(source).unwrap();
        for token in &tokens {
            assert_eq!(&source[token.span.clone()], token.value);
        }
    }

    #[test]
    fn test_unterminated_string_fails() {
        let err = tokenize("x = \"oops").unwrap_err();
        match err {
            LexError::TokenizationFailed(msg) => assert!(msg.contains("at byte 4"), "{}", msg),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_text_lexer_name() {
        assert_eq!(TextLexer.name(), "text");
        assert_eq!(TextLexer.tokenize("a").unwrap().len(), 1);
    }
}
