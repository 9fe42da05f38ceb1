//! End-to-end tests for option ordering: mapper chaining, resets and lexer selection.

use lexmap::frontend::options::{clear_mappers, from_fn, lexer, map, registered_lexer};
use lexmap::frontend::pipeline::mappers::{trim, unquote, upper};
use lexmap::frontend::{
    LexError, Lexer, LexerDefinition, LexerRegistry, OptionError, Parser, ParserBuilder, Token,
    TokenKind,
};

fn ident(value: &str) -> Token {
    Token::new(TokenKind::Ident, value)
}

/// Lexer that emits the whole source as a single token of a fixed kind
struct WholeSource(&'static str, TokenKind);

impl Lexer for WholeSource {
    fn name(&self) -> &str {
        self.0
    }

    fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        Ok(vec![Token::new(self.1, source).with_span(0..source.len())])
    }
}

#[test]
fn test_upper_maps_identifier() {
    let parser = Parser::build([map([upper(&[])])]).unwrap();

    assert_eq!(parser.map_token(ident("foo")), ident("FOO"));
}

#[test]
fn test_sequential_maps_apply_first_registered_first() {
    let parser = Parser::build([map([upper(&[])]), map([trim()])]).unwrap();

    let input = ident(" foo ");
    let expected = trim().apply(upper(&[]).apply(input.clone()));
    assert_eq!(parser.map_token(input), expected);
    assert_eq!(expected.value, "FOO");
}

#[test]
fn test_clear_between_maps_discards_earlier_mappers() {
    let parser = Parser::build([map([upper(&[])]), clear_mappers(), map([trim()])]).unwrap();

    let input = ident(" foo ");
    assert_eq!(parser.map_token(input.clone()), trim().apply(input));
    assert_eq!(parser.mappers().names(), vec!["trim"]);
}

#[test]
fn test_clear_after_maps_is_identity() {
    let parser = Parser::build([map([upper(&[]), trim()]), map([unquote(&[])]), clear_mappers()])
        .unwrap();

    for token in [ident(" foo "), Token::new(TokenKind::String, "\"x\"")] {
        assert_eq!(parser.map_token(token.clone()), token);
    }
}

#[test]
fn test_last_lexer_wins() {
    let first = LexerDefinition::new(WholeSource("first", TokenKind::Ident));
    let second = LexerDefinition::new(WholeSource("second", TokenKind::Punct));

    let parser = Parser::build([lexer(first.clone()), lexer(second.clone())]).unwrap();

    assert_eq!(parser.lexer(), &second);
    assert_ne!(parser.lexer(), &first);
    assert_eq!(parser.lex("x").unwrap()[0].kind, TokenKind::Punct);
}

#[test]
fn test_lexer_option_does_not_touch_mappers() {
    let def = LexerDefinition::new(WholeSource("whole", TokenKind::Ident));
    let parser = Parser::build([map([upper(&[])]), lexer(def), map([trim()])]).unwrap();

    assert_eq!(parser.mappers().names(), vec!["upper", "trim"]);
    assert_eq!(parser.lex(" abc ").unwrap(), vec![ident("ABC").with_span(0..5)]);
}

#[test]
fn test_multiple_mappers_in_one_map_call() {
    let exclaim = lexmap::frontend::Mapper::named("exclaim", |t: Token| {
        let value = format!("{}!", t.value);
        t.with_value(value)
    });

    // Order inside a single call is the order given
    let parser = Parser::build([map([trim(), exclaim.clone()])]).unwrap();
    assert_eq!(parser.map_token(ident(" a ")).value, "a!");

    let parser = Parser::build([map([exclaim, trim()])]).unwrap();
    assert_eq!(parser.map_token(ident(" a ")).value, "a !");
}

#[test]
fn test_empty_map_changes_nothing() {
    let with_empty = Parser::build([map([upper(&[])]), map(Vec::new())]).unwrap();
    let without = Parser::build([map([upper(&[])])]).unwrap();

    let token = ident("mixed Case");
    assert_eq!(with_empty.map_token(token.clone()), without.map_token(token));
}

#[test]
fn test_clear_removes_host_defaults_but_keeps_later_mappers() {
    let parser = ParserBuilder::new()
        .with_default_mappers([unquote(&[])])
        .build([clear_mappers(), map([upper(&[])])])
        .unwrap();

    let out = parser.map_token(Token::new(TokenKind::String, "\"a\""));
    assert_eq!(out.value, "\"A\"");
}

#[test]
fn test_failing_option_aborts_build() {
    let registry = LexerRegistry::with_defaults();
    let options = vec![
        map([upper(&[])]),
        registered_lexer(&registry, "missing"),
        from_fn("never", |_| panic!("options after a failure must not run")),
    ];

    let err = Parser::build(&options).unwrap_err();
    assert_eq!(err, OptionError::LexerNotFound("missing".to_string()));
    assert_eq!(err.to_string(), "Lexer 'missing' not found");
}

#[test]
fn test_lex_end_to_end() {
    let parser = Parser::build([map([unquote(&[]), upper(&[TokenKind::Ident])])]).unwrap();

    let tokens = parser.lex("say \"hi there\"").unwrap();
    let values: Vec<_> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["SAY", " ", "hi there"]);
}
