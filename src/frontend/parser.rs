//! Parser construction
//!
//! `ParserBuilder` is the parser under construction: it owns the lexer definition and
//! the mapper chain, and options get exclusive access to it one at a time. Once every
//! option has run, `build` hands back a `Parser` whose lexer and chain can no longer be
//! changed.
//!
//! Build protocol:
//!     1. Start from the default lexer (`text`) and the default mappers, if any.
//!     2. Apply each option in the order supplied.
//!     3. If an option fails, stop immediately and return its error unchanged. Later
//!        options are not run and no parser is produced.
//!
//! The grammar stage is not part of this crate; `Parser::lex` is the front-end it
//! would consume: tokenize with the selected lexer, then map every token.

use crate::frontend::lexers::{LexError, LexerDefinition, TEXT_LEXER};
use crate::frontend::options::{OptionError, ParserOption};
use crate::frontend::pipeline::{Mapper, MapperChain};
use crate::frontend::token::Token;
use log::{debug, trace, warn};

/// The parser under construction
#[derive(Debug, Clone)]
pub struct ParserBuilder {
    lexer: LexerDefinition,
    mappers: MapperChain,
}

impl ParserBuilder {
    /// Builder with the `text` lexer and no mappers
    pub fn new() -> Self {
        ParserBuilder {
            lexer: TEXT_LEXER.clone(),
            mappers: MapperChain::new(),
        }
    }

    /// Pre-install mappers that run before any added by options.
    ///
    /// Defaults are ordinary chain entries: `clear_mappers` removes them too.
    pub fn with_default_mappers<I>(mut self, mappers: I) -> Self
    where
        I: IntoIterator<Item = Mapper>,
    {
        self.mappers.extend(mappers);
        self
    }

    pub fn lexer(&self) -> &LexerDefinition {
        &self.lexer
    }

    pub fn set_lexer(&mut self, lexer: LexerDefinition) {
        self.lexer = lexer;
    }

    pub fn mappers(&self) -> &MapperChain {
        &self.mappers
    }

    pub fn mappers_mut(&mut self) -> &mut MapperChain {
        &mut self.mappers
    }

    /// Apply a single option
    pub fn apply(&mut self, option: &ParserOption) -> Result<(), OptionError> {
        option.apply(self)?;
        debug!(
            "applied option '{}': lexer={}, mappers={:?}",
            option.name(),
            self.lexer.name(),
            self.mappers.names()
        );
        Ok(())
    }

    /// Apply `options` in order and finish the parser.
    ///
    /// The first failing option aborts the build and its error is returned as is.
    pub fn build<I>(mut self, options: I) -> Result<Parser, OptionError>
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<ParserOption>,
    {
        use std::borrow::Borrow;

        for (index, option) in options.into_iter().enumerate() {
            let option: &ParserOption = option.borrow();
            if let Err(err) = self.apply(option) {
                warn!(
                    "option #{} '{}' failed, parser not built: {}",
                    index,
                    option.name(),
                    err
                );
                return Err(err);
            }
        }

        debug!(
            "parser built: lexer={}, {} mapper(s)",
            self.lexer.name(),
            self.mappers.len()
        );
        Ok(Parser {
            lexer: self.lexer,
            mappers: self.mappers,
        })
    }
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A configured front-end: the selected lexer plus the final mapper chain.
#[derive(Debug, Clone)]
pub struct Parser {
    lexer: LexerDefinition,
    mappers: MapperChain,
}

impl Parser {
    /// Build a parser from the defaults and `options`.
    ///
    /// Shorthand for `ParserBuilder::new().build(options)`.
    pub fn build<I>(options: I) -> Result<Self, OptionError>
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<ParserOption>,
    {
        ParserBuilder::new().build(options)
    }

    pub fn lexer(&self) -> &LexerDefinition {
        &self.lexer
    }

    pub fn mappers(&self) -> &MapperChain {
        &self.mappers
    }

    /// Run one token through the mapper chain
    pub fn map_token(&self, token: Token) -> Token {
        self.mappers.apply(token)
    }

    /// Tokenize `source` with the selected lexer and map every token.
    pub fn lex(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let tokens = self.lexer.tokenize(source)?;
        trace!(
            "lexer '{}' produced {} token(s)",
            self.lexer.name(),
            tokens.len()
        );

        Ok(tokens
            .into_iter()
            .map(|token| {
                let mapped = self.map_token(token);
                trace!("mapped {}", mapped);
                mapped
            })
            .collect())
    }
}
