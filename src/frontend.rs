//! Token front-end for grammar-driven parsers
//!
//! This module assembles the stage that sits between the lexer and the grammar:
//!
//!     source text -> lexer definition -> tokens -> mapper chain -> grammar
//!
//! Structure:
//!     - `token`: token kinds and the `Token` value.
//!     - `lexers`: the `Lexer` trait, `LexerDefinition` handles, the default logos lexer.
//!     - `pipeline`: `Mapper`, `MapperChain` and the built-in mappers.
//!     - `options`: `ParserOption` and its constructors (`map`, `clear_mappers`, `lexer`).
//!     - `parser`: `ParserBuilder` applies options in order and yields a `Parser`.
//!     - `config`: TOML configuration translated into options.

pub mod config;
pub mod lexers;
pub mod options;
pub mod parser;
pub mod pipeline;
pub mod token;

pub use lexers::{LexError, Lexer, LexerDefinition, LexerRegistry, TextLexer};
pub use options::{clear_mappers, lexer, map, OptionError, ParserOption};
pub use parser::{Parser, ParserBuilder};
pub use pipeline::{Mapper, MapperChain};
pub use token::{Token, TokenKind};
