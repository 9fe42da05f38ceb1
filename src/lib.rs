//! # lexmap
//!
//! Options for the token front-end of a grammar-driven parser: install token mappers,
//! reset them, and choose the lexer definition a parser uses.
//!
//! Options are applied once, in order, while the parser is built. Mappers run on every
//! token in the order their options were supplied; `clear_mappers` drops everything
//! installed before it; the last `lexer` option wins.
//!
//! ```rust,ignore
//! use lexmap::frontend::{clear_mappers, map, Parser};
//! use lexmap::frontend::pipeline::mappers::{trim, upper};
//!
//! let parser = Parser::build([map([upper(&[])]), clear_mappers(), map([trim()])])?;
//! let tokens = parser.lex("foo bar")?;
//! ```

pub mod frontend;
