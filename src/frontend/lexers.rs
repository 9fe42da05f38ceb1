//! Lexer definitions
//!
//! The lexer is an external collaborator of the front-end: it turns raw text into a
//! sequence of typed tokens. A parser holds exactly one `LexerDefinition`, chosen with
//! the [`lexer`](crate::frontend::options::lexer) option (last assignment wins).
//!
//! Structure:
//!     - `common`: the `Lexer` trait, the `LexerDefinition` handle and the registry.
//!     - `base_tokenization`: the logos-backed default definition (`text`).

pub mod base_tokenization;
pub mod common;

use once_cell::sync::Lazy;

pub use base_tokenization::{tokenize, TextLexer};
pub use common::{LexError, Lexer, LexerDefinition, LexerRegistry};

/// Shared handle to the built-in text lexer.
///
/// Every parser built without a `lexer` option uses this exact handle.
pub static TEXT_LEXER: Lazy<LexerDefinition> = Lazy::new(|| LexerDefinition::new(TextLexer));
