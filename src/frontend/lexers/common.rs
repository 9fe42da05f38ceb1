//! Common lexer interfaces and registry
//!
//! This module defines the `Lexer` trait, the `LexerDefinition` handle a parser holds,
//! and the `LexerRegistry` used to look definitions up by name. Each lexer design
//! implements `Lexer`; the parser only ever sees it through a `LexerDefinition`.

use crate::frontend::token::Token;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    LexerNotFound(String),
    TokenizationFailed(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::LexerNotFound(name) => write!(f, "Lexer '{}' not found", name),
            LexError::TokenizationFailed(msg) => write!(f, "Tokenization failed: {}", msg),
        }
    }
}

impl std::error::Error for LexError {}

/// Trait for pluggable lexer implementations
pub trait Lexer: Send + Sync {
    /// Return the name of this lexer implementation
    fn name(&self) -> &str;

    /// Tokenize source text into tokens, in source order
    fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError>;
}

/// Opaque handle to the lexer a parser uses.
///
/// Cloning is cheap and shares the definition. Two handles compare equal only when
/// they point at the same definition, so assigning a handle and reading it back is
/// observable without the lexer itself implementing `PartialEq`.
#[derive(Clone)]
pub struct LexerDefinition {
    inner: Arc<dyn Lexer>,
}

impl LexerDefinition {
    pub fn new<L: Lexer + 'static>(lexer: L) -> Self {
        LexerDefinition {
            inner: Arc::new(lexer),
        }
    }

    pub fn from_arc(inner: Arc<dyn Lexer>) -> Self {
        LexerDefinition { inner }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        self.inner.tokenize(source)
    }
}

impl PartialEq for LexerDefinition {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for LexerDefinition {}

impl fmt::Debug for LexerDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LexerDefinition").field(&self.name()).finish()
    }
}

/// Registry for lexer implementations
///
/// Holds the available lexer definitions keyed by name. Registering a definition under
/// an existing name replaces the previous one.
#[derive(Clone, Default)]
pub struct LexerRegistry {
    lexers: HashMap<String, LexerDefinition>,
}

impl LexerRegistry {
    pub fn new() -> Self {
        LexerRegistry {
            lexers: HashMap::new(),
        }
    }

    /// Registry pre-populated with the built-in `text` lexer
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::frontend::lexers::TEXT_LEXER.clone());
        registry
    }

    pub fn register(&mut self, definition: LexerDefinition) {
        self.lexers.insert(definition.name().to_string(), definition);
    }

    pub fn get(&self, name: &str) -> Option<LexerDefinition> {
        self.lexers.get(name).cloned()
    }

    pub fn has(&self, name: &str) -> bool {
        self.lexers.contains_key(name)
    }

    /// Names of all registered lexers, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.lexers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look a lexer up by name, failing with `LexerNotFound`
    pub fn resolve(&self, name: &str) -> Result<LexerDefinition, LexError> {
        self.get(name)
            .ok_or_else(|| LexError::LexerNotFound(name.to_string()))
    }
}

impl fmt::Debug for LexerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexerRegistry")
            .field("lexers", &self.names())
            .finish()
    }
}
