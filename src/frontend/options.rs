//! Parser options
//!
//! An option is a deferred mutation of the parser under construction. The builder
//! applies options strictly in the order they were supplied, each one seeing the
//! cumulative effect of the ones before it. The first option that fails stops the
//! build (see [`ParserBuilder::build`]).
//!
//! Constructors:
//!     - [`map`]: compose mappers and chain them after whatever is already installed.
//!     - [`clear_mappers`]: drop every installed mapper, defaults included.
//!     - [`lexer`]: select the lexer definition (last assignment wins).
//!     - [`registered_lexer`]: select a lexer by registry name.
//!     - [`from_fn`]: wrap an arbitrary closure as an option.
//!
//! Ordering example:
//!
//! ```rust,ignore
//! Parser::build([map([upper]), clear_mappers(), map([trim])])?;
//! // only `trim` is applied
//! ```

use crate::frontend::lexers::{LexerDefinition, LexerRegistry};
use crate::frontend::parser::ParserBuilder;
use crate::frontend::pipeline::Mapper;
use std::borrow::Cow;
use std::fmt;

/// Error returned by an option that cannot be applied
#[derive(Debug, Clone, PartialEq)]
pub enum OptionError {
    /// Generic failure with message
    Invalid(String),
    /// A lexer was requested by a name the registry does not know
    LexerNotFound(String),
    /// A mapper could not be constructed from its description
    InvalidMapper { mapper: String, message: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::Invalid(msg) => write!(f, "{}", msg),
            OptionError::LexerNotFound(name) => write!(f, "Lexer '{}' not found", name),
            OptionError::InvalidMapper { mapper, message } => {
                write!(f, "Mapper '{}' is invalid: {}", mapper, message)
            }
        }
    }
}

impl std::error::Error for OptionError {}

impl From<String> for OptionError {
    fn from(s: String) -> Self {
        OptionError::Invalid(s)
    }
}

impl From<&str> for OptionError {
    fn from(s: &str) -> Self {
        OptionError::Invalid(s.to_string())
    }
}

type ApplyFn = dyn Fn(&mut ParserBuilder) -> Result<(), OptionError> + Send + Sync;

/// A named configuration step applied to a [`ParserBuilder`].
///
/// Options are reusable: applying the same option to two builders configures both.
pub struct ParserOption {
    name: Cow<'static, str>,
    apply_fn: Box<ApplyFn>,
}

impl ParserOption {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply this option to a builder
    pub fn apply(&self, builder: &mut ParserBuilder) -> Result<(), OptionError> {
        (self.apply_fn)(builder)
    }
}

impl fmt::Debug for ParserOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParserOption").field(&self.name).finish()
    }
}

/// Wrap a closure as an option
pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, f: F) -> ParserOption
where
    F: Fn(&mut ParserBuilder) -> Result<(), OptionError> + Send + Sync + 'static,
{
    ParserOption {
        name: name.into(),
        apply_fn: Box::new(f),
    }
}

/// Apply `mappers` to every token, after any mappers already installed.
///
/// The mappers are composed once, here, in the order given. Applying the option
/// appends that single composed mapper to the parser's chain, so a chain built from
/// `map([a, b])` then `map([c])` rewrites a token as `c(b(a(t)))`. With no mappers
/// the option changes nothing.
pub fn map<I>(mappers: I) -> ParserOption
where
    I: IntoIterator<Item = Mapper>,
{
    let composed = Mapper::compose(mappers);
    from_fn("map", move |builder| {
        if let Some(mapper) = &composed {
            builder.mappers_mut().push(mapper.clone());
        }
        Ok(())
    })
}

/// Remove every installed mapper, including defaults.
///
/// Mappers added by later options are kept.
pub fn clear_mappers() -> ParserOption {
    from_fn("clear_mappers", |builder| {
        builder.mappers_mut().clear();
        Ok(())
    })
}

/// Use `definition` as the parser's lexer, replacing any previous choice.
///
/// No validation happens here; the definition is assigned as given.
pub fn lexer(definition: LexerDefinition) -> ParserOption {
    from_fn("lexer", move |builder| {
        builder.set_lexer(definition.clone());
        Ok(())
    })
}

/// Use the lexer registered under `name`.
///
/// The lookup happens when the option is applied, against a snapshot of `registry`
/// taken now. An unknown name fails the build with [`OptionError::LexerNotFound`].
pub fn registered_lexer(registry: &LexerRegistry, name: impl Into<String>) -> ParserOption {
    let registry = registry.clone();
    let name = name.into();
    from_fn("registered_lexer", move |builder| {
        let definition = registry
            .get(&name)
            .ok_or_else(|| OptionError::LexerNotFound(name.clone()))?;
        builder.set_lexer(definition);
        Ok(())
    })
}
