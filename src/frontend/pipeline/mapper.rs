//! Token mappers and the mapper chain
//!
//! A `Mapper` is a pure `Token -> Token` function. Mappers compose with `then`, which
//! runs the receiver first and the argument second:
//!
//! ```rust,ignore
//! let both = upper.then(trim);   // both(t) == trim(upper(t))
//! ```
//!
//! `Mapper::compose` folds a list left to right with `then`, so the first mapper listed
//! is the first applied.
//!
//! # The chain
//!
//! `MapperChain` is what a parser actually holds. It is an explicit ordered list rather
//! than one nested closure: each `map` option pushes the single mapper it composed, and
//! `clear_mappers` empties the list. Applying the chain folds the token through every
//! entry in order, so mappers run in the exact order their options were supplied. An
//! empty chain is the identity.

use crate::frontend::token::Token;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type MapFn = dyn Fn(Token) -> Token + Send + Sync;

/// A named, cloneable token rewriting function.
#[derive(Clone)]
pub struct Mapper {
    name: Cow<'static, str>,
    run_fn: Arc<MapFn>,
}

impl Mapper {
    /// Create an anonymous mapper from a function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Token) -> Token + Send + Sync + 'static,
    {
        Self::named("anonymous", f)
    }

    /// Create a mapper with a name shown in logs and `Debug` output
    pub fn named<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(Token) -> Token + Send + Sync + 'static,
    {
        Mapper {
            name: name.into(),
            run_fn: Arc::new(f),
        }
    }

    /// Mapper that returns every token unchanged
    pub fn identity() -> Self {
        Self::named("identity", |token| token)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run this mapper on a single token
    pub fn apply(&self, token: Token) -> Token {
        (self.run_fn)(token)
    }

    /// Compose two mappers: the result applies `self` first, then `next`.
    pub fn then(self, next: Mapper) -> Mapper {
        let name = format!("{} > {}", self.name, next.name);
        let prev_run = self.run_fn;
        let next_run = next.run_fn;
        Mapper {
            name: Cow::Owned(name),
            run_fn: Arc::new(move |token: Token| next_run(prev_run(token))),
        }
    }

    /// Left-fold a list of mappers into one, first listed applied first.
    ///
    /// Returns `None` for an empty list.
    pub fn compose<I>(mappers: I) -> Option<Mapper>
    where
        I: IntoIterator<Item = Mapper>,
    {
        mappers.into_iter().reduce(Mapper::then)
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mapper").field(&self.name).finish()
    }
}

/// The ordered list of mappers a parser applies to every token.
#[derive(Clone, Debug, Default)]
pub struct MapperChain {
    mappers: Vec<Mapper>,
}

impl MapperChain {
    pub fn new() -> Self {
        MapperChain {
            mappers: Vec::new(),
        }
    }

    /// Append a mapper; it runs after everything already in the chain.
    pub fn push(&mut self, mapper: Mapper) {
        self.mappers.push(mapper);
    }

    /// Drop every mapper, defaults included. The chain becomes the identity.
    pub fn clear(&mut self) {
        self.mappers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.mappers.iter().map(Mapper::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mapper> {
        self.mappers.iter()
    }

    /// Run a token through every mapper in order.
    pub fn apply(&self, token: Token) -> Token {
        self.mappers
            .iter()
            .fold(token, |token, mapper| mapper.apply(token))
    }

    /// Collapse the chain into a single mapper, `None` when empty.
    pub fn to_mapper(&self) -> Option<Mapper> {
        Mapper::compose(self.mappers.iter().cloned())
    }
}

impl FromIterator<Mapper> for MapperChain {
    fn from_iter<I: IntoIterator<Item = Mapper>>(iter: I) -> Self {
        MapperChain {
            mappers: iter.into_iter().collect(),
        }
    }
}

impl Extend<Mapper> for MapperChain {
    fn extend<I: IntoIterator<Item = Mapper>>(&mut self, iter: I) {
        self.mappers.extend(iter);
    }
}
