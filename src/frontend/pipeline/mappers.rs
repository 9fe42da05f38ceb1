//! Built-in mappers
//!
//! Ready-made token rewrites for the common cases: case folding, trimming, unquoting
//! string literals, retagging kinds and regex replacement. Each returns a plain
//! [`Mapper`], so they can be mixed freely with caller-supplied ones in a single
//! [`map`](crate::frontend::options::map) option.
//!
//! Mappers that take a list of kinds only touch tokens of those kinds and pass every
//! other token through untouched.

use crate::frontend::pipeline::mapper::Mapper;
use crate::frontend::token::{Token, TokenKind};
use regex::Regex;

fn kind_filter(kinds: &[TokenKind]) -> impl Fn(TokenKind) -> bool + Send + Sync + 'static {
    let kinds = kinds.to_vec();
    move |kind| kinds.is_empty() || kinds.contains(&kind)
}

/// Upper-case the value of tokens of the given kinds (all kinds when empty)
pub fn upper(kinds: &[TokenKind]) -> Mapper {
    let selected = kind_filter(kinds);
    Mapper::named("upper", move |token: Token| {
        if selected(token.kind) {
            let value = token.value.to_uppercase();
            token.with_value(value)
        } else {
            token
        }
    })
}

/// Lower-case the value of tokens of the given kinds (all kinds when empty)
pub fn lower(kinds: &[TokenKind]) -> Mapper {
    let selected = kind_filter(kinds);
    Mapper::named("lower", move |token: Token| {
        if selected(token.kind) {
            let value = token.value.to_lowercase();
            token.with_value(value)
        } else {
            token
        }
    })
}

/// Trim leading and trailing whitespace from every token's value
pub fn trim() -> Mapper {
    Mapper::named("trim", |token: Token| {
        let value = token.value.trim().to_string();
        token.with_value(value)
    })
}

/// Strip the quotes from string literals and resolve their escapes.
///
/// Applies to `String` tokens unless other kinds are given. Literals that are not
/// well formed are left as they are.
pub fn unquote(kinds: &[TokenKind]) -> Mapper {
    let kinds = if kinds.is_empty() {
        vec![TokenKind::String]
    } else {
        kinds.to_vec()
    };
    Mapper::named("unquote", move |token: Token| {
        if !kinds.contains(&token.kind) {
            return token;
        }
        match unquote_literal(&token.value) {
            Some(value) => token.with_value(value),
            None => token,
        }
    })
}

/// Retag tokens of kind `from` as `to`
pub fn rename(from: TokenKind, to: TokenKind) -> Mapper {
    Mapper::named("rename", move |token: Token| {
        if token.kind == from {
            token.with_kind(to)
        } else {
            token
        }
    })
}

/// Replace every match of `pattern` in token values with `replacement`.
///
/// `replacement` may use `$1`-style group references.
pub fn replace(pattern: &str, replacement: &str) -> Result<Mapper, regex::Error> {
    let regex = Regex::new(pattern)?;
    let replacement = replacement.to_string();
    Ok(Mapper::named("replace", move |token: Token| {
        let value = regex.replace_all(&token.value, replacement.as_str()).into_owned();
        token.with_value(value)
    }))
}

fn unquote_literal(value: &str) -> Option<String> {
    let inner = value.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                'r' => out.push('\r'),
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                _ => return None,
            },
            '"' => return None,
            c => out.push(c),
        }
    }

    Some(out)
}
