//! Configuration loading for the token front-end.
//!
//! `defaults/frontend.default.toml` is embedded into the crate so that docs and runtime
//! behavior stay in sync. Applications layer their own files on top of those defaults
//! via [`Loader`] before deserializing into [`FrontendConfig`], which then turns into
//! an ordered list of parser options.

use crate::frontend::lexers::LexerRegistry;
use crate::frontend::options::{self, OptionError, ParserOption};
use crate::frontend::pipeline::{mappers, Mapper};
use crate::frontend::token::TokenKind;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/frontend.default.toml");

/// Top-level front-end configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrontendConfig {
    pub lexer: LexerConfig,
    pub mappers: MappersConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LexerConfig {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MappersConfig {
    pub clear_defaults: bool,
    pub chain: Vec<MapperSpec>,
}

/// A built-in mapper described in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MapperSpec {
    Upper {
        #[serde(default)]
        tokens: Vec<TokenKind>,
    },
    Lower {
        #[serde(default)]
        tokens: Vec<TokenKind>,
    },
    Trim,
    Unquote {
        #[serde(default)]
        tokens: Vec<TokenKind>,
    },
    Rename {
        from: TokenKind,
        to: TokenKind,
    },
    Replace {
        pattern: String,
        replacement: String,
    },
}

impl MapperSpec {
    /// Build the mapper this entry describes
    pub fn to_mapper(&self) -> Result<Mapper, OptionError> {
        Ok(match self {
            MapperSpec::Upper { tokens } => mappers::upper(tokens),
            MapperSpec::Lower { tokens } => mappers::lower(tokens),
            MapperSpec::Trim => mappers::trim(),
            MapperSpec::Unquote { tokens } => mappers::unquote(tokens),
            MapperSpec::Rename { from, to } => mappers::rename(*from, *to),
            MapperSpec::Replace {
                pattern,
                replacement,
            } => mappers::replace(pattern, replacement).map_err(|err| {
                OptionError::InvalidMapper {
                    mapper: "replace".to_string(),
                    message: err.to_string(),
                }
            })?,
        })
    }
}

impl FrontendConfig {
    /// Translate the configuration into parser options, in application order:
    /// `clear_mappers` (if requested), the lexer selection, then one `map` with the
    /// whole chain.
    ///
    /// Mapper descriptions are validated here. The lexer name is resolved against
    /// `registry` when the options are applied.
    pub fn options(&self, registry: &LexerRegistry) -> Result<Vec<ParserOption>, OptionError> {
        let chain = self
            .mappers
            .chain
            .iter()
            .map(MapperSpec::to_mapper)
            .collect::<Result<Vec<_>, _>>()?;

        let mut result = Vec::with_capacity(3);
        if self.mappers.clear_defaults {
            result.push(options::clear_mappers());
        }
        result.push(options::registered_lexer(registry, self.lexer.name.clone()));
        result.push(options::map(chain));
        Ok(result)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer TOML held in memory.
    pub fn with_toml_str(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<FrontendConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<FrontendConfig, ConfigError> {
    Loader::new().build()
}
