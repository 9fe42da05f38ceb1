//! Token mapping pipeline
//!
//! This module provides:
//! - The `Mapper` function type and its composition (`then`, `compose`)
//! - The `MapperChain` a parser holds and applies to every token
//! - Built-in mappers (`mappers::upper`, `mappers::unquote`, ...)

pub mod mapper;
pub mod mappers;

pub use mapper::{Mapper, MapperChain};
