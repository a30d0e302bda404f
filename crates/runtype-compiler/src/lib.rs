//! runtype compiler: Flow type annotations to runtime combinators.
//!
//! This crate provides the transformation pipeline:
//! - `parser` - lexer and parser for the declaration subset of annotated source
//! - `compile` - type annotation to combinator expression mapping
//! - `transform` - directive gate, declaration and import rewriting
//! - `emit` - combinator construction and program printing
//! - `diagnostics` - error reporting
//! - `unit` - high-level facade over one compilation unit

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod parser;
pub mod transform;
pub mod unit;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use diagnostics::Diagnostics;
pub use unit::Unit;

/// Errors that can occur while transforming a unit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("parsing failed with {} errors", .0.error_count())]
    ParseError(Diagnostics),

    #[error("transform failed with {} errors", .0.error_count())]
    TransformError(Diagnostics),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for unit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parse, transform and print `source` in one go.
pub fn transform(source: &str, config: &Config) -> Result<String> {
    Ok(Unit::parse(source)?.transform(config)?.print())
}

#[cfg(test)]
mod lib_tests;
