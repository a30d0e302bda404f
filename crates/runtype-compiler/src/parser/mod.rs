//! Parser for annotated source.
//!
//! # Architecture
//!
//! A small recursive-descent parser over logos tokens, producing the AST in
//! [`crate::ast`] directly:
//!
//! - Zero-copy lexing: tokens carry spans, text sliced only when building nodes
//! - Type declarations and imports are parsed structurally
//! - Every other statement is skipped as opaque text up to its end and carried
//!   through verbatim
//! - Comments are recorded while stepping over trivia and attached to the
//!   statement that follows them
//!
//! Parse errors are collected into [`Diagnostics`](crate::Diagnostics);
//! recursion fuel exhaustion aborts with [`Error::RecursionLimitExceeded`](crate::Error).

pub mod lexer;

mod core;
mod grammar;


pub use core::{DEFAULT_RECURSION_FUEL, ParseResult, Parser};
pub use lexer::{SyntaxKind, Token};

use crate::Result;
use lexer::lex;

/// Main entry point. Returns Err on recursion fuel exhaustion.
pub fn parse(source: &str) -> Result<ParseResult> {
    Parser::new(source, lex(source)).parse()
}

/// Parse with a custom recursion limit, `None` for unlimited.
pub fn parse_with_recursion_fuel(source: &str, limit: Option<u32>) -> Result<ParseResult> {
    Parser::new(source, lex(source))
        .with_recursion_fuel(limit)
        .parse()
}
