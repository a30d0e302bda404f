//! Output side of the compiler: combinator expression construction and the
//! program printer.

mod builder;
mod printer;

#[cfg(test)]
mod emit_tests;

pub use builder::CombinatorBuilder;
pub use printer::{ProgramPrinter, expr_to_string, format_expr};
