//! Program-level transform.
//!
//! Gated by a directive comment. Once active, type aliases and interfaces
//! become `const` bindings of their runtime combinators, type-only imports
//! are rewritten, and the runtime library import is added when needed.

mod declarations;
mod directive;
mod imports;
mod scope;
mod transformer;

#[cfg(test)]
mod directive_tests;
#[cfg(test)]
mod transform_tests;

pub use directive::{CommentEdit, DirectiveScan, scan as scan_directive};
pub use imports::is_relative;
pub use scope::UnitScope;
pub use transformer::{Activation, Transformer};
