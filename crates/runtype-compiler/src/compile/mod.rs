//! Type annotation compiler.
//!
//! Maps every annotation shape onto runtime combinator expressions built by
//! [`CombinatorBuilder`](crate::emit::CombinatorBuilder).
//!
//! # Module Organization
//!
//! - `compiler`: the recursive mapping and generic-name resolution
//! - `intersection`: merging plain and refinement members
//! - `literals`: literal types as refinement predicates
//! - `scope`: generic parameters of the declaration being compiled

mod compiler;
mod error;
mod intersection;
mod literals;
mod scope;


pub use compiler::Compiler;
pub use error::{CompileError, CompileResult, ShapeProblem};
pub use intersection::Member;
pub use scope::TypeParams;
