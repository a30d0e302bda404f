use rowan::TextRange;

use super::error::{CompileError, CompileResult, ShapeProblem};
use crate::ast::Expr;
use crate::emit::CombinatorBuilder;

/// One compiled member of an intersection type.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// Ordinary type, merged into the `intersection` call.
    Plain(Expr),
    /// `$Refinement<typeof predicate>`: wraps the merged type.
    Refinement { predicate: Expr },
}

/// Merge members: plain ones into a single `intersection` (or the lone
/// member itself), then each refinement wraps the result in source order.
pub(super) fn merge(
    builder: &CombinatorBuilder,
    members: Vec<Member>,
    name: Option<&str>,
    span: TextRange,
) -> CompileResult<Expr> {
    let (mut plain, mut predicates) = (Vec::new(), Vec::new());
    for member in members {
        match member {
            Member::Plain(expr) => plain.push(expr),
            Member::Refinement { predicate } => predicates.push(predicate),
        }
    }

    let mut result = match plain.len() {
        0 => {
            return Err(CompileError::shape(
                ShapeProblem::RefinementWithoutBase,
                span,
            ));
        }
        1 => plain.remove(0),
        _ => builder.intersection(plain, name),
    };

    for predicate in predicates {
        result = builder.refinement(result, predicate, name);
    }
    Ok(result)
}
