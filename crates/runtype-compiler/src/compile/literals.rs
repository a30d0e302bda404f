//! Literal types become refinements of their primitive.
//!
//! They carry no display name, even as the whole right-hand side of a
//! declaration.

use runtype_core::Primitive;

use crate::ast::{Expr, NumberLiteral};
use crate::emit::CombinatorBuilder;

/// `_t.refinement(_t.Number, function (n) { return n === 42; })`
///
/// The literal keeps its source spelling so `0x2A` compares as written.
pub(super) fn number(builder: &CombinatorBuilder, literal: &NumberLiteral) -> Expr {
    let predicate = Expr::function(
        Some("n"),
        Expr::ident("n").strict_eq(Expr::Number(literal.raw.clone())),
    );
    builder.refinement(builder.primitive(Primitive::Number), predicate, None)
}

/// `_t.refinement(_t.Boolean, function (b) { return b === true; })`
pub(super) fn boolean(builder: &CombinatorBuilder, value: bool) -> Expr {
    let predicate = Expr::function(Some("b"), Expr::ident("b").strict_eq(Expr::Bool(value)));
    builder.refinement(builder.primitive(Primitive::Boolean), predicate, None)
}
