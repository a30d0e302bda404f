//! Type-only import rewriting.
//!
//! Types imported from a sibling module exist there as values once that
//! module is transformed, so the import only loses its `type` kind. Types
//! from an external package may not exist at runtime; each one is looked up
//! on a namespace import and falls back to `Any`.

use rowan::TextRange;
use runtype_core::Primitive;

use super::scope::UnitScope;
use crate::ast::{ConstDecl, Expr, Identifier, ImportDecl, ImportKind, ImportSpecifier, Statement};
use crate::emit::CombinatorBuilder;

/// `./x` and `../x` sources.
pub fn is_relative(source: &str) -> bool {
    source.starts_with("./") || source.starts_with("../")
}

/// `import type { A } from './a'` becomes `import { A } from './a'`.
pub fn into_value_import(import: ImportDecl) -> ImportDecl {
    ImportDecl {
        kind: ImportKind::Value,
        ..import
    }
}

/// `import type { A } from 'pkg'` becomes
///
/// ```js
/// import * as _pkg from 'pkg';
/// const A = _pkg.A || _t.Any;
/// ```
pub fn rewrite_external(
    import: &ImportDecl,
    scope: &mut UnitScope,
    builder: &CombinatorBuilder,
) -> Vec<Statement> {
    let namespace = scope.fresh_identifier(&import.source.value);
    let span = import.span;

    let mut statements = Vec::with_capacity(import.specifiers.len() + 1);
    statements.push(Statement::Import(ImportDecl {
        kind: ImportKind::Value,
        specifiers: vec![ImportSpecifier::Namespace(Identifier::new(
            namespace.as_str(),
            TextRange::empty(span.start()),
        ))],
        source: import.source.clone(),
        span,
    }));

    for specifier in &import.specifiers {
        let init = match specifier {
            ImportSpecifier::Namespace(_) => Expr::ident(namespace.as_str()),
            ImportSpecifier::Default(_) => fallback(builder, &namespace, "default"),
            ImportSpecifier::Named { imported, .. } => {
                fallback(builder, &namespace, &imported.name)
            }
        };
        statements.push(Statement::Const(ConstDecl {
            id: specifier.local().clone(),
            init,
            span,
        }));
    }

    statements
}

/// `_ns.name || _t.Any`
fn fallback(builder: &CombinatorBuilder, namespace: &str, name: &str) -> Expr {
    Expr::ident(namespace)
        .member(name)
        .or(builder.primitive(Primitive::Any))
}
