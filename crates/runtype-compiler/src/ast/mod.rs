//! Syntax tree shared by the parser, the compiler, and the printer.
//!
//! - `types`: type annotation nodes (compiler input)
//! - `expression`: value expressions (compiler output)
//! - `statement`: program structure, declarations, imports

mod expression;
mod statement;
mod types;

#[cfg(test)]
mod ast_tests;

pub use expression::{Expr, ObjectProperty};
pub use statement::{
    Comment, CommentId, CommentKind, ConstDecl, ExportDecl, ExportKind, ImportDecl, ImportKind,
    ImportSpecifier, InterfaceDecl, Item, Program, Statement, StringLiteral, TypeAliasDecl,
    Verbatim,
};
pub use types::{
    FunctionType, FunctionTypeParam, GenericType, Identifier, IndexedAccessType, NumberLiteral,
    ObjectType, ObjectTypeIndexer, ObjectTypeProperty, PrimitiveType, PropertyKey, QualifiedName,
    Type, TypeAnnotation, TypeParameter,
};
