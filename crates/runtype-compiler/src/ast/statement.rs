//! Program and statement nodes.
//!
//! Only the statements the transform cares about are modelled: type
//! declarations, imports, and exports of type declarations. Everything else
//! is carried through as verbatim source text.

use indexmap::IndexSet;
use rowan::TextRange;

use super::expression::Expr;
use super::types::{GenericType, Identifier, ObjectType, TypeAnnotation, TypeParameter};

/// Index into [`Program::comments`].
pub type CommentId = usize;

/// One compilation unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Every comment in the unit, in source order.
    pub comments: Vec<Comment>,
    pub body: Vec<Item>,
    /// Comments after the last statement.
    pub trailing_comments: Vec<CommentId>,
    /// Every identifier spelled anywhere in the unit. Generated bindings avoid these.
    pub names: IndexSet<String>,
}

impl Program {
    /// Leading comments attached to `item`.
    pub fn leading_comments<'a>(&'a self, item: &'a Item) -> impl Iterator<Item = &'a Comment> {
        item.leading_comments
            .iter()
            .filter_map(|&id| self.comments.get(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    /// Text between the delimiters.
    pub text: String,
    pub span: TextRange,
    /// Dropped from output.
    pub ignored: bool,
}

/// Statement plus the comments directly above it.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub leading_comments: Vec<CommentId>,
    pub stmt: Statement,
}

impl Item {
    pub fn new(stmt: Statement) -> Self {
        Self {
            leading_comments: Vec::new(),
            stmt,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// type Foo<T> = ...
    TypeAlias(TypeAliasDecl),

    /// interface Foo extends Bar { ... }
    Interface(InterfaceDecl),

    /// import ... from '...'
    Import(ImportDecl),

    /// export <declaration>
    Export(ExportDecl),

    /// const Foo = <expr>;
    Const(ConstDecl),

    /// Anything else, passed through untouched.
    Verbatim(Verbatim),
}

impl Statement {
    pub fn span(&self) -> TextRange {
        match self {
            Statement::TypeAlias(s) => s.span,
            Statement::Interface(s) => s.span,
            Statement::Import(s) => s.span,
            Statement::Export(s) => s.span,
            Statement::Const(s) => s.span,
            Statement::Verbatim(s) => s.span,
        }
    }
}

// ============================================================================
// Type Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDecl {
    pub id: Identifier,
    pub type_params: Option<Vec<TypeParameter>>,
    pub right: TypeAnnotation,
    /// Set programmatically by a host; `// recursive` comments are detected separately.
    pub recursive: bool,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub id: Identifier,
    pub type_params: Option<Vec<TypeParameter>>,
    pub extends: Vec<GenericType>,
    pub body: ObjectType,
    pub body_span: TextRange,
    pub recursive: bool,
    pub span: TextRange,
}

// ============================================================================
// Imports and Exports
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Value,
    /// import type ...
    Type,
    /// import typeof ...
    Typeof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub kind: ImportKind,
    pub specifiers: Vec<ImportSpecifier>,
    pub source: StringLiteral,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportSpecifier {
    /// import Foo from
    Default(Identifier),
    /// import * as Foo from
    Namespace(Identifier),
    /// import { imported as local } from
    Named {
        imported: Identifier,
        local: Identifier,
    },
}

impl ImportSpecifier {
    /// Binding introduced in the importing unit.
    pub fn local(&self) -> &Identifier {
        match self {
            ImportSpecifier::Default(id) | ImportSpecifier::Namespace(id) => id,
            ImportSpecifier::Named { local, .. } => local,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    pub span: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Value,
    Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDecl {
    pub kind: ExportKind,
    pub declaration: Box<Statement>,
    pub span: TextRange,
}

// ============================================================================
// Values
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ConstDecl {
    pub id: Identifier,
    pub init: Expr,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verbatim {
    pub text: String,
    pub span: TextRange,
    /// Declarations inside the statement's blocks, in source order.
    pub nested: Vec<Item>,
}
