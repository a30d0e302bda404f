//! Type annotation AST nodes.
//!
//! The closed set of annotation shapes the compiler understands:
//! - Primitive keywords (number, string, mixed, ...)
//! - Generic references (`Foo`, `A.B`, `Array<T>`)
//! - Structural types (arrays, tuples, objects, unions, intersections)
//! - Literal types (`'foo'`, `1`, `true`)

use rowan::TextRange;

use super::expression::Expr;

/// Type annotation with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnnotation {
    pub ty: Type,
    pub span: TextRange,
}

impl TypeAnnotation {
    pub fn new(ty: Type, span: TextRange) -> Self {
        Self { ty, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Keyword types: number, string, mixed, empty, `*`, ...
    Primitive(PrimitiveType),

    /// Function type: (x: number) => string
    Function(FunctionType),

    /// typeof value
    Typeof(QualifiedName),

    /// T[]
    Array(Box<TypeAnnotation>),

    /// ?T
    Nullable(Box<TypeAnnotation>),

    /// [A, B]
    Tuple(Vec<TypeAnnotation>),

    /// A | B
    Union(Vec<TypeAnnotation>),

    /// A & B
    Intersection(Vec<TypeAnnotation>),

    /// { a: A } or {| a: A |}
    Object(ObjectType),

    /// Foo, A.B, Array<T>
    Generic(GenericType),

    /// 'foo'
    StringLiteral(String),

    /// 42
    NumberLiteral(NumberLiteral),

    /// true
    BooleanLiteral(bool),

    /// 42n
    BigIntLiteral(String),

    /// Obj['key']
    IndexedAccess(IndexedAccessType),
}

impl Type {
    /// Human-readable node kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Primitive(p) => p.kind_name(),
            Type::Function(_) => "function type",
            Type::Typeof(_) => "typeof type",
            Type::Array(_) => "array type",
            Type::Nullable(_) => "nullable type",
            Type::Tuple(_) => "tuple type",
            Type::Union(_) => "union type",
            Type::Intersection(_) => "intersection type",
            Type::Object(_) => "object type",
            Type::Generic(_) => "generic type",
            Type::StringLiteral(_) => "string literal type",
            Type::NumberLiteral(_) => "number literal type",
            Type::BooleanLiteral(_) => "boolean literal type",
            Type::BigIntLiteral(_) => "bigint literal type",
            Type::IndexedAccess(_) => "indexed access type",
        }
    }
}

// ============================================================================
// Primitive Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Number,
    String,
    Boolean,
    Void,
    Null,
    Any,
    Mixed,
    Empty,
    Symbol,
    /// `*`
    Existential,
}

impl PrimitiveType {
    /// Keyword spelling, `None` for the existential `*`.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            PrimitiveType::Number => Some("number"),
            PrimitiveType::String => Some("string"),
            PrimitiveType::Boolean => Some("boolean"),
            PrimitiveType::Void => Some("void"),
            PrimitiveType::Null => Some("null"),
            PrimitiveType::Any => Some("any"),
            PrimitiveType::Mixed => Some("mixed"),
            PrimitiveType::Empty => Some("empty"),
            PrimitiveType::Symbol => Some("symbol"),
            PrimitiveType::Existential => None,
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let p = match keyword {
            "number" => PrimitiveType::Number,
            "string" => PrimitiveType::String,
            "boolean" => PrimitiveType::Boolean,
            "void" => PrimitiveType::Void,
            "null" => PrimitiveType::Null,
            "any" => PrimitiveType::Any,
            "mixed" => PrimitiveType::Mixed,
            "empty" => PrimitiveType::Empty,
            "symbol" => PrimitiveType::Symbol,
            _ => return None,
        };
        Some(p)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            PrimitiveType::Number => "number type",
            PrimitiveType::String => "string type",
            PrimitiveType::Boolean => "boolean type",
            PrimitiveType::Void => "void type",
            PrimitiveType::Null => "null type",
            PrimitiveType::Any => "any type",
            PrimitiveType::Mixed => "mixed type",
            PrimitiveType::Empty => "empty type",
            PrimitiveType::Symbol => "symbol type",
            PrimitiveType::Existential => "existential type",
        }
    }
}

// ============================================================================
// Names
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub span: TextRange,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: TextRange) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Dotted reference: `Foo` or `A.B.C`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    /// Never empty.
    pub segments: Vec<Identifier>,
}

impl QualifiedName {
    pub fn simple(id: Identifier) -> Self {
        Self { segments: vec![id] }
    }

    /// The name when unqualified, `None` for `A.B`.
    pub fn as_simple(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [id] => Some(id.name.as_str()),
            _ => None,
        }
    }

    /// Rightmost segment: `C` in `A.B.C`.
    pub fn last(&self) -> &Identifier {
        &self.segments[self.segments.len() - 1]
    }

    pub fn span(&self) -> TextRange {
        let first = self.segments[0].span;
        first.cover(self.last().span)
    }

    /// Value reference with the same spelling: identifier or member chain.
    pub fn to_expr(&self) -> Expr {
        let head = Expr::ident(&self.segments[0].name);
        self.segments[1..]
            .iter()
            .fold(head, |object, id| object.member(&id.name))
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, id) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&id.name)?;
        }
        Ok(())
    }
}

// ============================================================================
// Composite Types
// ============================================================================

/// Generic reference: `Foo`, `A.B`, `Array<T>`
#[derive(Debug, Clone, PartialEq)]
pub struct GenericType {
    pub id: QualifiedName,
    pub type_args: Option<Vec<TypeAnnotation>>,
}

impl GenericType {
    pub fn type_args(&self) -> &[TypeAnnotation] {
        self.type_args.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub value: f64,
    /// Source spelling, kept so the emitted predicate compares the same literal.
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub params: Vec<FunctionTypeParam>,
    pub rest: Option<Box<FunctionTypeParam>>,
    pub return_type: Box<TypeAnnotation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionTypeParam {
    pub name: Option<Identifier>,
    pub ty: TypeAnnotation,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectType {
    pub properties: Vec<ObjectTypeProperty>,
    pub indexers: Vec<ObjectTypeIndexer>,
    /// `{| ... |}`
    pub exact: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeProperty {
    pub key: PropertyKey,
    pub value: TypeAnnotation,
    pub optional: bool,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    Identifier(Identifier),
    String(String),
}

impl PropertyKey {
    pub fn name(&self) -> &str {
        match self {
            PropertyKey::Identifier(id) => &id.name,
            PropertyKey::String(s) => s,
        }
    }
}

/// `[key: K]: V`
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeIndexer {
    pub id: Option<Identifier>,
    pub key: TypeAnnotation,
    pub value: TypeAnnotation,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedAccessType {
    pub object: Box<TypeAnnotation>,
    pub index: Box<TypeAnnotation>,
}

// ============================================================================
// Type Parameters
// ============================================================================

/// Generic parameter of a declaration: `T`, `+T: Bound = Default`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameter {
    pub name: Identifier,
    pub bound: Option<TypeAnnotation>,
    pub default: Option<TypeAnnotation>,
    pub span: TextRange,
}
