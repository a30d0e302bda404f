//! Value expressions produced by the compiler.
//!
//! Only the handful of shapes needed to build combinators: references,
//! calls, literals, and the single-statement predicate functions used by
//! literal refinements.

/// Output expression tree. Built fresh per compilation, never shared.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `name`
    Ident(String),

    /// `object.property`
    Member(Box<Expr>, String),

    /// `callee(args...)`
    Call(Box<Expr>, Vec<Expr>),

    /// `[a, b]`
    Array(Vec<Expr>),

    /// `{ key: value, ... }`
    Object(Vec<ObjectProperty>),

    /// `'text'`
    String(String),

    /// Number literal kept in source spelling.
    Number(String),

    Bool(bool),

    /// `function (param) { return body; }`
    Function {
        param: Option<String>,
        body: Box<Expr>,
    },

    /// `left === right`
    StrictEq(Box<Expr>, Box<Expr>),

    /// `left || right`
    Or(Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    pub key: String,
    pub value: Expr,
}

impl ObjectProperty {
    pub fn new(key: impl Into<String>, value: Expr) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::String(value.into())
    }

    pub fn member(self, property: impl Into<String>) -> Self {
        Expr::Member(Box::new(self), property.into())
    }

    pub fn call(self, args: Vec<Expr>) -> Self {
        Expr::Call(Box::new(self), args)
    }

    pub fn or(self, fallback: Expr) -> Self {
        Expr::Or(Box::new(self), Box::new(fallback))
    }

    pub fn strict_eq(self, other: Expr) -> Self {
        Expr::StrictEq(Box::new(self), Box::new(other))
    }

    /// Predicate function returning `body`.
    pub fn function(param: Option<&str>, body: Expr) -> Self {
        Expr::Function {
            param: param.map(str::to_string),
            body: Box::new(body),
        }
    }

    /// Whether the identifier `name` is referenced anywhere in the tree.
    ///
    /// Member property names are not references.
    pub fn mentions(&self, name: &str) -> bool {
        match self {
            Expr::Ident(id) => id == name,
            Expr::Member(object, _) => object.mentions(name),
            Expr::Call(callee, args) => {
                callee.mentions(name) || args.iter().any(|arg| arg.mentions(name))
            }
            Expr::Array(items) => items.iter().any(|item| item.mentions(name)),
            Expr::Object(props) => props.iter().any(|prop| prop.value.mentions(name)),
            Expr::Function { param, body } => {
                param.as_deref() != Some(name) && body.mentions(name)
            }
            Expr::StrictEq(left, right) | Expr::Or(left, right) => {
                left.mentions(name) || right.mentions(name)
            }
            Expr::String(_) | Expr::Number(_) | Expr::Bool(_) => false,
        }
    }
}
