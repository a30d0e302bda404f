//! Combinator call construction.

use runtype_core::{Combinator, Primitive};

use crate::ast::{Expr, ObjectProperty};

/// Builds expressions against one runtime library binding (`_t` by default).
#[derive(Debug, Clone)]
pub struct CombinatorBuilder {
    library: String,
}

impl CombinatorBuilder {
    pub fn new(library: impl Into<String>) -> Self {
        Self {
            library: library.into(),
        }
    }

    /// Binding the runtime library is imported as.
    pub fn library(&self) -> &str {
        &self.library
    }

    fn library_ref(&self) -> Expr {
        Expr::ident(&self.library)
    }

    /// `_t.Number`, `_t.Any`, ...
    pub fn primitive(&self, primitive: Primitive) -> Expr {
        self.library_ref().member(primitive.name())
    }

    /// `_t.<combinator>(args..., 'Name')`
    pub fn call(&self, combinator: Combinator, mut args: Vec<Expr>, name: Option<&str>) -> Expr {
        if let Some(name) = name {
            args.push(Expr::string(name));
        }
        self.library_ref()
            .member(combinator.name())
            .call(args)
    }

    pub fn list(&self, element: Expr, name: Option<&str>) -> Expr {
        self.call(Combinator::List, vec![element], name)
    }

    pub fn tuple(&self, types: Vec<Expr>, name: Option<&str>) -> Expr {
        self.call(Combinator::Tuple, vec![Expr::Array(types)], name)
    }

    pub fn maybe(&self, inner: Expr, name: Option<&str>) -> Expr {
        self.call(Combinator::Maybe, vec![inner], name)
    }

    pub fn union(&self, members: Vec<Expr>, name: Option<&str>) -> Expr {
        self.call(Combinator::Union, vec![Expr::Array(members)], name)
    }

    pub fn dict(&self, domain: Expr, codomain: Expr, name: Option<&str>) -> Expr {
        self.call(Combinator::Dict, vec![domain, codomain], name)
    }

    pub fn intersection(&self, members: Vec<Expr>, name: Option<&str>) -> Expr {
        self.call(Combinator::Intersection, vec![Expr::Array(members)], name)
    }

    pub fn refinement(&self, base: Expr, predicate: Expr, name: Option<&str>) -> Expr {
        self.call(Combinator::Refinement, vec![base, predicate], name)
    }

    /// `_t.enums.of(['a', 'b'], 'Name')`
    pub fn enums<I, S>(&self, values: I, name: Option<&str>) -> Expr
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(|v| Expr::String(v.into())).collect();
        let mut args = vec![Expr::Array(values)];
        if let Some(name) = name {
            args.push(Expr::string(name));
        }
        self.library_ref()
            .member(Combinator::Enums.name())
            .member("of")
            .call(args)
    }

    /// `_t.interface({ ... }, descriptor)`
    ///
    /// The descriptor is omitted for unnamed non-exact interfaces, the bare
    /// name for named ones, and `{ name, strict: true }` when exact.
    pub fn interface(&self, props: Vec<ObjectProperty>, name: Option<&str>, exact: bool) -> Expr {
        let mut args = vec![Expr::Object(props)];
        if let Some(descriptor) = interface_descriptor(name, exact) {
            args.push(descriptor);
        }
        self.library_ref()
            .member(Combinator::Interface.name())
            .call(args)
    }

    /// `_t.interface.extend([Base, { ... }], 'Name')`
    pub fn interface_extend(&self, mixins: Vec<Expr>, name: Option<&str>) -> Expr {
        let mut args = vec![Expr::Array(mixins)];
        if let Some(name) = name {
            args.push(Expr::string(name));
        }
        self.library_ref()
            .member(Combinator::Interface.name())
            .member("extend")
            .call(args)
    }

    /// `_t.irreducible('Empty', function () { return false; })`
    pub fn irreducible_empty(&self) -> Expr {
        let predicate = Expr::function(None, Expr::Bool(false));
        self.call(
            Combinator::Irreducible,
            vec![Expr::string("Empty"), predicate],
            None,
        )
    }
}

fn interface_descriptor(name: Option<&str>, exact: bool) -> Option<Expr> {
    match (name, exact) {
        (None, false) => None,
        (Some(name), false) => Some(Expr::string(name)),
        (Some(name), true) => Some(Expr::Object(vec![
            ObjectProperty::new("name", Expr::string(name)),
            ObjectProperty::new("strict", Expr::Bool(true)),
        ])),
        (None, true) => Some(Expr::Object(vec![ObjectProperty::new(
            "strict",
            Expr::Bool(true),
        )])),
    }
}
