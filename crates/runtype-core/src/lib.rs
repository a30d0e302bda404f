#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core vocabulary for runtype.
//!
//! Two layers:
//! - **Runtime library**: the combinators and primitive types the compiler
//!   emits references to. The library itself is never implemented here.
//! - **Name registries**: reserved names, magic type names, and the global
//!   type registry consulted while compiling annotations.

use indexmap::{IndexMap, IndexSet};

pub mod utils;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod utils_tests;

/// Module the runtime library is imported from unless configured otherwise.
pub const DEFAULT_LIBRARY: &str = "tcomb";

/// Comment marker that opts a compilation unit into the transform.
pub const DEFAULT_DIRECTIVE: &str = "@tcomb";

// ============================================================================
// Runtime Library
// ============================================================================

/// Combinator constructors exposed by the runtime library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    List,
    Tuple,
    Maybe,
    Union,
    Dict,
    Refinement,
    Interface,
    Intersection,
    Enums,
    Irreducible,
}

impl Combinator {
    /// Member name on the library object.
    pub fn name(&self) -> &'static str {
        match self {
            Combinator::List => "list",
            Combinator::Tuple => "tuple",
            Combinator::Maybe => "maybe",
            Combinator::Union => "union",
            Combinator::Dict => "dict",
            Combinator::Refinement => "refinement",
            Combinator::Interface => "interface",
            Combinator::Intersection => "intersection",
            Combinator::Enums => "enums",
            Combinator::Irreducible => "irreducible",
        }
    }
}

/// Ready-made types exposed by the runtime library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Number,
    String,
    Boolean,
    /// `null` and `undefined`
    Nil,
    Any,
    Object,
    Function,
}

impl Primitive {
    /// Member name on the library object.
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Number => "Number",
            Primitive::String => "String",
            Primitive::Boolean => "Boolean",
            Primitive::Nil => "Nil",
            Primitive::Any => "Any",
            Primitive::Object => "Object",
            Primitive::Function => "Function",
        }
    }
}

// ============================================================================
// Reserved and Magic Names
// ============================================================================

/// Marks an intersection member as a refinement predicate: `$Refinement<typeof p>`.
pub const REFINEMENT_MARKER: &str = "$Refinement";

/// Reserved for reifying a type into its runtime combinator.
pub const REIFY_MARKER: &str = "$Reify";

/// Names users may never declare as a type alias or interface.
pub const RESERVED_NAMES: [&str; 2] = [REFINEMENT_MARKER, REIFY_MARKER];

/// Flow utility types with no runtime counterpart. They compile to `Any`.
pub const MAGIC_TYPES: [&str; 6] = ["$Shape", "$Keys", "$Diff", "$Abstract", "$Subtype", "$ObjMap"];

pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

pub fn is_magic_type(name: &str) -> bool {
    MAGIC_TYPES.contains(&name)
}

// ============================================================================
// Global Type Registry
// ============================================================================

/// Type names declared outside of any compilation unit.
///
/// Built once from configuration and only read afterwards. Configuration
/// provides a list of name sets (`[{"ReactClass": true}, ...]`); the sets are
/// merged and every key counts as registered, whatever its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(from = "Vec<IndexMap<String, bool>>")]
pub struct GlobalTypes {
    names: IndexSet<String>,
}

impl GlobalTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge name sets in order. Later sets add to earlier ones.
    pub fn from_sets<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = IndexMap<String, bool>>,
    {
        let names = sets.into_iter().flat_map(|set| set.into_keys()).collect();
        Self { names }
    }

    /// Register one more name.
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Registered names in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

impl From<Vec<IndexMap<String, bool>>> for GlobalTypes {
    fn from(sets: Vec<IndexMap<String, bool>>) -> Self {
        Self::from_sets(sets)
    }
}

impl<S: Into<String>> FromIterator<S> for GlobalTypes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parse a JSON list of name sets into a registry.
pub fn parse_globals(json: &str) -> Result<GlobalTypes, serde_json::Error> {
    serde_json::from_str(json)
}
