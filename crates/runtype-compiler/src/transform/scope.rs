//! Per-unit binding names.

use indexmap::IndexSet;
use runtype_core::utils::uid_base;

use crate::ast::Expr;

/// Names taken in one compilation unit, plus the generated bindings for the
/// runtime library and its helpers.
///
/// Generated names follow the `_name`, `_name2`, `_name3`, ... scheme and
/// never collide with an identifier spelled anywhere in the unit.
#[derive(Debug, Clone)]
pub struct UnitScope {
    taken: IndexSet<String>,
    library: String,
    assert: String,
    extend: String,
    emitted: bool,
}

impl UnitScope {
    /// Start a unit whose source already spells `taken_names`.
    pub fn begin<I, S>(taken_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scope = Self {
            taken: taken_names.into_iter().map(Into::into).collect(),
            library: String::new(),
            assert: String::new(),
            extend: String::new(),
            emitted: false,
        };
        scope.library = scope.fresh_identifier("t");
        scope.assert = scope.fresh_identifier("assert");
        scope.extend = scope.fresh_identifier("extend");
        scope
    }

    /// Reserve and return a binding derived from `hint` (`tcomb-react` gives `_tcombReact`).
    pub fn fresh_identifier(&mut self, hint: &str) -> String {
        let base = uid_base(hint);
        let mut counter = 1usize;
        loop {
            let candidate = if counter > 1 {
                format!("_{base}{counter}")
            } else {
                format!("_{base}")
            };
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Reserve a user binding. Returns `false` if it was already taken.
    pub fn declare(&mut self, name: &str) -> bool {
        self.taken.insert(name.to_string())
    }

    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    /// Binding of the runtime library import.
    pub fn library(&self) -> &str {
        &self.library
    }

    /// Binding reserved for the assertion helper.
    pub fn assert(&self) -> &str {
        &self.assert
    }

    /// Binding reserved for the extend helper.
    pub fn extend(&self) -> &str {
        &self.extend
    }

    /// Record an emitted replacement; marks the library as used if it is referenced.
    pub fn note_emitted(&mut self, expr: &Expr) {
        if !self.emitted && expr.mentions(&self.library) {
            self.emitted = true;
        }
    }

    /// Whether any emitted replacement references the library binding.
    pub fn has_emitted(&self) -> bool {
        self.emitted
    }
}
