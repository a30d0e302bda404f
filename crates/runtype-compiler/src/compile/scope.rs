use indexmap::IndexSet;

use crate::ast::TypeParameter;

/// Generic parameter names of the declaration being compiled.
///
/// References to these compile to `Any`: generics are not checked at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeParams {
    names: IndexSet<String>,
}

impl TypeParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters declared by a type alias or interface, if any.
    pub fn from_declaration(params: Option<&[TypeParameter]>) -> Self {
        params
            .unwrap_or_default()
            .iter()
            .map(|param| param.name.name.as_str())
            .collect()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<S: Into<String>> FromIterator<S> for TypeParams {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
