//! Compile errors.

use rowan::TextRange;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// A type annotation the compiler refuses to translate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    /// A declaration tries to bind a reserved name.
    #[error("`{name}` is a reserved type name")]
    ReservedName { name: String, span: TextRange },

    /// An annotation with a malformed or unsupported shape.
    #[error("{problem}")]
    Shape { problem: ShapeProblem, span: TextRange },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeProblem {
    /// `Array<...>` with a type argument count other than one.
    ArrayArity { found: usize },
    /// `$Refinement<...>` not shaped as `$Refinement<typeof predicate>`.
    InvalidRefinement,
    /// `$Exact<...>` without a single object type argument.
    InvalidExact,
    /// An intersection made of refinements only.
    RefinementWithoutBase,
    UnsupportedAnnotation { kind: &'static str },
}

impl std::fmt::Display for ShapeProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let detail = self.detail();
        f.write_str(&self.diagnostic_kind().message(detail.as_deref()))
    }
}

impl ShapeProblem {
    fn diagnostic_kind(&self) -> DiagnosticKind {
        match self {
            Self::ArrayArity { .. } => DiagnosticKind::ArrayArity,
            Self::InvalidRefinement => DiagnosticKind::InvalidRefinement,
            Self::InvalidExact => DiagnosticKind::InvalidExact,
            Self::RefinementWithoutBase => DiagnosticKind::RefinementWithoutBase,
            Self::UnsupportedAnnotation { .. } => DiagnosticKind::UnsupportedAnnotation,
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::ArrayArity { found } => Some(found.to_string()),
            Self::UnsupportedAnnotation { kind } => Some((*kind).to_string()),
            _ => None,
        }
    }
}

impl CompileError {
    pub fn shape(problem: ShapeProblem, span: TextRange) -> Self {
        Self::Shape { problem, span }
    }

    pub fn span(&self) -> TextRange {
        match self {
            Self::ReservedName { span, .. } | Self::Shape { span, .. } => *span,
        }
    }

    pub fn diagnostic_kind(&self) -> DiagnosticKind {
        match self {
            Self::ReservedName { .. } => DiagnosticKind::ReservedName,
            Self::Shape { problem, .. } => problem.diagnostic_kind(),
        }
    }

    /// Record this error as a diagnostic.
    pub fn report(&self, diagnostics: &mut Diagnostics) {
        let builder = diagnostics.report(self.diagnostic_kind(), self.span());
        let detail = match self {
            Self::ReservedName { name, .. } => Some(name.clone()),
            Self::Shape { problem, .. } => problem.detail(),
        };
        match detail {
            Some(detail) => builder.message(detail).emit(),
            None => builder.emit(),
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;
