use rowan::TextRange;

/// Diagnostic kinds, grouped by the stage that reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Parser: user omitted something required
    ExpectedType,
    ExpectedIdentifier,
    ExpectedToken,
    ExpectedModuleSource,

    // Parser: syntax outside the supported subset
    UnexpectedToken,
    UnsupportedSyntax,

    // Declaration policy
    ReservedName,

    // Annotation shape
    UnsupportedAnnotation,
    ArrayArity,
    InvalidRefinement,
    InvalidExact,
    RefinementWithoutBase,
}

impl DiagnosticKind {
    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::ExpectedType => "expected a type",
            Self::ExpectedIdentifier => "expected an identifier",
            Self::ExpectedToken => "expected token",
            Self::ExpectedModuleSource => "expected a module path string",

            Self::UnexpectedToken => "unexpected token",
            Self::UnsupportedSyntax => "unsupported syntax",

            Self::ReservedName => "reserved type name",

            Self::UnsupportedAnnotation => "unsupported type annotation",
            Self::ArrayArity => "`Array` expects exactly one type argument",
            Self::InvalidRefinement => {
                "invalid refinement definition, expected `$Refinement<typeof predicate>`"
            }
            Self::InvalidExact => "`$Exact` expects a single object type argument",
            Self::RefinementWithoutBase => "refinements need a base type to refine",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::ExpectedToken => "expected `{}`".to_string(),
            Self::ReservedName => "`{}` is a reserved type name".to_string(),
            Self::ArrayArity => {
                "`Array` expects exactly one type argument, found {}".to_string()
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )
    }
}
