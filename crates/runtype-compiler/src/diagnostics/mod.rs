//! Diagnostics with source locations.
//!
//! Parse errors and compile errors are both funnelled into [`Diagnostics`]
//! so callers render them the same way: one `error at S..E: message` line
//! each through `Display`, or annotated snippets through [`Diagnostics::render`].

mod message;

#[cfg(test)]
mod diagnostics_tests;

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind and span.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    /// Annotated snippets against the unit's `source`, without colors.
    pub fn render(&self, source: &str) -> String {
        let mut out = String::new();
        self.format_snippets(source, &mut out)
            .expect("String write never fails");
        out
    }

    fn format_snippets(&self, source: &str, w: &mut impl Write) -> std::fmt::Result {
        let renderer = Renderer::plain();
        for (i, diag) in self.messages.iter().enumerate() {
            let snippet = Snippet::source(source).line_start(1).annotation(
                AnnotationKind::Primary
                    .span(snippet_range(diag.range, source.len()))
                    .label(&diag.message),
            );
            let report: Vec<Group> =
                vec![Level::ERROR.primary_title(&diag.message).element(snippet)];

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&report))?;
        }
        Ok(())
    }
}

/// Plain rendering, one line per diagnostic.
impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, diag) in self.messages.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{diag}")?;
        }
        Ok(())
    }
}

/// Empty spans (errors at end of input) still underline one character.
fn snippet_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();
    if start == end {
        return start..(start + 1).min(limit);
    }
    start..end
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
