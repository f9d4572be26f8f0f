//! Diagnostics for the generator: option parsing, preprocessing, resolution.
//!
//! Nothing here is fatal. Every anomaly the generator absorbs (an ignored
//! option, an overwritten symbol, a reference that degrades to a bare
//! identifier) is recorded so callers can show it, or reject the run under
//! the strict policy.

mod message;
mod printer;

#[cfg(test)]
mod tests;

use std::ops::Range;

pub use message::{DiagnosticKind, DiagnosticMessage, Severity};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
    strict: bool,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict policy: every diagnostic reported from now on is an error.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Create a diagnostic with the given kind.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_> {
        let severity = if self.strict {
            Severity::Error
        } else {
            kind.default_severity()
        };
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::new(kind, severity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    /// Take over `other`'s messages. Under the strict policy they become errors.
    pub fn extend(&mut self, other: Diagnostics) {
        let strict = self.strict;
        self.messages.extend(other.messages.into_iter().map(|mut m| {
            if strict {
                m.severity = Severity::Error;
            }
            m
        }));
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }

    /// Plain rendering, one line per diagnostic.
    pub fn render(&self) -> String {
        self.printer().render()
    }

    /// Rendering with source snippets for diagnostics that carry a range.
    pub fn render_with_source(&self, source: &str, colored: bool) -> String {
        self.printer().source(source).colored(colored).render()
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    /// Point the diagnostic at a byte range of the source it came from.
    pub fn range(mut self, range: Range<usize>) -> Self {
        self.message.range = Some(range);
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
