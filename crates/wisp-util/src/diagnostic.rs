//! Diagnostic reporting infrastructure shared by every pipeline stage.
//!
//! A severity [`Level`], a [`Diagnostic`] carrying a message/span/notes, and
//! a [`Handler`] that accumulates diagnostics emitted while a stage runs.
//! The core stages never *recover* from a failure and keep going - nothing
//! is recovered internally - so the `Handler` here is used only by the
//! driver's debug-emit commands, which may want to print warnings without
//! aborting; the four core stages themselves fail fast by returning
//! `Result::Err` from the relevant exception type.

use std::fmt;

use crate::Span;

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        };
        write!(f, "{s}")
    }
}

/// A single diagnostic message anchored to a source span.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self { level, message: message.into(), span, notes: Vec::new() }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({}..{})", self.level, self.message, self.span.start, self.span.end)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

/// Accumulates diagnostics emitted during a run that wants to keep going
/// past the first problem (the driver's debug-emit paths, not the core
/// stages themselves - see the module docs above).
#[derive(Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::error(message, span));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == Level::Error)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_tracks_errors() {
        let mut handler = Handler::new();
        assert!(!handler.has_errors());
        handler.error("bad token", Span::point(3));
        assert!(handler.has_errors());
        assert_eq!(handler.diagnostics().len(), 1);
    }

    #[test]
    fn warnings_do_not_count_as_errors() {
        let mut handler = Handler::new();
        handler.emit(Diagnostic::warning("unused variable", Span::DUMMY));
        assert!(!handler.has_errors());
    }
}
