//! Core diagnostic types.
//!
//! Defines [`Diagnostic`], [`Label`] and [`Severity`]: what reflection and
//! declaration-table errors turn into before the host reports them.

use std::fmt;
use std::fmt::Write as _;

use mirror_ir::{SourceLoc, StringLookup};

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
            Severity::Help => "help",
        })
    }
}

/// A source location with an explanatory message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub loc: SourceLoc,
    pub message: String,
    /// Whether this is the location the error is reported at.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(loc: SourceLoc, message: impl Into<String>) -> Self {
        Label {
            loc,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(loc: SourceLoc, message: impl Into<String>) -> Self {
        Label {
            loc,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic: code, message, locations, and follow-up notes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// Human-readable fixes ("reflect the enclosing class instead").
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add the primary label.
    pub fn with_label(mut self, loc: SourceLoc, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(loc, message));
        self
    }

    /// Add a secondary label, e.g. pointing at the reflected declaration.
    pub fn with_secondary_label(mut self, loc: SourceLoc, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(loc, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Location of the first primary label.
    pub fn primary_loc(&self) -> Option<SourceLoc> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.loc)
    }

    /// Render with resolved file names.
    ///
    /// ```text
    /// error[E7001]: `get_aliased` requires an Alias, found Class
    ///   --> src/shapes.h:4:7: reflected here
    ///   = note: ...
    ///   = help: ...
    /// ```
    pub fn render<I: StringLookup + ?Sized>(&self, interner: &I) -> String {
        let mut out = format!("{}[{}]: {}", self.severity, self.code, self.message);
        for label in &self.labels {
            let arrow = if label.is_primary { "-->" } else { ":::" };
            let _ = write!(
                out,
                "\n  {arrow} {}",
                label.loc.display(interner)
            );
            if !label.message.is_empty() {
                let _ = write!(out, ": {}", label.message);
            }
        }
        for note in &self.notes {
            let _ = write!(out, "\n  = note: {note}");
        }
        for suggestion in &self.suggestions {
            let _ = write!(out, "\n  = help: {suggestion}");
        }
        out
    }
}

/// Location-free rendering, for logs and test failure messages.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }
        Ok(())
    }
}
