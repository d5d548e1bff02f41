//! Diagnostic queue: collects, deduplicates, limits, and sorts.
//!
//! Reflection queries are often evaluated many times for the same call site
//! (a serializer instantiated per field, say), so the same violation tends
//! to be reported repeatedly. The queue keeps the first report and drops
//! exact repeats.

use rustc_hash::FxHashSet;

use mirror_ir::SourceLoc;

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

/// Queue behavior knobs.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop diagnostics identical in code, location, and message.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Keep everything (for tests).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Collected diagnostics plus bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<(ErrorCode, Option<SourceLoc>, String)>,
    error_count: usize,
    /// Errors dropped after the limit was reached.
    overflow: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            seen: FxHashSet::default(),
            error_count: 0,
            overflow: 0,
            config,
        }
    }

    /// Queue a diagnostic. Returns `false` if it was filtered out.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if self.config.deduplicate {
            let key = (diag.code, diag.primary_loc(), diag.message.clone());
            if !self.seen.insert(key) {
                return false;
            }
        }

        if diag.is_error() {
            if self.config.error_limit > 0 && self.error_count >= self.config.error_limit {
                self.overflow += 1;
                return false;
            }
            self.error_count += 1;
        }

        self.diagnostics.push(diag);
        true
    }

    /// Queue an error and return proof that an error has been reported.
    ///
    /// The proof is returned even when the diagnostic itself is filtered:
    /// a filtered error is a duplicate of, or follows, one already queued.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        debug_assert!(diag.is_error(), "emit_error called with a non-error");
        self.push(diag);
        ErrorGuaranteed::new()
    }

    /// Number of errors kept (excludes filtered ones).
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Witness for the errors collected so far, if any.
    pub fn guarantee(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Drain the queue, ordered by primary location (location-less last,
    /// ties in insertion order). Appends an E9002 summary if errors were
    /// dropped by the limit.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by_key(|d| (d.primary_loc().is_none(), d.primary_loc()));

        if self.overflow > 0 {
            out.push(
                Diagnostic::error(ErrorCode::E9002)
                    .with_message(format!(
                        "aborting after {} errors ({} more not shown)",
                        self.error_count, self.overflow
                    )),
            );
        }

        self.seen.clear();
        self.error_count = 0;
        self.overflow = 0;
        out
    }
}
