//! Proof that an error was reported.

use std::fmt;

/// Zero-sized witness that at least one error diagnostic was emitted.
///
/// Constructible only inside this crate (through [`crate::DiagnosticQueue`])
/// or from a nonzero error count, so holding one means the user has been
/// told why compilation is failing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Witness from an externally tracked error count; `None` when zero.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}
