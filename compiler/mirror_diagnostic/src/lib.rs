//! Structured diagnostics for reflection.
//!
//! Every misuse of the reflection facility is a static program-validity
//! error: a concept-gated query applied to the wrong kind of metaobject,
//! reflecting a function, indexing past the end of a sequence. Those
//! surface as [`Diagnostic`]s carrying:
//! - an [`ErrorCode`] for searchability
//! - a message naming the violated concept or operation
//! - a primary label at the call site
//! - notes explaining what would have been legal
//!
//! Rendering diagnostics to a terminal is left to the host.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] can only be obtained by emitting an error through a
//! [`DiagnosticQueue`], so a function returning `Result<T, ErrorGuaranteed>`
//! provably reported why it failed.

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
