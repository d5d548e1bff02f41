//! Reflection errors.
//!
//! Every misuse of the metafunction surface is a program-validity error:
//! the host reports it at the call site and the program is rejected. Nothing
//! is retried or recovered.

use mirror_diagnostic::{Diagnostic, ErrorCode};
use mirror_ir::{DeclId, SourceLoc, TypeId};

use crate::{Concept, ConceptSet, MetaKind};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ReflectError {
    /// A concept-gated metafunction got a metaobject outside its concept.
    #[error("`{operation}` requires {expected}, found {found}")]
    ConceptViolation {
        operation: &'static str,
        expected: ConceptSet,
        found: MetaKind,
    },

    /// Functions and uninstantiated templates have no metaobject.
    #[error("cannot reflect {what} `{name}`")]
    Unreflectable {
        what: UnreflectableKind,
        name: String,
    },

    #[error("`{path}` does not name a declaration or builtin type")]
    UnknownName { path: String },

    #[error("index {index} out of range for object sequence of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("`{entity}` has no source location")]
    NoSourceLocation { entity: String },

    /// Full member listing of a record the reflecting context cannot see into.
    #[error("`{operation}` requires full access to `{record}`")]
    InaccessibleMembers {
        operation: &'static str,
        record: String,
    },

    #[error("cannot unpack {found} metaobjects into a shape of {expected}")]
    ArityMismatch { expected: usize, found: usize },

    /// A handle that was not produced by the reflected declaration table.
    #[error("{what} does not belong to this declaration table")]
    ForeignHandle { what: ForeignHandle },
}

/// Declarations that exist in the table but have no metaobject.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UnreflectableKind {
    Function,
    ClassTemplate,
}

impl std::fmt::Display for UnreflectableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            UnreflectableKind::Function => "function",
            UnreflectableKind::ClassTemplate => "class template",
        })
    }
}

/// The handle a [`ReflectError::ForeignHandle`] is about.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ForeignHandle {
    Decl(DeclId),
    Type(TypeId),
}

impl std::fmt::Display for ForeignHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForeignHandle::Decl(id) => write!(f, "declaration {}", id.raw()),
            ForeignHandle::Type(id) => write!(f, "type {}", id.raw()),
        }
    }
}

impl ReflectError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReflectError::ConceptViolation { .. } => ErrorCode::E7001,
            ReflectError::Unreflectable { .. } => ErrorCode::E7002,
            ReflectError::UnknownName { .. } => ErrorCode::E7003,
            ReflectError::IndexOutOfRange { .. } => ErrorCode::E7004,
            ReflectError::NoSourceLocation { .. } => ErrorCode::E7005,
            ReflectError::InaccessibleMembers { .. } => ErrorCode::E7006,
            ReflectError::ArityMismatch { .. } => ErrorCode::E7007,
            ReflectError::ForeignHandle { .. } => ErrorCode::E8005,
        }
    }

    /// Convert into a diagnostic with its primary label at `call_site`.
    pub fn to_diagnostic(&self, call_site: Option<SourceLoc>) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        if let Some(loc) = call_site {
            diag = diag.with_label(loc, self.label());
        }

        match self {
            ReflectError::ConceptViolation { found, expected, .. } => {
                let satisfied: Vec<_> = found.concepts().concepts().map(Concept::as_str).collect();
                diag.with_note(format!(
                    "a {found} metaobject satisfies {}",
                    satisfied.join(", ")
                ))
                .with_suggestion(format!("check `satisfies(obj, {expected})` before the call"))
            }
            ReflectError::Unreflectable { what, .. } => match what {
                UnreflectableKind::Function => diag.with_note("functions are not reflectable"),
                UnreflectableKind::ClassTemplate => diag
                    .with_note("only instantiated templates can be reflected")
                    .with_suggestion("reflect a specialization such as `Container<int>`"),
            },
            ReflectError::IndexOutOfRange { size, .. } => {
                if *size == 0 {
                    diag.with_note("the sequence is empty")
                } else {
                    diag.with_note(format!("valid indices are 0..{size}"))
                }
            }
            ReflectError::NoSourceLocation { .. } => diag
                .with_note("builtin and synthesized entities are not declared in source")
                .with_suggestion("use the sentinel location policy to get `<builtin>:0:0`"),
            ReflectError::InaccessibleMembers { .. } => diag
                .with_note("private and protected members are only listed from inside the record or its friends")
                .with_suggestion("use the public or accessible listing instead"),
            ReflectError::ArityMismatch { .. }
            | ReflectError::UnknownName { .. }
            | ReflectError::ForeignHandle { .. } => diag,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReflectError::ConceptViolation { .. } => "metafunction called here",
            ReflectError::Unreflectable { .. } | ReflectError::UnknownName { .. } => {
                "reflected here"
            }
            ReflectError::IndexOutOfRange { .. } => "element accessed here",
            ReflectError::NoSourceLocation { .. } => "location requested here",
            ReflectError::InaccessibleMembers { .. } => "members listed here",
            ReflectError::ArityMismatch { .. } => "unpacked here",
            ReflectError::ForeignHandle { .. } => "handle used here",
        }
    }
}
