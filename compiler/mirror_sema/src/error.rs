//! Declaration-table builder errors.

use mirror_diagnostic::{Diagnostic, ErrorCode};
use mirror_ir::{DeclId, SourceLoc};

/// Misuse of the [`DeclTable`](crate::DeclTable) builder.
///
/// Names are resolved to strings when the error is built so the error
/// outlives the table borrow.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SemaError {
    #[error("`{name}` is already declared in `{scope}`")]
    DuplicateDeclaration {
        name: String,
        scope: String,
        previous: Option<SourceLoc>,
    },

    #[error("`{name}` is a {found}, expected a {expected}")]
    WrongDeclKind {
        name: String,
        found: &'static str,
        expected: &'static str,
    },

    #[error("base type `{ty}` is not a class")]
    BaseNotAClass { ty: String },

    #[error("`{record}` cannot derive from itself")]
    SelfDerivation { record: String },

    #[error("`{spelling}` is not a builtin type")]
    UnknownBuiltin { spelling: String },

    #[error("declaration {0:?} does not belong to this table")]
    UnknownDecl(DeclId),
}

impl SemaError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SemaError::DuplicateDeclaration { .. } => ErrorCode::E8001,
            SemaError::WrongDeclKind { .. } => ErrorCode::E8002,
            SemaError::BaseNotAClass { .. } => ErrorCode::E8003,
            SemaError::UnknownBuiltin { .. } => ErrorCode::E8004,
            SemaError::UnknownDecl(_) => ErrorCode::E8005,
            SemaError::SelfDerivation { .. } => ErrorCode::E8006,
        }
    }

    /// Convert into a diagnostic reported at `loc`.
    pub fn to_diagnostic(&self, loc: Option<SourceLoc>) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        if let Some(loc) = loc {
            diag = diag.with_label(loc, "declared here");
        }
        match self {
            SemaError::DuplicateDeclaration {
                previous: Some(prev),
                ..
            } => diag.with_secondary_label(*prev, "previous declaration"),
            SemaError::BaseNotAClass { .. } => {
                diag.with_note("only class, struct, and union types can be bases")
            }
            SemaError::UnknownBuiltin { .. } => diag.with_suggestion(
                "use a canonical spelling such as `unsigned int` or `long double`",
            ),
            SemaError::UnknownDecl(_) => {
                diag.with_note("ids are only valid in the table that created them")
            }
            _ => diag,
        }
    }
}
