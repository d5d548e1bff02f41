//! Host semantic model for Mirror.
//!
//! Reflection needs a program to reflect over. This crate models the parts
//! of one a reflection facility can observe:
//!
//! - [`DeclTable`]: declarations (namespaces, records, enums, variables,
//!   aliases, templates) in declaration order, with qualified-name lookup
//! - [`TypePool`]: structurally interned types, alias sugar preserved,
//!   canonical forms precomputed
//! - [`BuiltinType`]: fundamental types and their spelling rules
//! - ordinary access rules (`DeclTable::can_access` and friends)
//! - [`spelling`]: source-like rendering of declarations and types
//!
//! # Lifecycle
//!
//! The host builds the table through the `add_*` methods, which validate
//! as they go and report misuse as [`SemaError`]. Once built, the table is
//! only read.

mod access;
mod builtin;
mod decl;
mod error;
pub mod spelling;
mod table;
mod types;

pub use builtin::BuiltinType;
pub use decl::{
    Access, BaseSpec, Decl, DeclKind, EnumDecl, Instantiation, RecordDecl, RecordTag, TemplateArg,
};
pub use error::SemaError;
pub use table::{DeclTable, TableSummary};
pub use types::{Cv, TypeKind, TypePool};
