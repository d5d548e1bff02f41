//! Source-like spellings of declarations and types.
//!
//! Spellings keep everything the user wrote: alias names, cv-qualifiers,
//! pointer/reference/array declarators and template arguments. They are
//! deterministic for a given table.

use std::fmt::Write as _;

use mirror_ir::{DeclId, TypeId};

use crate::{DeclKind, DeclTable, TemplateArg, TypeKind};

/// Spelling of an anonymous declaration.
pub const ANONYMOUS: &str = "(anonymous)";

/// Name of `decl` followed by its template arguments, if any.
///
/// With `qualified`, every enclosing named scope is prefixed
/// (`ns::Outer::Inner`). Unscoped enumerators are qualified by the enum's
/// scope, not the enum, matching how they are named in source.
pub fn decl_spelling(table: &DeclTable, decl: DeclId, qualified: bool) -> String {
    let mut out = String::new();
    if qualified {
        for scope in qualifier_chain(table, decl) {
            push_own_name(table, scope, &mut out);
            out.push_str("::");
        }
    }
    push_own_name(table, decl, &mut out);
    out
}

/// Enclosing scopes of `decl` that appear in its qualified name, outermost
/// first.
fn qualifier_chain(table: &DeclTable, decl: DeclId) -> Vec<DeclId> {
    let mut chain: Vec<DeclId> = table
        .lexical_ancestors(decl)
        .skip(1)
        .filter(|&d| !d.is_global())
        .collect();
    if matches!(table.decl(decl).kind, DeclKind::Enumerator { .. }) {
        let is_unscoped = chain
            .first()
            .and_then(|&e| table.decl(e).as_enum())
            .is_some_and(|e| !e.scoped);
        if is_unscoped {
            chain.remove(0);
        }
    }
    chain.reverse();
    chain
}

fn push_own_name(table: &DeclTable, decl: DeclId, out: &mut String) {
    let d = table.decl(decl);
    if d.is_anonymous() {
        out.push_str(ANONYMOUS);
    } else {
        out.push_str(table.interner().lookup(d.name));
    }
    if let Some(inst) = d.as_record().and_then(|r| r.instantiation.as_ref()) {
        out.push('<');
        for (i, arg) in inst.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            match *arg {
                TemplateArg::Type(ty) => out.push_str(&type_spelling(table, ty, true)),
                TemplateArg::Value(v) => {
                    let _ = write!(out, "{v}");
                }
            }
        }
        out.push('>');
    }
}

/// Spelling of `ty` as written, alias sugar kept.
///
/// Named types are qualified when `qualified` is set; template arguments
/// are always qualified.
pub fn type_spelling(table: &DeclTable, ty: TypeId, qualified: bool) -> String {
    mirror_stack::ensure_sufficient_stack(|| match table.types().kind(ty) {
        TypeKind::Builtin(b) => b.spelling().to_owned(),
        TypeKind::Decl(d) | TypeKind::Alias(d) => decl_spelling(table, d, qualified),
        TypeKind::Qualified { inner, cv } => {
            let inner_spelling = type_spelling(table, inner, qualified);
            if matches!(table.types().kind(inner), TypeKind::Pointer(_)) {
                format!("{inner_spelling} {}", cv.spelling())
            } else {
                format!("{} {inner_spelling}", cv.spelling())
            }
        }
        TypeKind::Pointer(pointee) => match table.types().kind(pointee) {
            TypeKind::Array { elem, len } => format!(
                "{} (*){}",
                type_spelling(table, elem, qualified),
                array_bound(len)
            ),
            _ => format!("{}*", type_spelling(table, pointee, qualified)),
        },
        TypeKind::LValueRef(referent) => format!("{}&", type_spelling(table, referent, qualified)),
        TypeKind::Array { elem, len } => {
            format!("{}{}", type_spelling(table, elem, qualified), array_bound(len))
        }
    })
}

fn array_bound(len: Option<u64>) -> String {
    match len {
        Some(n) => format!("[{n}]"),
        None => "[]".to_owned(),
    }
}
