//! Structurally interned type pool.
//!
//! Builtins occupy the fixed indices below [`TypeId::BUILTIN_COUNT`] and are
//! never stored. Every other type is stored once: building `const int*`
//! twice yields the same [`TypeId`], so type identity is index equality.
//!
//! Alias sugar is kept. `TypeKind::Alias` wraps the typedef-name a type was
//! spelled with. Each stored type also records its canonical form (all alias
//! sugar stripped, qualifiers merged), computed once at intern time so that
//! read-only consumers can compare types without interning anything.

use bitflags::bitflags;
use rustc_hash::FxHashMap;

use mirror_ir::{DeclId, TypeId};

use crate::BuiltinType;

bitflags! {
    /// cv-qualifiers.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Cv: u8 {
        const CONST = 1 << 0;
        const VOLATILE = 1 << 1;
    }
}

impl Cv {
    /// Source spelling, `const` before `volatile`.
    pub fn spelling(self) -> &'static str {
        match (self.contains(Cv::CONST), self.contains(Cv::VOLATILE)) {
            (true, true) => "const volatile",
            (true, false) => "const",
            (false, true) => "volatile",
            (false, false) => "",
        }
    }
}

/// Shape of an interned type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Builtin(BuiltinType),
    /// A record or enum, named by its declaration.
    Decl(DeclId),
    /// Typedef-name sugar: the type as spelled through an alias declaration.
    Alias(DeclId),
    Qualified { inner: TypeId, cv: Cv },
    Pointer(TypeId),
    LValueRef(TypeId),
    Array { elem: TypeId, len: Option<u64> },
}

#[derive(Copy, Clone, Debug)]
struct Entry {
    kind: TypeKind,
    canonical: TypeId,
}

/// Type storage. Index `i` of `entries` is `TypeId(FIRST_DYNAMIC + i)`.
#[derive(Clone, Debug, Default)]
pub struct TypePool {
    entries: Vec<Entry>,
    dedup: FxHashMap<TypeKind, TypeId>,
}

impl TypePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `kind`, returning the existing id for a structurally equal type.
    ///
    /// Builtins map to their fixed ids. Qualifying with no qualifiers returns
    /// the inner type, and nested qualifiers merge (`const (volatile T)` is
    /// `const volatile T`). `alias_target` resolves an alias declaration to
    /// the type it names, which must already be interned.
    pub fn intern(&mut self, kind: TypeKind, alias_target: &dyn Fn(DeclId) -> TypeId) -> TypeId {
        let kind = match self.normalize(kind) {
            Ok(kind) => kind,
            Err(id) => return id,
        };
        if let Some(&id) = self.dedup.get(&kind) {
            return id;
        }

        let canonical = match kind {
            TypeKind::Builtin(b) => Some(b.type_id()),
            TypeKind::Decl(_) => None,
            TypeKind::Alias(decl) => Some(self.canonical(alias_target(decl))),
            TypeKind::Qualified { inner, cv } => {
                self.canonical_of(inner, |c| TypeKind::Qualified { inner: c, cv }, alias_target)
            }
            TypeKind::Pointer(inner) => {
                self.canonical_of(inner, TypeKind::Pointer, alias_target)
            }
            TypeKind::LValueRef(inner) => {
                self.canonical_of(inner, TypeKind::LValueRef, alias_target)
            }
            TypeKind::Array { elem, len } => {
                self.canonical_of(elem, |c| TypeKind::Array { elem: c, len }, alias_target)
            }
        };

        #[expect(
            clippy::cast_possible_truncation,
            reason = "a pool with more than u32::MAX types is not representable anyway"
        )]
        let id = TypeId::from_raw(TypeId::FIRST_DYNAMIC + self.entries.len() as u32);
        self.entries.push(Entry {
            kind,
            canonical: canonical.unwrap_or(id),
        });
        self.dedup.insert(kind, id);
        id
    }

    /// `Err(id)` when `kind` is already fully described by an existing id.
    fn normalize(&self, kind: TypeKind) -> Result<TypeKind, TypeId> {
        match kind {
            TypeKind::Builtin(b) => Err(b.type_id()),
            TypeKind::Qualified { inner, cv } if cv.is_empty() => Err(inner),
            TypeKind::Qualified { inner, cv } => match self.kind(inner) {
                TypeKind::Qualified {
                    inner: innermost,
                    cv: inner_cv,
                } => Ok(TypeKind::Qualified {
                    inner: innermost,
                    cv: cv | inner_cv,
                }),
                _ => Ok(kind),
            },
            other => Ok(other),
        }
    }

    /// Canonical id for a compound over `inner`, or `None` when the
    /// compound is already canonical.
    fn canonical_of(
        &mut self,
        inner: TypeId,
        rebuild: impl FnOnce(TypeId) -> TypeKind,
        alias_target: &dyn Fn(DeclId) -> TypeId,
    ) -> Option<TypeId> {
        let canonical_inner = self.canonical(inner);
        (canonical_inner != inner).then(|| self.intern(rebuild(canonical_inner), alias_target))
    }

    /// Shape of `id`.
    ///
    /// Ids from another pool resolve to `void`; they cannot be produced
    /// through the public API of a single table.
    pub fn kind(&self, id: TypeId) -> TypeKind {
        if let Some(builtin) = BuiltinType::from_type_id(id) {
            return TypeKind::Builtin(builtin);
        }
        self.entry(id)
            .map_or(TypeKind::Builtin(BuiltinType::Void), |e| e.kind)
    }

    /// `id` with every alias stripped, at any depth.
    pub fn canonical(&self, id: TypeId) -> TypeId {
        self.entry(id).map_or(id, |e| e.canonical)
    }

    fn entry(&self, id: TypeId) -> Option<&Entry> {
        id.raw()
            .checked_sub(TypeId::FIRST_DYNAMIC)
            .and_then(|i| self.entries.get(i as usize))
    }

    /// Whether `id` was produced by this pool.
    pub fn contains(&self, id: TypeId) -> bool {
        id.is_builtin() || self.entry(id).is_some()
    }

    /// Number of stored (non-builtin) types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Strip the outermost cv-qualification.
    pub fn unqualified(&self, id: TypeId) -> TypeId {
        match self.kind(id) {
            TypeKind::Qualified { inner, .. } => inner,
            _ => id,
        }
    }

    /// The canonical type with qualifiers, pointers, references and arrays
    /// peeled off: a builtin or a record/enum type.
    pub fn core(&self, id: TypeId) -> TypeId {
        let mut current = self.canonical(id);
        loop {
            match self.kind(current) {
                TypeKind::Qualified { inner, .. }
                | TypeKind::Pointer(inner)
                | TypeKind::LValueRef(inner)
                | TypeKind::Array { elem: inner, .. } => current = inner,
                TypeKind::Builtin(_) | TypeKind::Decl(_) | TypeKind::Alias(_) => {
                    return current
                }
            }
        }
    }

    /// The declaration an alias type was spelled through.
    pub fn alias_decl(&self, id: TypeId) -> Option<DeclId> {
        match self.kind(id) {
            TypeKind::Alias(decl) => Some(decl),
            _ => None,
        }
    }

    /// The record or enum declaration a type names directly.
    pub fn named_decl(&self, id: TypeId) -> Option<DeclId> {
        match self.kind(id) {
            TypeKind::Decl(decl) => Some(decl),
            _ => None,
        }
    }
}
