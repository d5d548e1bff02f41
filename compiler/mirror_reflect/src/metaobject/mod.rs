//! Metaobjects: reflected entities as plain values.

use std::fmt;

use mirror_ir::{DeclId, TypeId};

/// What a metaobject reflects. Every metaobject has exactly one kind.
///
/// `Record` is a `struct`-keyed class, `Class` a `class`-keyed one.
/// `DataMember` and `MemberType` are the two record-member kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MetaKind {
    Type,
    Record,
    Class,
    Union,
    Base,
    Namespace,
    GlobalScope,
    Enum,
    Enumerator,
    Variable,
    Constant,
    Alias,
    DataMember,
    MemberType,
}

impl MetaKind {
    pub const ALL: [MetaKind; 14] = [
        MetaKind::Type,
        MetaKind::Record,
        MetaKind::Class,
        MetaKind::Union,
        MetaKind::Base,
        MetaKind::Namespace,
        MetaKind::GlobalScope,
        MetaKind::Enum,
        MetaKind::Enumerator,
        MetaKind::Variable,
        MetaKind::Constant,
        MetaKind::Alias,
        MetaKind::DataMember,
        MetaKind::MemberType,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MetaKind::Type => "Type",
            MetaKind::Record => "Record",
            MetaKind::Class => "Class",
            MetaKind::Union => "Union",
            MetaKind::Base => "Base",
            MetaKind::Namespace => "Namespace",
            MetaKind::GlobalScope => "GlobalScope",
            MetaKind::Enum => "Enum",
            MetaKind::Enumerator => "Enumerator",
            MetaKind::Variable => "Variable",
            MetaKind::Constant => "Constant",
            MetaKind::Alias => "Alias",
            MetaKind::DataMember => "DataMember",
            MetaKind::MemberType => "MemberType",
        }
    }
}

impl fmt::Display for MetaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable key of the reflected entity.
///
/// Types are keyed by their canonical form, so `const foo*` (with
/// `using foo = int`) and `const int*` are the same entity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Identity {
    Decl(DeclId),
    Type(TypeId),
    GlobalScope,
    /// The `index`th base-specifier of `derived`.
    Base { derived: DeclId, index: u32 },
}

/// A reflected entity.
///
/// Copyable and immutable. Two metaobjects reflect the same entity iff
/// their identities are equal, see
/// [`Reflector::reflects_same`](crate::Reflector::reflects_same); the
/// derived `Eq` additionally compares where and how the entity was reached.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Metaobject {
    pub(crate) kind: MetaKind,
    pub(crate) identity: Identity,
    /// Lexical context the reflection happened in.
    pub(crate) context: DeclId,
    /// The type as written at the reflection site, sugar included.
    pub(crate) spelling: Option<TypeId>,
}

impl Metaobject {
    pub(crate) const fn new(kind: MetaKind, identity: Identity, context: DeclId) -> Self {
        Metaobject {
            kind,
            identity,
            context,
            spelling: None,
        }
    }

    pub(crate) fn with_spelling(mut self, ty: TypeId) -> Self {
        self.spelling = Some(ty);
        self
    }

    #[inline]
    pub const fn kind(&self) -> MetaKind {
        self.kind
    }

    #[inline]
    pub const fn identity(&self) -> Identity {
        self.identity
    }

    /// The lexical context this metaobject was reflected from.
    #[inline]
    pub const fn context(&self) -> DeclId {
        self.context
    }

    /// The reflected declaration, if the entity is one.
    pub const fn decl(&self) -> Option<DeclId> {
        match self.identity {
            Identity::Decl(d) => Some(d),
            Identity::GlobalScope => Some(DeclId::GLOBAL),
            Identity::Type(_) | Identity::Base { .. } => None,
        }
    }
}

/// A source construct that can be reflected.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Construct<'a> {
    Decl(DeclId),
    Type(TypeId),
    /// A qualified name (`ns::Outer`) or a builtin type spelling (`unsigned`).
    Path(&'a str),
    GlobalScope,
}

impl From<DeclId> for Construct<'_> {
    fn from(id: DeclId) -> Self {
        Construct::Decl(id)
    }
}

impl From<TypeId> for Construct<'_> {
    fn from(id: TypeId) -> Self {
        Construct::Type(id)
    }
}

impl<'a> From<&'a str> for Construct<'a> {
    fn from(path: &'a str) -> Self {
        Construct::Path(path)
    }
}
