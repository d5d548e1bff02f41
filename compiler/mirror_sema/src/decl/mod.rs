//! Declarations stored in the [`DeclTable`](crate::DeclTable).

use std::fmt;

use mirror_ir::{DeclId, Name, SourceLoc, TypeId};

/// Member access specifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Access {
    #[default]
    Public,
    Protected,
    Private,
}

impl Access {
    pub const fn as_str(self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Protected => "protected",
            Access::Private => "private",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class-key a record was declared with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RecordTag {
    Class,
    Struct,
    Union,
}

impl RecordTag {
    /// Access of members and bases declared without an explicit specifier.
    pub const fn default_access(self) -> Access {
        match self {
            RecordTag::Class => Access::Private,
            RecordTag::Struct | RecordTag::Union => Access::Public,
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            RecordTag::Class => "class",
            RecordTag::Struct => "struct",
            RecordTag::Union => "union",
        }
    }
}

/// One entry of a record's base-specifier list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BaseSpec {
    /// The base type as written (may be alias sugar).
    pub ty: TypeId,
    /// The record the base type resolves to.
    pub class: DeclId,
    pub access: Access,
    pub is_virtual: bool,
    pub loc: Option<SourceLoc>,
}

/// A template argument of an instantiated record.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TemplateArg {
    Type(TypeId),
    Value(i64),
}

/// Where an instantiated record came from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Instantiation {
    /// The class template declaration.
    pub template: DeclId,
    pub args: Vec<TemplateArg>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RecordDecl {
    pub tag: RecordTag,
    /// Every member in declaration order, functions included.
    pub members: Vec<DeclId>,
    pub bases: Vec<BaseSpec>,
    pub friends: Vec<DeclId>,
    pub instantiation: Option<Instantiation>,
}

impl RecordDecl {
    pub(crate) fn new(tag: RecordTag) -> Self {
        RecordDecl {
            tag,
            members: Vec::new(),
            bases: Vec::new(),
            friends: Vec::new(),
            instantiation: None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EnumDecl {
    /// `enum class` / `enum struct`.
    pub scoped: bool,
    pub underlying: TypeId,
    pub enumerators: Vec<DeclId>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DeclKind {
    GlobalScope { members: Vec<DeclId> },
    Namespace { members: Vec<DeclId> },
    NamespaceAlias { target: DeclId },
    Record(RecordDecl),
    Enum(EnumDecl),
    Enumerator { value: i64 },
    /// Namespace-scope or local variable. `constant` for `constexpr`.
    Variable { ty: TypeId, constant: bool },
    DataMember { ty: TypeId, is_static: bool },
    TypeAlias { target: TypeId },
    Function { is_static: bool },
    /// An uninstantiated class template.
    ClassTemplate { tag: RecordTag },
}

impl DeclKind {
    /// Short description for diagnostics ("namespace", "data member").
    pub fn describe(&self) -> &'static str {
        match self {
            DeclKind::GlobalScope { .. } => "global scope",
            DeclKind::Namespace { .. } => "namespace",
            DeclKind::NamespaceAlias { .. } => "namespace alias",
            DeclKind::Record(r) => r.tag.keyword(),
            DeclKind::Enum(_) => "enum",
            DeclKind::Enumerator { .. } => "enumerator",
            DeclKind::Variable { .. } => "variable",
            DeclKind::DataMember { .. } => "data member",
            DeclKind::TypeAlias { .. } => "type alias",
            DeclKind::Function { .. } => "function",
            DeclKind::ClassTemplate { .. } => "class template",
        }
    }

    /// Whether names can be declared inside this declaration.
    pub fn is_scope(&self) -> bool {
        matches!(
            self,
            DeclKind::GlobalScope { .. }
                | DeclKind::Namespace { .. }
                | DeclKind::Record(_)
                | DeclKind::Enum(_)
        )
    }
}

/// A declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Decl {
    /// `Name::EMPTY` for anonymous declarations.
    pub name: Name,
    pub kind: DeclKind,
    /// Enclosing declaration; the global scope is its own parent.
    pub parent: DeclId,
    /// `None` for synthesized declarations.
    pub loc: Option<SourceLoc>,
    /// Access within the enclosing record; `Public` outside records.
    pub access: Access,
}

impl Decl {
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    pub fn as_record(&self) -> Option<&RecordDecl> {
        match &self.kind {
            DeclKind::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDecl> {
        match &self.kind {
            DeclKind::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// Scope members in declaration order (empty for non-scopes).
    pub fn members(&self) -> &[DeclId] {
        match &self.kind {
            DeclKind::GlobalScope { members } | DeclKind::Namespace { members } => members,
            DeclKind::Record(r) => &r.members,
            DeclKind::Enum(e) => &e.enumerators,
            _ => &[],
        }
    }
}
