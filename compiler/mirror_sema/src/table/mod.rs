//! The declaration table.
//!
//! Hosts build a [`DeclTable`] by adding declarations in source order, then
//! share it immutably. Declaration order is preserved everywhere it is
//! observable: scope member lists, enumerators, base-specifier lists.
//!
//! # Lookup
//!
//! Every named, non-function declaration is indexed by `(scope, name)`.
//! Enumerators of unscoped enums are also indexed in the enclosing scope,
//! the same way the language injects them. Functions are never indexed:
//! overloads share a name.

use rustc_hash::FxHashMap;

use mirror_ir::{DeclId, Name, SharedInterner, SourceLoc, TypeId};

use crate::{
    Access, BaseSpec, BuiltinType, Cv, Decl, DeclKind, EnumDecl, Instantiation, RecordDecl,
    RecordTag, SemaError, TemplateArg, TypeKind, TypePool,
};

/// Declarations and types of one program.
#[derive(Clone, Debug)]
pub struct DeclTable {
    interner: SharedInterner,
    decls: Vec<Decl>,
    types: TypePool,
    scope_index: FxHashMap<(DeclId, Name), DeclId>,
    instantiations: FxHashMap<(DeclId, Vec<TemplateArg>), DeclId>,
}

impl DeclTable {
    /// An empty table holding only the global scope.
    pub fn new(interner: SharedInterner) -> Self {
        let global = Decl {
            name: Name::EMPTY,
            kind: DeclKind::GlobalScope {
                members: Vec::new(),
            },
            parent: DeclId::GLOBAL,
            loc: None,
            access: Access::Public,
        };
        DeclTable {
            interner,
            decls: vec![global],
            types: TypePool::new(),
            scope_index: FxHashMap::default(),
            instantiations: FxHashMap::default(),
        }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn types(&self) -> &TypePool {
        &self.types
    }

    /// Number of declarations, the global scope included.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Always false: the global scope exists from construction.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn get(&self, id: DeclId) -> Option<&Decl> {
        self.decls.get(id.index())
    }

    /// The declaration `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not created by this table. Use [`DeclTable::get`]
    /// for ids from untrusted sources.
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    pub fn try_decl(&self, id: DeclId) -> Result<&Decl, SemaError> {
        self.get(id).ok_or(SemaError::UnknownDecl(id))
    }

    pub fn contains(&self, id: DeclId) -> bool {
        id.index() < self.decls.len()
    }

    /// All declarations in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &Decl)> {
        self.decls.iter().enumerate().map(|(i, d)| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "ids are created from u32 indices"
            )]
            let id = DeclId::from_raw(i as u32);
            (id, d)
        })
    }

    /// The unqualified name of `id` (empty for anonymous declarations).
    pub fn name_str(&self, id: DeclId) -> &str {
        self.get(id)
            .map_or("", |d| self.interner.lookup(d.name))
    }

    /// Look `name` up directly in `scope` (no parent scopes).
    pub fn lookup_in(&self, scope: DeclId, name: &str) -> Option<DeclId> {
        let name = self.interner.try_intern(name).ok()?;
        self.scope_index.get(&(scope, name)).copied()
    }

    /// Resolve a qualified name (`ns::Outer::Inner`, leading `::` optional)
    /// from the global scope. Namespace aliases are followed when they
    /// appear as a qualifier.
    pub fn lookup_qualified(&self, path: &str) -> Option<DeclId> {
        let path = path.trim();
        let path = path.strip_prefix("::").unwrap_or(path);
        if path.is_empty() {
            return None;
        }

        let mut scope = DeclId::GLOBAL;
        let mut segments = path.split("::").map(str::trim).peekable();
        while let Some(segment) = segments.next() {
            let found = self.lookup_in(scope, segment)?;
            if segments.peek().is_none() {
                return Some(found);
            }
            scope = match self.decl(found).kind {
                DeclKind::NamespaceAlias { target } => target,
                _ => found,
            };
        }
        None
    }

    // Builder

    fn push(
        &mut self,
        parent: DeclId,
        name: &str,
        kind: DeclKind,
        loc: Option<SourceLoc>,
    ) -> Result<DeclId, SemaError> {
        let parent_decl = self.try_decl(parent)?;
        if !parent_decl.kind.is_scope() {
            return Err(self.wrong_kind(parent, "scope"));
        }
        let access = parent_decl
            .as_record()
            .map_or(Access::Public, |r| r.tag.default_access());
        let name = self.interner.intern(name);
        let indexed = !name.is_empty() && !matches!(kind, DeclKind::Function { .. });

        if indexed {
            self.check_unique(parent, name)?;
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "more than u32::MAX declarations is not representable"
        )]
        let id = DeclId::from_raw(self.decls.len() as u32);
        self.decls.push(Decl {
            name,
            kind,
            parent,
            loc,
            access,
        });
        if indexed {
            self.scope_index.insert((parent, name), id);
        }
        if let Some(members) = self.members_mut(parent) {
            members.push(id);
        }
        tracing::trace!(?id, ?parent, name = self.interner.lookup(name), "declared");
        Ok(id)
    }

    fn check_unique(&self, scope: DeclId, name: Name) -> Result<(), SemaError> {
        match self.scope_index.get(&(scope, name)) {
            Some(&previous) => Err(SemaError::DuplicateDeclaration {
                name: self.interner.lookup(name).to_owned(),
                scope: self.scope_label(scope),
                previous: self.decl(previous).loc,
            }),
            None => Ok(()),
        }
    }

    fn scope_label(&self, scope: DeclId) -> String {
        if scope.is_global() {
            "the global scope".to_owned()
        } else {
            self.name_str(scope).to_owned()
        }
    }

    fn members_mut(&mut self, scope: DeclId) -> Option<&mut Vec<DeclId>> {
        match &mut self.decls.get_mut(scope.index())?.kind {
            DeclKind::GlobalScope { members } | DeclKind::Namespace { members } => Some(members),
            DeclKind::Record(r) => Some(&mut r.members),
            DeclKind::Enum(e) => Some(&mut e.enumerators),
            _ => None,
        }
    }

    fn wrong_kind(&self, id: DeclId, expected: &'static str) -> SemaError {
        SemaError::WrongDeclKind {
            name: self.name_str(id).to_owned(),
            found: self.decl(id).kind.describe(),
            expected,
        }
    }

    /// Require `parent` to be a namespace or the global scope.
    fn expect_namespace(&self, parent: DeclId) -> Result<(), SemaError> {
        match self.try_decl(parent)?.kind {
            DeclKind::GlobalScope { .. } | DeclKind::Namespace { .. } => Ok(()),
            _ => Err(self.wrong_kind(parent, "namespace")),
        }
    }

    /// Require `parent` to be a namespace, the global scope, or a record.
    fn expect_type_scope(&self, parent: DeclId) -> Result<(), SemaError> {
        match self.try_decl(parent)?.kind {
            DeclKind::GlobalScope { .. } | DeclKind::Namespace { .. } | DeclKind::Record(_) => {
                Ok(())
            }
            _ => Err(self.wrong_kind(parent, "namespace or class")),
        }
    }

    fn expect_record(&self, id: DeclId) -> Result<&RecordDecl, SemaError> {
        self.try_decl(id)?
            .as_record()
            .ok_or_else(|| self.wrong_kind(id, "class"))
    }

    fn record_mut(&mut self, id: DeclId) -> Result<&mut RecordDecl, SemaError> {
        self.expect_record(id)?;
        match &mut self.decls[id.index()].kind {
            DeclKind::Record(r) => Ok(r),
            _ => Err(SemaError::UnknownDecl(id)),
        }
    }

    /// Declare a namespace, or reopen an existing one of the same name.
    pub fn add_namespace(
        &mut self,
        parent: DeclId,
        name: &str,
        loc: Option<SourceLoc>,
    ) -> Result<DeclId, SemaError> {
        self.expect_namespace(parent)?;
        if let Some(existing) = self.lookup_in(parent, name) {
            if matches!(self.decl(existing).kind, DeclKind::Namespace { .. }) {
                return Ok(existing);
            }
        }
        self.push(
            parent,
            name,
            DeclKind::Namespace {
                members: Vec::new(),
            },
            loc,
        )
    }

    pub fn add_record(
        &mut self,
        parent: DeclId,
        name: &str,
        tag: RecordTag,
        loc: Option<SourceLoc>,
    ) -> Result<DeclId, SemaError> {
        self.expect_type_scope(parent)?;
        self.push(parent, name, DeclKind::Record(RecordDecl::new(tag)), loc)
    }

    pub fn add_enum(
        &mut self,
        parent: DeclId,
        name: &str,
        scoped: bool,
        underlying: TypeId,
        loc: Option<SourceLoc>,
    ) -> Result<DeclId, SemaError> {
        self.expect_type_scope(parent)?;
        self.push(
            parent,
            name,
            DeclKind::Enum(EnumDecl {
                scoped,
                underlying,
                enumerators: Vec::new(),
            }),
            loc,
        )
    }

    /// Add an enumerator. For unscoped enums the name is also visible in
    /// the enum's enclosing scope.
    pub fn add_enumerator(
        &mut self,
        enum_id: DeclId,
        name: &str,
        value: i64,
        loc: Option<SourceLoc>,
    ) -> Result<DeclId, SemaError> {
        let decl = self.try_decl(enum_id)?;
        let scoped = decl
            .as_enum()
            .ok_or_else(|| self.wrong_kind(enum_id, "enum"))?
            .scoped;
        let outer = decl.parent;

        let interned = self.interner.intern(name);
        if !scoped {
            self.check_unique(outer, interned)?;
        }
        let id = self.push(enum_id, name, DeclKind::Enumerator { value }, loc)?;
        if !scoped {
            self.scope_index.insert((outer, interned), id);
        }
        // Enumerators take the enum's access, not the enum's default.
        let access = self.decl(enum_id).access;
        self.decls[id.index()].access = access;
        Ok(id)
    }

    pub fn add_variable(
        &mut self,
        parent: DeclId,
        name: &str,
        ty: TypeId,
        constant: bool,
        loc: Option<SourceLoc>,
    ) -> Result<DeclId, SemaError> {
        self.expect_namespace(parent)?;
        self.push(parent, name, DeclKind::Variable { ty, constant }, loc)
    }

    pub fn add_data_member(
        &mut self,
        record: DeclId,
        name: &str,
        ty: TypeId,
        is_static: bool,
        loc: Option<SourceLoc>,
    ) -> Result<DeclId, SemaError> {
        self.expect_record(record)?;
        self.push(record, name, DeclKind::DataMember { ty, is_static }, loc)
    }

    /// `typedef target name;` / `using name = target;`
    pub fn add_type_alias(
        &mut self,
        parent: DeclId,
        name: &str,
        target: TypeId,
        loc: Option<SourceLoc>,
    ) -> Result<DeclId, SemaError> {
        self.expect_type_scope(parent)?;
        self.push(parent, name, DeclKind::TypeAlias { target }, loc)
    }

    pub fn add_namespace_alias(
        &mut self,
        parent: DeclId,
        name: &str,
        target: DeclId,
        loc: Option<SourceLoc>,
    ) -> Result<DeclId, SemaError> {
        self.expect_namespace(parent)?;
        let target = match self.try_decl(target)?.kind {
            DeclKind::Namespace { .. } | DeclKind::GlobalScope { .. } => target,
            DeclKind::NamespaceAlias { target: inner } => inner,
            _ => return Err(self.wrong_kind(target, "namespace")),
        };
        self.push(parent, name, DeclKind::NamespaceAlias { target }, loc)
    }

    /// Functions are recorded so member lists stay complete; they cannot be
    /// looked up by name or reflected.
    pub fn add_function(
        &mut self,
        parent: DeclId,
        name: &str,
        is_static: bool,
        loc: Option<SourceLoc>,
    ) -> Result<DeclId, SemaError> {
        self.expect_type_scope(parent)?;
        self.push(parent, name, DeclKind::Function { is_static }, loc)
    }

    pub fn add_class_template(
        &mut self,
        parent: DeclId,
        name: &str,
        tag: RecordTag,
        loc: Option<SourceLoc>,
    ) -> Result<DeclId, SemaError> {
        self.expect_type_scope(parent)?;
        self.push(parent, name, DeclKind::ClassTemplate { tag }, loc)
    }

    /// The record for `template<args...>`, created on first use.
    ///
    /// Returns `(record, fresh)`; members should only be added when `fresh`.
    /// The instantiation lives in the template's scope but is not indexed
    /// by name there.
    pub fn instantiate(
        &mut self,
        template: DeclId,
        args: Vec<TemplateArg>,
    ) -> Result<(DeclId, bool), SemaError> {
        let decl = self.try_decl(template)?;
        let DeclKind::ClassTemplate { tag } = decl.kind else {
            return Err(self.wrong_kind(template, "class template"));
        };
        let key = (template, args);
        if let Some(&existing) = self.instantiations.get(&key) {
            return Ok((existing, false));
        }

        let (parent, name, loc) = (decl.parent, decl.name, decl.loc);
        let access = decl.access;
        let mut record = RecordDecl::new(tag);
        record.instantiation = Some(Instantiation {
            template,
            args: key.1.clone(),
        });

        #[expect(
            clippy::cast_possible_truncation,
            reason = "more than u32::MAX declarations is not representable"
        )]
        let id = DeclId::from_raw(self.decls.len() as u32);
        self.decls.push(Decl {
            name,
            kind: DeclKind::Record(record),
            parent,
            loc,
            access,
        });
        if let Some(members) = self.members_mut(parent) {
            members.push(id);
        }
        self.instantiations.insert(key, id);
        tracing::trace!(?id, ?template, "instantiated");
        Ok((id, true))
    }

    /// Append a base-specifier. `access` defaults to the class-key default.
    pub fn add_base(
        &mut self,
        record: DeclId,
        base: TypeId,
        access: Option<Access>,
        is_virtual: bool,
        loc: Option<SourceLoc>,
    ) -> Result<(), SemaError> {
        if self.expect_record(record)?.tag == RecordTag::Union {
            return Err(self.wrong_kind(record, "class or struct"));
        }
        let tag = self.expect_record(record)?.tag;
        let class = self
            .types
            .named_decl(self.types.canonical(base))
            .filter(|&d| {
                self.get(d)
                    .and_then(Decl::as_record)
                    .is_some_and(|r| r.tag != RecordTag::Union)
            })
            .ok_or_else(|| SemaError::BaseNotAClass {
                ty: crate::spelling::type_spelling(self, base, true),
            })?;
        if class == record {
            return Err(SemaError::SelfDerivation {
                record: self.name_str(record).to_owned(),
            });
        }
        self.record_mut(record)?.bases.push(BaseSpec {
            ty: base,
            class,
            access: access.unwrap_or(tag.default_access()),
            is_virtual,
            loc,
        });
        Ok(())
    }

    /// `friend` declaration inside `record`.
    pub fn add_friend(&mut self, record: DeclId, friend: DeclId) -> Result<(), SemaError> {
        self.try_decl(friend)?;
        self.record_mut(record)?.friends.push(friend);
        Ok(())
    }

    /// Set the access specifier of a record member.
    pub fn set_access(&mut self, member: DeclId, access: Access) -> Result<(), SemaError> {
        let parent = self.try_decl(member)?.parent;
        if member.is_global() || self.decl(parent).as_record().is_none() {
            return Err(self.wrong_kind(member, "class member"));
        }
        self.decls[member.index()].access = access;
        // Enumerators of a member enum share its access.
        if let DeclKind::Enum(e) = &self.decls[member.index()].kind {
            for enumerator in e.enumerators.clone() {
                self.decls[enumerator.index()].access = access;
            }
        }
        Ok(())
    }

    // Types

    fn intern_type(&mut self, kind: TypeKind) -> TypeId {
        let decls = &self.decls;
        self.types.intern(kind, &|alias| match decls.get(alias.index()) {
            Some(Decl {
                kind: DeclKind::TypeAlias { target },
                ..
            }) => *target,
            _ => TypeId::VOID,
        })
    }

    pub fn builtin_from_spelling(spelling: &str) -> Result<TypeId, SemaError> {
        BuiltinType::from_spelling(spelling)
            .map(BuiltinType::type_id)
            .ok_or_else(|| SemaError::UnknownBuiltin {
                spelling: spelling.to_owned(),
            })
    }

    /// The type a record or enum declaration introduces.
    pub fn decl_type(&mut self, decl: DeclId) -> Result<TypeId, SemaError> {
        match self.try_decl(decl)?.kind {
            DeclKind::Record(_) | DeclKind::Enum(_) => Ok(self.intern_type(TypeKind::Decl(decl))),
            _ => Err(self.wrong_kind(decl, "class or enum")),
        }
    }

    /// The type spelled through a type alias.
    pub fn alias_type(&mut self, alias: DeclId) -> Result<TypeId, SemaError> {
        match self.try_decl(alias)?.kind {
            DeclKind::TypeAlias { .. } => Ok(self.intern_type(TypeKind::Alias(alias))),
            _ => Err(self.wrong_kind(alias, "type alias")),
        }
    }

    pub fn qualified(&mut self, inner: TypeId, cv: Cv) -> TypeId {
        self.intern_type(TypeKind::Qualified { inner, cv })
    }

    pub fn pointer_to(&mut self, pointee: TypeId) -> TypeId {
        self.intern_type(TypeKind::Pointer(pointee))
    }

    pub fn reference_to(&mut self, referent: TypeId) -> TypeId {
        self.intern_type(TypeKind::LValueRef(referent))
    }

    pub fn array_of(&mut self, elem: TypeId, len: Option<u64>) -> TypeId {
        self.intern_type(TypeKind::Array { elem, len })
    }

    /// The type an alias declaration names, as written (one hop).
    pub fn alias_target(&self, alias: DeclId) -> Option<TypeId> {
        match self.get(alias)?.kind {
            DeclKind::TypeAlias { target } => Some(target),
            _ => None,
        }
    }

    /// Record/enum behind `ty` once aliases and qualifiers are removed.
    pub fn type_decl(&self, ty: TypeId) -> Option<DeclId> {
        self.types.named_decl(self.types.unqualified(self.types.canonical(ty)))
    }

    /// One-line summary for debug logs.
    pub fn summary(&self) -> TableSummary {
        let records = self
            .decls
            .iter()
            .filter(|d| d.as_record().is_some())
            .count();
        TableSummary {
            decls: self.decls.len(),
            records,
            types: self.types.len(),
        }
    }
}

/// Table size counters.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableSummary {
    pub decls: usize,
    pub records: usize,
    pub types: usize,
}
