//! Aliasing, scopes, types, enums, records and bases.

use mirror_ir::DeclId;
use mirror_sema::{Access, BaseSpec, DeclKind, EnumDecl, RecordDecl, RecordTag};

use crate::{
    Concept, ConceptSet, ForeignHandle, Identity, MetaKind, Metaobject, ObjectSequence,
    ReflectError, Reflector,
};

impl Reflector<'_> {
    /// What an alias names, exactly one hop away.
    ///
    /// With `using A = B; using B = int;`, the alias target of `A` is the
    /// alias `B`, never `int`.
    pub fn get_aliased(&self, obj: Metaobject) -> Result<Metaobject, ReflectError> {
        obj.require(Concept::Alias, "get_aliased")?;
        let decl = self.decl_of(obj, "get_aliased")?;
        let target = match self.table().decl(decl).kind {
            DeclKind::TypeAlias { target } => self.meta_for_type(target, obj.context),
            DeclKind::NamespaceAlias { target } => self.meta_for_decl(target, obj.context)?,
            _ => return Err(violation(obj, Concept::Alias, "get_aliased")),
        };
        tracing::trace!(alias = ?decl, target = ?target.identity, "alias hop");
        Ok(target)
    }

    /// A member type reflected as the entity it declares: a `Record`,
    /// `Class`, `Union`, `Enum` or `Alias` metaobject for the same
    /// declaration.
    pub fn get_member_entity(&self, obj: Metaobject) -> Result<Metaobject, ReflectError> {
        obj.require(Concept::RecordMember, "get_member_entity")?;
        if obj.kind != MetaKind::MemberType {
            return Err(violation(obj, Concept::Type, "get_member_entity"));
        }
        let decl = self.decl_of(obj, "get_member_entity")?;
        self.meta_for_entity(decl, obj.context)
    }

    /// The scope `obj` is declared in.
    ///
    /// Enumerators of unscoped enums belong to the enum's enclosing scope.
    pub fn get_scope(&self, obj: Metaobject) -> Result<Metaobject, ReflectError> {
        obj.require(Concept::ScopeMember, "get_scope")?;
        let decl = self.decl_of(obj, "get_scope")?;
        let table = self.table();
        let mut scope = table.decl(decl).parent;
        if let Some(e) = table.decl(scope).as_enum() {
            if !e.scoped && matches!(table.decl(decl).kind, DeclKind::Enumerator { .. }) {
                scope = table.decl(scope).parent;
            }
        }
        self.meta_for_entity(scope, obj.context)
    }

    /// The type of a variable, constant or data member as declared, or the
    /// enum of an enumerator.
    pub fn get_type(&self, obj: Metaobject) -> Result<Metaobject, ReflectError> {
        obj.require(Concept::Typed, "get_type")?;
        let decl = self.decl_of(obj, "get_type")?;
        let table = self.table();
        match table.decl(decl).kind {
            DeclKind::Variable { ty, .. } | DeclKind::DataMember { ty, .. } => {
                Ok(self.meta_for_type(ty, obj.context))
            }
            DeclKind::Enumerator { .. } => self.meta_for_entity(table.decl(decl).parent, obj.context),
            _ => Err(violation(obj, Concept::Typed, "get_type")),
        }
    }

    /// Value of an enumerator.
    pub fn get_constant(&self, obj: Metaobject) -> Result<i64, ReflectError> {
        obj.require(Concept::Enumerator, "get_constant")?;
        let decl = self.decl_of(obj, "get_constant")?;
        match self.table().decl(decl).kind {
            DeclKind::Enumerator { value } => Ok(value),
            _ => Err(violation(obj, Concept::Enumerator, "get_constant")),
        }
    }

    /// Enumerators in declaration order.
    pub fn get_enumerators(&self, obj: Metaobject) -> Result<ObjectSequence, ReflectError> {
        let e = self.enum_of(obj, "get_enumerators")?;
        Ok(e.enumerators
            .iter()
            .map(|&id| Metaobject::new(MetaKind::Enumerator, Identity::Decl(id), obj.context))
            .collect())
    }

    pub fn is_scoped_enum(&self, obj: Metaobject) -> Result<bool, ReflectError> {
        Ok(self.enum_of(obj, "is_scoped_enum")?.scoped)
    }

    /// Whether a variable is a static data member. Namespace-scope variables
    /// report `false`.
    pub fn is_static(&self, obj: Metaobject) -> Result<bool, ReflectError> {
        obj.require(Concept::Variable, "is_static")?;
        let decl = self.decl_of(obj, "is_static")?;
        Ok(matches!(
            self.table().decl(decl).kind,
            DeclKind::DataMember {
                is_static: true,
                ..
            }
        ))
    }

    /// Access specifier of a record member or base.
    pub fn get_access(&self, obj: Metaobject) -> Result<Access, ReflectError> {
        self.access_of(obj, "get_access")
    }

    pub fn is_public(&self, obj: Metaobject) -> Result<bool, ReflectError> {
        Ok(self.access_of(obj, "is_public")? == Access::Public)
    }

    pub fn is_protected(&self, obj: Metaobject) -> Result<bool, ReflectError> {
        Ok(self.access_of(obj, "is_protected")? == Access::Protected)
    }

    pub fn is_private(&self, obj: Metaobject) -> Result<bool, ReflectError> {
        Ok(self.access_of(obj, "is_private")? == Access::Private)
    }

    /// Declared with the `class` key.
    pub fn is_class(&self, obj: Metaobject) -> Result<bool, ReflectError> {
        Ok(self.record_of(obj, "is_class")?.1.tag == RecordTag::Class)
    }

    /// Declared with the `struct` key.
    pub fn is_struct(&self, obj: Metaobject) -> Result<bool, ReflectError> {
        Ok(self.record_of(obj, "is_struct")?.1.tag == RecordTag::Struct)
    }

    pub fn is_union(&self, obj: Metaobject) -> Result<bool, ReflectError> {
        Ok(self.record_of(obj, "is_union")?.1.tag == RecordTag::Union)
    }

    /// The class a base-specifier names.
    pub fn get_class(&self, obj: Metaobject) -> Result<Metaobject, ReflectError> {
        let spec = self.base_of(obj, "get_class")?;
        self.meta_for_entity(spec.class, obj.context)
    }

    pub fn is_virtual(&self, obj: Metaobject) -> Result<bool, ReflectError> {
        Ok(self.base_of(obj, "is_virtual")?.is_virtual)
    }

    // Helpers shared with member enumeration.

    /// The declaration behind a concept-checked metaobject.
    pub(crate) fn decl_of(
        &self,
        obj: Metaobject,
        operation: &'static str,
    ) -> Result<DeclId, ReflectError> {
        match obj.identity {
            Identity::Decl(decl) if self.table().contains(decl) => Ok(decl),
            Identity::Decl(decl) => Err(ReflectError::ForeignHandle {
                what: ForeignHandle::Decl(decl),
            }),
            Identity::GlobalScope => Ok(DeclId::GLOBAL),
            Identity::Type(_) | Identity::Base { .. } => {
                Err(violation(obj, Concept::Named, operation))
            }
        }
    }

    /// Rejects metaobjects holding handles from another table.
    pub(crate) fn check_owned(&self, obj: Metaobject) -> Result<(), ReflectError> {
        let table = self.table();
        let foreign_type = |ty| (!table.types().contains(ty)).then_some(ForeignHandle::Type(ty));
        let foreign = match obj.identity {
            Identity::Decl(decl) | Identity::Base { derived: decl, .. } => {
                (!table.contains(decl)).then_some(ForeignHandle::Decl(decl))
            }
            Identity::Type(ty) => foreign_type(ty),
            Identity::GlobalScope => None,
        };
        match foreign.or_else(|| obj.spelling.and_then(foreign_type)) {
            Some(what) => Err(ReflectError::ForeignHandle { what }),
            None => Ok(()),
        }
    }

    pub(crate) fn record_of(
        &self,
        obj: Metaobject,
        operation: &'static str,
    ) -> Result<(DeclId, &RecordDecl), ReflectError> {
        obj.require(Concept::Record, operation)?;
        let decl = self.decl_of(obj, operation)?;
        self.table()
            .decl(decl)
            .as_record()
            .map(|r| (decl, r))
            .ok_or_else(|| violation(obj, Concept::Record, operation))
    }

    fn enum_of(&self, obj: Metaobject, operation: &'static str) -> Result<&EnumDecl, ReflectError> {
        obj.require(Concept::Enum, operation)?;
        let decl = self.decl_of(obj, operation)?;
        self.table()
            .decl(decl)
            .as_enum()
            .ok_or_else(|| violation(obj, Concept::Enum, operation))
    }

    pub(crate) fn base_spec(&self, derived: DeclId, index: u32) -> Option<&BaseSpec> {
        self.table()
            .get(derived)?
            .as_record()?
            .bases
            .get(index as usize)
    }

    fn base_of(&self, obj: Metaobject, operation: &'static str) -> Result<&BaseSpec, ReflectError> {
        obj.require(Concept::Base, operation)?;
        match obj.identity {
            Identity::Base { derived, index } => self
                .base_spec(derived, index)
                .ok_or(ReflectError::ForeignHandle {
                    what: ForeignHandle::Decl(derived),
                }),
            _ => Err(violation(obj, Concept::Base, operation)),
        }
    }

    fn access_of(&self, obj: Metaobject, operation: &'static str) -> Result<Access, ReflectError> {
        obj.require_any(ConceptSet::RECORD_MEMBER | ConceptSet::BASE, operation)?;
        if let Identity::Base { .. } = obj.identity {
            return Ok(self.base_of(obj, operation)?.access);
        }
        let decl = self.decl_of(obj, operation)?;
        Ok(self.table().decl(decl).access)
    }
}

fn violation(obj: Metaobject, concept: Concept, operation: &'static str) -> ReflectError {
    ReflectError::ConceptViolation {
        operation,
        expected: concept.set(),
        found: obj.kind,
    }
}
