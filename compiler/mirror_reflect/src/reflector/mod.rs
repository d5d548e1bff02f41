//! The reflection entry point.
//!
//! A [`Reflector`] borrows a finished [`DeclTable`] and turns source
//! constructs into [`Metaobject`]s. All metafunctions are methods on it.
//! It is `Copy`; narrowing the lexical context or changing options yields a
//! new reflector over the same table.

use mirror_ir::{DeclId, TypeId};
use mirror_sema::{BuiltinType, DeclKind, DeclTable, RecordTag, TypeKind};

use crate::{
    Construct, ForeignHandle, Identity, MetaKind, Metaobject, ReflectError, ReflectOptions,
    UnreflectableKind,
};

/// Reflection over one declaration table, from one lexical context.
#[derive(Copy, Clone, Debug)]
pub struct Reflector<'t> {
    table: &'t DeclTable,
    options: ReflectOptions,
    context: DeclId,
}

impl<'t> Reflector<'t> {
    /// Reflect from the global scope with default options.
    pub fn new(table: &'t DeclTable) -> Self {
        Self::with_options(table, ReflectOptions::default())
    }

    pub fn with_options(table: &'t DeclTable, options: ReflectOptions) -> Self {
        let summary = table.summary();
        tracing::debug!(
            decls = summary.decls,
            records = summary.records,
            types = summary.types,
            ?options,
            "reflector created"
        );
        Reflector {
            table,
            options,
            context: DeclId::GLOBAL,
        }
    }

    /// The same reflector, reflecting from inside `context`.
    ///
    /// Metaobjects reflected from here carry `context`, and member listings
    /// on them use it: it decides what accessible listings include and
    /// whether full listings are allowed. Listings never consult the
    /// context of the reflector they are called on.
    #[must_use]
    pub fn in_context(self, context: DeclId) -> Self {
        Reflector { context, ..self }
    }

    #[must_use]
    pub fn with_new_options(self, options: ReflectOptions) -> Self {
        Reflector { options, ..self }
    }

    pub fn table(&self) -> &'t DeclTable {
        self.table
    }

    pub fn options(&self) -> ReflectOptions {
        self.options
    }

    pub fn context(&self) -> DeclId {
        self.context
    }

    /// Reflect a source construct.
    ///
    /// Referentially transparent: reflecting the same construct again
    /// yields an equal metaobject.
    pub fn reflect<'a>(&self, construct: impl Into<Construct<'a>>) -> Result<Metaobject, ReflectError> {
        self.reflect_construct(construct.into())
    }

    #[tracing::instrument(level = "debug", skip(self), fields(context = ?self.context))]
    fn reflect_construct(&self, construct: Construct<'_>) -> Result<Metaobject, ReflectError> {
        let meta = match construct {
            Construct::Decl(id) => {
                if !self.table.contains(id) {
                    return Err(ReflectError::ForeignHandle {
                        what: ForeignHandle::Decl(id),
                    });
                }
                self.meta_for_decl(id, self.context)?
            }
            Construct::Type(ty) => {
                if !self.table.types().contains(ty) {
                    return Err(ReflectError::ForeignHandle {
                        what: ForeignHandle::Type(ty),
                    });
                }
                self.meta_for_type(ty, self.context)
            }
            Construct::Path(path) => {
                if let Some(id) = self.table.lookup_qualified(path) {
                    self.meta_for_decl(id, self.context)?
                } else if let Some(builtin) = BuiltinType::from_spelling(path) {
                    self.meta_for_type(builtin.type_id(), self.context)
                } else {
                    return Err(ReflectError::UnknownName {
                        path: path.to_owned(),
                    });
                }
            }
            Construct::GlobalScope => global_scope(self.context),
        };
        tracing::trace!(kind = %meta.kind, identity = ?meta.identity, "reflected");
        Ok(meta)
    }

    /// Whether `a` and `b` reflect the same entity. Defined for any pair.
    pub fn reflects_same(&self, a: Metaobject, b: Metaobject) -> bool {
        a.identity == b.identity
    }

    /// Metaobject for a declaration, kind chosen by where it is declared:
    /// records, enums and aliases declared inside a record are member types.
    pub(crate) fn meta_for_decl(
        &self,
        id: DeclId,
        context: DeclId,
    ) -> Result<Metaobject, ReflectError> {
        let decl = self.table.decl(id);
        let in_record = !id.is_global() && self.table.decl(decl.parent).as_record().is_some();
        let kind = match &decl.kind {
            DeclKind::GlobalScope { .. } => return Ok(global_scope(context)),
            DeclKind::Namespace { .. } => MetaKind::Namespace,
            DeclKind::Record(_) | DeclKind::Enum(_) | DeclKind::TypeAlias { .. } if in_record => {
                MetaKind::MemberType
            }
            DeclKind::Record(r) => record_kind(r.tag),
            DeclKind::Enum(_) => MetaKind::Enum,
            DeclKind::TypeAlias { .. } | DeclKind::NamespaceAlias { .. } => MetaKind::Alias,
            DeclKind::Enumerator { .. } => MetaKind::Enumerator,
            DeclKind::Variable { constant: true, .. } => MetaKind::Constant,
            DeclKind::Variable { .. } => MetaKind::Variable,
            DeclKind::DataMember { .. } => MetaKind::DataMember,
            DeclKind::Function { .. } => {
                return Err(self.unreflectable(id, UnreflectableKind::Function))
            }
            DeclKind::ClassTemplate { .. } => {
                return Err(self.unreflectable(id, UnreflectableKind::ClassTemplate))
            }
        };
        Ok(Metaobject::new(kind, Identity::Decl(id), context))
    }

    fn unreflectable(&self, id: DeclId, what: UnreflectableKind) -> ReflectError {
        ReflectError::Unreflectable {
            what,
            name: self.table.name_str(id).to_owned(),
        }
    }

    /// Metaobject for a declaration in its own right, ignoring member-type
    /// nesting: records and enums get their type kind, aliases `Alias`.
    pub(crate) fn meta_for_entity(
        &self,
        id: DeclId,
        context: DeclId,
    ) -> Result<Metaobject, ReflectError> {
        let kind = match &self.table.decl(id).kind {
            DeclKind::Record(r) => record_kind(r.tag),
            DeclKind::Enum(_) => MetaKind::Enum,
            DeclKind::TypeAlias { .. } => MetaKind::Alias,
            _ => return self.meta_for_decl(id, context),
        };
        Ok(Metaobject::new(kind, Identity::Decl(id), context))
    }

    /// Metaobject for a type as written.
    ///
    /// Outermost alias sugar reflects the alias; a bare record or enum
    /// reflects its declaration; anything else is a `Type` keyed by its
    /// canonical form.
    pub(crate) fn meta_for_type(&self, ty: TypeId, context: DeclId) -> Metaobject {
        let types = self.table.types();
        match types.kind(ty) {
            TypeKind::Alias(alias) => {
                Metaobject::new(MetaKind::Alias, Identity::Decl(alias), context).with_spelling(ty)
            }
            TypeKind::Decl(decl) => {
                let kind = match &self.table.decl(decl).kind {
                    DeclKind::Record(r) => record_kind(r.tag),
                    _ => MetaKind::Enum,
                };
                Metaobject::new(kind, Identity::Decl(decl), context)
            }
            TypeKind::Builtin(_)
            | TypeKind::Qualified { .. }
            | TypeKind::Pointer(_)
            | TypeKind::LValueRef(_)
            | TypeKind::Array { .. } => Metaobject::new(
                MetaKind::Type,
                Identity::Type(types.canonical(ty)),
                context,
            )
            .with_spelling(ty),
        }
    }
}

fn global_scope(context: DeclId) -> Metaobject {
    Metaobject::new(MetaKind::GlobalScope, Identity::GlobalScope, context)
}

pub(crate) fn record_kind(tag: RecordTag) -> MetaKind {
    match tag {
        RecordTag::Class => MetaKind::Class,
        RecordTag::Struct => MetaKind::Record,
        RecordTag::Union => MetaKind::Union,
    }
}
