//! Member enumeration under access control.
//!
//! Each listing comes in three policies over the same declaration order:
//!
//! - **all**: every direct member. Only legal when the reflecting context
//!   has full access to the record (it is the record, is nested in it, or
//!   is befriended by it).
//! - **public**: public members only, identical from every context.
//! - **accessible**: whatever the reflecting context could name in ordinary
//!   code. From an unrelated context this equals the public listing.
//!
//! Filtering never reorders. Inherited members are not listed and member
//! functions never are.

use mirror_ir::DeclId;
use mirror_sema::{spelling::decl_spelling, Access, DeclKind};
use smallvec::SmallVec;

use crate::{Concept, Identity, MetaKind, Metaobject, ObjectSequence, ReflectError, Reflector};

/// Which members a listing keeps.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Policy {
    All,
    Public,
    Accessible,
}

/// Which members a listing is over.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Category {
    DataMembers,
    MemberTypes,
}

impl Category {
    fn kind_of(self, kind: &DeclKind) -> Option<MetaKind> {
        match (self, kind) {
            (Category::DataMembers, DeclKind::DataMember { .. }) => Some(MetaKind::DataMember),
            (
                Category::MemberTypes,
                DeclKind::Record(_) | DeclKind::Enum(_) | DeclKind::TypeAlias { .. },
            ) => Some(MetaKind::MemberType),
            _ => None,
        }
    }
}

impl Reflector<'_> {
    /// Every direct data member of `obj`, static ones included.
    pub fn get_data_members(&self, obj: Metaobject) -> Result<ObjectSequence, ReflectError> {
        self.list_members(obj, Category::DataMembers, Policy::All, "get_data_members")
    }

    pub fn get_public_data_members(
        &self,
        obj: Metaobject,
    ) -> Result<ObjectSequence, ReflectError> {
        self.list_members(
            obj,
            Category::DataMembers,
            Policy::Public,
            "get_public_data_members",
        )
    }

    pub fn get_accessible_data_members(
        &self,
        obj: Metaobject,
    ) -> Result<ObjectSequence, ReflectError> {
        self.list_members(
            obj,
            Category::DataMembers,
            Policy::Accessible,
            "get_accessible_data_members",
        )
    }

    /// Every nested record, enum and type alias of `obj`.
    pub fn get_member_types(&self, obj: Metaobject) -> Result<ObjectSequence, ReflectError> {
        self.list_members(obj, Category::MemberTypes, Policy::All, "get_member_types")
    }

    pub fn get_public_member_types(
        &self,
        obj: Metaobject,
    ) -> Result<ObjectSequence, ReflectError> {
        self.list_members(
            obj,
            Category::MemberTypes,
            Policy::Public,
            "get_public_member_types",
        )
    }

    pub fn get_accessible_member_types(
        &self,
        obj: Metaobject,
    ) -> Result<ObjectSequence, ReflectError> {
        self.list_members(
            obj,
            Category::MemberTypes,
            Policy::Accessible,
            "get_accessible_member_types",
        )
    }

    /// Direct base-specifiers of `obj` in declaration order.
    pub fn get_base_classes(&self, obj: Metaobject) -> Result<ObjectSequence, ReflectError> {
        self.list_bases(obj, Policy::All, "get_base_classes")
    }

    pub fn get_public_base_classes(
        &self,
        obj: Metaobject,
    ) -> Result<ObjectSequence, ReflectError> {
        self.list_bases(obj, Policy::Public, "get_public_base_classes")
    }

    pub fn get_accessible_base_classes(
        &self,
        obj: Metaobject,
    ) -> Result<ObjectSequence, ReflectError> {
        self.list_bases(obj, Policy::Accessible, "get_accessible_base_classes")
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(operation, record = ?obj.identity, ?category, ?policy)
    )]
    fn list_members(
        &self,
        obj: Metaobject,
        category: Category,
        policy: Policy,
        operation: &'static str,
    ) -> Result<ObjectSequence, ReflectError> {
        let (record, decl) = self.record_of(obj, operation)?;
        self.check_policy(obj, record, policy, operation)?;

        let table = self.table();
        let mut listed = SmallVec::new();
        for &member in &decl.members {
            let m = table.decl(member);
            let Some(kind) = category.kind_of(&m.kind) else {
                continue;
            };
            let keep = self.keeps(obj.context, record, m.access, policy);
            tracing::trace!(member = table.name_str(member), access = %m.access, keep);
            if keep {
                listed.push(Metaobject::new(kind, Identity::Decl(member), obj.context));
            }
        }
        Ok(ObjectSequence::from_elements(listed))
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(operation, record = ?obj.identity, ?policy)
    )]
    fn list_bases(
        &self,
        obj: Metaobject,
        policy: Policy,
        operation: &'static str,
    ) -> Result<ObjectSequence, ReflectError> {
        obj.require(Concept::Class, operation)?;
        let (record, decl) = self.record_of(obj, operation)?;
        self.check_policy(obj, record, policy, operation)?;

        let mut listed = SmallVec::new();
        for (index, spec) in decl.bases.iter().enumerate() {
            let keep = self.keeps(obj.context, record, spec.access, policy);
            tracing::trace!(index, access = %spec.access, keep);
            if keep {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "base-specifier lists are far below u32::MAX"
                )]
                let index = index as u32;
                listed.push(Metaobject::new(
                    MetaKind::Base,
                    Identity::Base {
                        derived: record,
                        index,
                    },
                    obj.context,
                ));
            }
        }
        Ok(ObjectSequence::from_elements(listed))
    }

    /// Full listings need full access from the reflecting context.
    fn check_policy(
        &self,
        obj: Metaobject,
        record: DeclId,
        policy: Policy,
        operation: &'static str,
    ) -> Result<(), ReflectError> {
        if policy == Policy::All && !self.table().has_full_access(obj.context, record) {
            return Err(ReflectError::InaccessibleMembers {
                operation,
                record: decl_spelling(self.table(), record, true),
            });
        }
        Ok(())
    }

    fn keeps(&self, context: DeclId, record: DeclId, access: Access, policy: Policy) -> bool {
        match policy {
            Policy::All => true,
            Policy::Public => access == Access::Public,
            Policy::Accessible => self.table().can_access(context, record, access),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
