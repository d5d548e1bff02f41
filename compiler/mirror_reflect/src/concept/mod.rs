//! Concept taxonomy.
//!
//! A concept is a capability: the set of metafunctions legal on a
//! metaobject. Membership depends only on the metaobject's kind, so each
//! kind maps to a fixed [`ConceptSet`] and checking a concept is a bit test.

use std::fmt;

use bitflags::bitflags;

use crate::{MetaKind, Metaobject, ReflectError};

/// A capability classification of metaobjects.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Concept {
    Object,
    ObjectSequence,
    Named,
    Typed,
    Scope,
    ScopeMember,
    Record,
    Class,
    Base,
    RecordMember,
    Namespace,
    GlobalScope,
    Enum,
    Enumerator,
    Type,
    Variable,
    Constant,
    Alias,
}

impl Concept {
    pub const ALL: [Concept; 18] = [
        Concept::Object,
        Concept::ObjectSequence,
        Concept::Named,
        Concept::Typed,
        Concept::Scope,
        Concept::ScopeMember,
        Concept::Record,
        Concept::Class,
        Concept::Base,
        Concept::RecordMember,
        Concept::Namespace,
        Concept::GlobalScope,
        Concept::Enum,
        Concept::Enumerator,
        Concept::Type,
        Concept::Variable,
        Concept::Constant,
        Concept::Alias,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Concept::Object => "Object",
            Concept::ObjectSequence => "ObjectSequence",
            Concept::Named => "Named",
            Concept::Typed => "Typed",
            Concept::Scope => "Scope",
            Concept::ScopeMember => "ScopeMember",
            Concept::Record => "Record",
            Concept::Class => "Class",
            Concept::Base => "Base",
            Concept::RecordMember => "RecordMember",
            Concept::Namespace => "Namespace",
            Concept::GlobalScope => "GlobalScope",
            Concept::Enum => "Enum",
            Concept::Enumerator => "Enumerator",
            Concept::Type => "Type",
            Concept::Variable => "Variable",
            Concept::Constant => "Constant",
            Concept::Alias => "Alias",
        }
    }

    pub const fn set(self) -> ConceptSet {
        match self {
            Concept::Object => ConceptSet::OBJECT,
            Concept::ObjectSequence => ConceptSet::OBJECT_SEQUENCE,
            Concept::Named => ConceptSet::NAMED,
            Concept::Typed => ConceptSet::TYPED,
            Concept::Scope => ConceptSet::SCOPE,
            Concept::ScopeMember => ConceptSet::SCOPE_MEMBER,
            Concept::Record => ConceptSet::RECORD,
            Concept::Class => ConceptSet::CLASS,
            Concept::Base => ConceptSet::BASE,
            Concept::RecordMember => ConceptSet::RECORD_MEMBER,
            Concept::Namespace => ConceptSet::NAMESPACE,
            Concept::GlobalScope => ConceptSet::GLOBAL_SCOPE,
            Concept::Enum => ConceptSet::ENUM,
            Concept::Enumerator => ConceptSet::ENUMERATOR,
            Concept::Type => ConceptSet::TYPE,
            Concept::Variable => ConceptSet::VARIABLE,
            Concept::Constant => ConceptSet::CONSTANT,
            Concept::Alias => ConceptSet::ALIAS,
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A set of concepts.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ConceptSet: u32 {
        const OBJECT = 1 << 0;
        const OBJECT_SEQUENCE = 1 << 1;
        const NAMED = 1 << 2;
        const TYPED = 1 << 3;
        const SCOPE = 1 << 4;
        const SCOPE_MEMBER = 1 << 5;
        const RECORD = 1 << 6;
        const CLASS = 1 << 7;
        const BASE = 1 << 8;
        const RECORD_MEMBER = 1 << 9;
        const NAMESPACE = 1 << 10;
        const GLOBAL_SCOPE = 1 << 11;
        const ENUM = 1 << 12;
        const ENUMERATOR = 1 << 13;
        const TYPE = 1 << 14;
        const VARIABLE = 1 << 15;
        const CONSTANT = 1 << 16;
        const ALIAS = 1 << 17;
    }
}

impl ConceptSet {
    /// Concepts in the set, in [`Concept::ALL`] order.
    pub fn concepts(self) -> impl Iterator<Item = Concept> {
        Concept::ALL
            .into_iter()
            .filter(move |c| self.contains(c.set()))
    }
}

/// Renders as `RecordMember or Base`.
impl fmt::Display for ConceptSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, concept) in self.concepts().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            f.write_str(concept.as_str())?;
        }
        Ok(())
    }
}

impl MetaKind {
    /// Every concept a metaobject of this kind satisfies.
    pub const fn concepts(self) -> ConceptSet {
        const RECORDS: ConceptSet = ConceptSet::OBJECT
            .union(ConceptSet::NAMED)
            .union(ConceptSet::SCOPE)
            .union(ConceptSet::SCOPE_MEMBER)
            .union(ConceptSet::RECORD)
            .union(ConceptSet::TYPE);

        match self {
            MetaKind::Type => ConceptSet::OBJECT
                .union(ConceptSet::NAMED)
                .union(ConceptSet::TYPE),
            MetaKind::Record | MetaKind::Class => RECORDS.union(ConceptSet::CLASS),
            MetaKind::Union => RECORDS,
            MetaKind::Base => ConceptSet::OBJECT.union(ConceptSet::BASE),
            MetaKind::Namespace => ConceptSet::OBJECT
                .union(ConceptSet::NAMED)
                .union(ConceptSet::SCOPE)
                .union(ConceptSet::SCOPE_MEMBER)
                .union(ConceptSet::NAMESPACE),
            MetaKind::GlobalScope => ConceptSet::OBJECT
                .union(ConceptSet::SCOPE)
                .union(ConceptSet::NAMESPACE)
                .union(ConceptSet::GLOBAL_SCOPE),
            MetaKind::Enum => ConceptSet::OBJECT
                .union(ConceptSet::NAMED)
                .union(ConceptSet::SCOPE)
                .union(ConceptSet::SCOPE_MEMBER)
                .union(ConceptSet::ENUM)
                .union(ConceptSet::TYPE),
            MetaKind::Enumerator => ConceptSet::OBJECT
                .union(ConceptSet::NAMED)
                .union(ConceptSet::SCOPE_MEMBER)
                .union(ConceptSet::TYPED)
                .union(ConceptSet::CONSTANT)
                .union(ConceptSet::ENUMERATOR),
            MetaKind::Variable => ConceptSet::OBJECT
                .union(ConceptSet::NAMED)
                .union(ConceptSet::SCOPE_MEMBER)
                .union(ConceptSet::TYPED)
                .union(ConceptSet::VARIABLE),
            MetaKind::Constant => ConceptSet::OBJECT
                .union(ConceptSet::NAMED)
                .union(ConceptSet::SCOPE_MEMBER)
                .union(ConceptSet::TYPED)
                .union(ConceptSet::CONSTANT),
            MetaKind::Alias => ConceptSet::OBJECT
                .union(ConceptSet::NAMED)
                .union(ConceptSet::SCOPE_MEMBER)
                .union(ConceptSet::ALIAS),
            MetaKind::DataMember => ConceptSet::OBJECT
                .union(ConceptSet::NAMED)
                .union(ConceptSet::SCOPE_MEMBER)
                .union(ConceptSet::TYPED)
                .union(ConceptSet::VARIABLE)
                .union(ConceptSet::RECORD_MEMBER),
            MetaKind::MemberType => ConceptSet::OBJECT
                .union(ConceptSet::NAMED)
                .union(ConceptSet::SCOPE_MEMBER)
                .union(ConceptSet::TYPE)
                .union(ConceptSet::RECORD_MEMBER),
        }
    }

    #[inline]
    pub const fn satisfies(self, concept: Concept) -> bool {
        self.concepts().contains(concept.set())
    }
}

impl Metaobject {
    #[inline]
    pub fn satisfies(&self, concept: Concept) -> bool {
        self.kind.satisfies(concept)
    }

    /// Gate a metafunction on `concept`.
    pub(crate) fn require(self, concept: Concept, operation: &'static str) -> Result<(), ReflectError> {
        self.require_any(concept.set(), operation)
    }

    /// Gate a metafunction on any one of `expected`.
    pub(crate) fn require_any(
        self,
        expected: ConceptSet,
        operation: &'static str,
    ) -> Result<(), ReflectError> {
        if self.kind.concepts().intersects(expected) {
            Ok(())
        } else {
            Err(ReflectError::ConceptViolation {
                operation,
                expected,
                found: self.kind,
            })
        }
    }
}

/// Whether `obj` satisfies `concept`.
#[inline]
pub fn satisfies(obj: &Metaobject, concept: Concept) -> bool {
    obj.satisfies(concept)
}
