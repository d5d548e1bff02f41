//! Ordinary (non-reflective) access rules.
//!
//! A lexical context is a declaration: the scope code is written in. It can
//! name a member of record `R` when the member is public, when the context
//! is `R` itself or nested in `R`, or when `R` befriends the context or one
//! of its enclosing declarations. Protected members are additionally
//! visible from classes derived from `R`.

use mirror_ir::DeclId;

use crate::{Access, Decl, DeclKind, DeclTable};

impl DeclTable {
    /// `ctx` followed by each enclosing declaration, ending at the global
    /// scope.
    pub fn lexical_ancestors(&self, ctx: DeclId) -> impl Iterator<Item = DeclId> + '_ {
        let mut next = self.contains(ctx).then_some(ctx);
        std::iter::from_fn(move || {
            let current = next?;
            next = (!current.is_global()).then(|| self.decl(current).parent);
            Some(current)
        })
    }

    /// Whether `ctx` is `scope` or lexically nested inside it.
    pub fn is_within(&self, ctx: DeclId, scope: DeclId) -> bool {
        self.lexical_ancestors(ctx).any(|d| d == scope)
    }

    /// Whether `record` befriends `ctx` or any declaration enclosing it.
    pub fn is_friend_of(&self, ctx: DeclId, record: DeclId) -> bool {
        let Some(r) = self.get(record).and_then(Decl::as_record) else {
            return false;
        };
        self.lexical_ancestors(ctx).any(|d| r.friends.contains(&d))
    }

    /// Whether `derived` inherits from `base`, directly or transitively.
    pub fn is_derived_from(&self, derived: DeclId, base: DeclId) -> bool {
        let mut stack = vec![derived];
        let mut visited = Vec::new();
        while let Some(current) = stack.pop() {
            if visited.contains(&current) {
                continue;
            }
            visited.push(current);
            let Some(r) = self.get(current).and_then(Decl::as_record) else {
                continue;
            };
            for spec in &r.bases {
                if spec.class == base {
                    return true;
                }
                stack.push(spec.class);
            }
        }
        false
    }

    /// Whether `ctx` may name every member of `record`, private ones included.
    pub fn has_full_access(&self, ctx: DeclId, record: DeclId) -> bool {
        self.is_within(ctx, record) || self.is_friend_of(ctx, record)
    }

    /// Whether `ctx` may name a member of `record` declared with `access`.
    pub fn can_access(&self, ctx: DeclId, record: DeclId, access: Access) -> bool {
        match access {
            Access::Public => true,
            Access::Private => self.has_full_access(ctx, record),
            Access::Protected => {
                self.has_full_access(ctx, record)
                    || self
                        .lexical_ancestors(ctx)
                        .any(|d| self.is_derived_from(d, record))
            }
        }
    }

    /// Whether `ctx` may name `member` under ordinary access rules.
    ///
    /// Non-members of records are always accessible.
    pub fn can_access_member(&self, ctx: DeclId, member: DeclId) -> bool {
        let Some(decl) = self.get(member) else {
            return false;
        };
        match self.decl(decl.parent).kind {
            DeclKind::Record(_) => self.can_access(ctx, decl.parent, decl.access),
            _ => true,
        }
    }
}
