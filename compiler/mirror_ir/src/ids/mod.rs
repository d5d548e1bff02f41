//! Arena indices for declarations and types.
//!
//! Both are 32-bit indices into tables owned by the host declaration table.
//! Equality is index equality, which is exactly the identity notion
//! reflection needs: two handles name the same entity iff they are equal.

use std::fmt;

/// Index of a declaration in the declaration table.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct DeclId(u32);

impl DeclId {
    /// The global scope. Always the first declaration of every table.
    pub const GLOBAL: DeclId = DeclId(0);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        DeclId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_global(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_global() {
            write!(f, "DeclId::GLOBAL")
        } else {
            write!(f, "DeclId({})", self.0)
        }
    }
}

/// Index of an interned type in the type pool.
///
/// Builtin types sit at fixed indices so they can be named without a pool.
/// Structurally identical compound types (`const int*` spelled twice)
/// intern to the same `TypeId`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // === Builtin types (indices 0-16) ===
    pub const VOID: Self = Self(0);
    pub const BOOL: Self = Self(1);
    pub const CHAR: Self = Self(2);
    pub const SIGNED_CHAR: Self = Self(3);
    pub const UNSIGNED_CHAR: Self = Self(4);
    pub const SHORT: Self = Self(5);
    pub const UNSIGNED_SHORT: Self = Self(6);
    pub const INT: Self = Self(7);
    pub const UNSIGNED_INT: Self = Self(8);
    pub const LONG: Self = Self(9);
    pub const UNSIGNED_LONG: Self = Self(10);
    pub const LONG_LONG: Self = Self(11);
    pub const UNSIGNED_LONG_LONG: Self = Self(12);
    pub const FLOAT: Self = Self(13);
    pub const DOUBLE: Self = Self(14);
    pub const LONG_DOUBLE: Self = Self(15);
    pub const NULLPTR: Self = Self(16);

    /// Number of builtin types.
    pub const BUILTIN_COUNT: u32 = 17;

    /// First index handed out for compound and declared types.
    /// 17-31 are reserved for future builtins.
    pub const FIRST_DYNAMIC: u32 = 32;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::BUILTIN_COUNT
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_builtin() {
            write!(f, "TypeId::builtin({})", self.0)
        } else {
            write!(f, "TypeId({})", self.0)
        }
    }
}
