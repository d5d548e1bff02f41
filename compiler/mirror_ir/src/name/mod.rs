//! Interned identifier handle.

use std::fmt;

/// Interned string identifier.
///
/// Layout: the top 4 bits select one of 16 interner shards, the low 28 bits
/// index into that shard. Two `Name`s from the same interner are equal iff
/// their strings are equal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty string, pre-interned in shard 0. Anonymous declarations use it.
    pub const EMPTY: Name = Name(0);

    /// Number of interner shards.
    pub const NUM_SHARDS: usize = 16;

    /// Largest local index a shard can hand out.
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    const SHARD_BITS: u32 = 28;

    /// Pack a shard and shard-local index.
    #[inline]
    pub const fn new(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << Self::SHARD_BITS) | local)
    }

    /// Rebuild from a raw value previously obtained with [`Name::raw`].
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> Self::SHARD_BITS) as usize
    }

    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    /// True for the pre-interned empty string.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Name(<empty>)")
        } else {
            write!(f, "Name({}:{})", self.shard(), self.local())
        }
    }
}
