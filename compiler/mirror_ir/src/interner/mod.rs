//! Sharded string interner.
//!
//! Declaration tables, type spellings and diagnostics all speak in `Name`s.
//! Interning happens while the host builds its declaration table; after
//! that the interner is effectively read-only, so lookups take the shard's
//! read lock only.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// Spellings interned up front so the common builtin and sentinel names
/// land in predictable, cheap slots.
const PRE_INTERNED: &[&str] = &[
    "<builtin>",
    "void",
    "bool",
    "char",
    "signed char",
    "unsigned char",
    "short",
    "unsigned short",
    "int",
    "unsigned int",
    "long",
    "unsigned long",
    "long long",
    "unsigned long long",
    "float",
    "double",
    "long double",
    "decltype(nullptr)",
    "std",
];

/// Interning failed because a shard ran out of local indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    ShardOverflow { shard: usize, count: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::ShardOverflow { shard, count } => write!(
                f,
                "interner shard {shard} is full ({count} strings, limit {})",
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

#[derive(Default)]
struct Shard {
    index: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Thread-safe string interner, split into [`Name::NUM_SHARDS`] shards.
///
/// Strings are leaked on first insertion and live for the rest of the
/// process, which is what lets [`StringInterner::lookup`] hand out `&str`
/// without holding a lock.
pub struct StringInterner {
    shards: [RwLock<Shard>; Name::NUM_SHARDS],
    len: AtomicUsize,
}

impl StringInterner {
    pub fn new() -> Self {
        let interner = StringInterner {
            shards: std::array::from_fn(|_| RwLock::new(Shard::default())),
            len: AtomicUsize::new(0),
        };
        // Shard 0, local 0 must be the empty string so `Name::EMPTY` resolves.
        {
            let mut shard = interner.shards[0].write();
            shard.index.insert("", 0);
            shard.strings.push("");
        }
        interner.len.store(1, Ordering::Relaxed);
        for spelling in PRE_INTERNED {
            interner.intern(spelling);
        }
        interner
    }

    #[inline]
    fn shard_of(s: &str) -> usize {
        if s.is_empty() {
            return 0;
        }
        let hash = s
            .bytes()
            .take(8)
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
        hash as usize % Name::NUM_SHARDS
    }

    /// Intern `s`, reporting shard exhaustion instead of panicking.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        let shard_idx = Self::shard_of(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx < Name::NUM_SHARDS"
        )]
        let shard_tag = shard_idx as u32;

        if let Some(&local) = self.shards[shard_idx].read().index.get(s) {
            return Ok(Name::new(shard_tag, local));
        }

        let mut shard = self.shards[shard_idx].write();
        // Another writer may have won the race between the two locks.
        if let Some(&local) = shard.index.get(s) {
            return Ok(Name::new(shard_tag, local));
        }

        let count = shard.strings.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow {
                shard: shard_idx,
                count,
            })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        shard.strings.push(leaked);
        shard.index.insert(leaked, local);
        self.len.fetch_add(1, Ordering::Relaxed);
        Ok(Name::new(shard_tag, local))
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics if a shard exceeds 2^28 strings; use [`Self::try_intern`] to
    /// handle that case.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Resolve a name produced by this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.shards[name.shard()].read().strings[name.local()]
    }

    /// Resolve a name, returning `None` for names this interner never produced.
    pub fn try_lookup(&self, name: Name) -> Option<&'static str> {
        self.shards
            .get(name.shard())?
            .read()
            .strings
            .get(name.local())
            .copied()
    }

    /// Number of distinct strings, including the empty string.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }

    /// An interner always holds at least the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Read access to interned strings.
///
/// Formatting and diagnostic code takes `&impl StringLookup` so it does not
/// care whether it is handed a bare interner or a shared one.
pub trait StringLookup {
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Reference-counted interner handle.
///
/// The declaration table and every `Reflector` built over it hold one of
/// these so names stay resolvable for as long as any of them is alive.
#[derive(Clone, Default, Debug)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &StringInterner {
        &self.0
    }
}

impl StringLookup for SharedInterner {
    fn lookup(&self, name: Name) -> &str {
        self.0.lookup(name)
    }
}
