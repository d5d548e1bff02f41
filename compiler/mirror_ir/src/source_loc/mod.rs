//! Declaration source locations.
//!
//! Reflection reports where an entity was declared as a (file, line, column)
//! triple rather than a byte span: that is what consumers forward into their
//! own source-location types, and it survives without the source text.

use std::fmt;

use crate::{Name, StringLookup};

/// Where a declaration was written.
///
/// Lines and columns are 1-based. The all-zero value [`SourceLoc::UNKNOWN`]
/// is the sentinel for builtin and synthesized entities.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLoc {
    /// Interned file path.
    pub file: Name,
    pub line: u32,
    pub column: u32,
}

impl SourceLoc {
    /// Sentinel location for entities with no declaration.
    pub const UNKNOWN: SourceLoc = SourceLoc {
        file: Name::EMPTY,
        line: 0,
        column: 0,
    };

    /// File name reported for [`SourceLoc::UNKNOWN`].
    pub const UNKNOWN_FILE: &'static str = "<builtin>";

    #[inline]
    pub const fn new(file: Name, line: u32, column: u32) -> Self {
        SourceLoc { file, line, column }
    }

    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.file.is_empty() && self.line == 0 && self.column == 0
    }

    /// Resolve the file path, using [`SourceLoc::UNKNOWN_FILE`] for the sentinel.
    pub fn file_name<'a, I: StringLookup + ?Sized>(&self, interner: &'a I) -> &'a str {
        if self.file.is_empty() {
            Self::UNKNOWN_FILE
        } else {
            interner.lookup(self.file)
        }
    }

    /// Render as `path:line:column`.
    pub fn display<'a, I: StringLookup + ?Sized>(&self, interner: &'a I) -> DisplayLoc<'a> {
        DisplayLoc {
            file: self.file_name(interner),
            line: self.line,
            column: self.column,
        }
    }
}

impl fmt::Debug for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            write!(f, "SourceLoc(<unknown>)")
        } else {
            write!(f, "SourceLoc({:?} {}:{})", self.file, self.line, self.column)
        }
    }
}

/// A [`SourceLoc`] with its file name resolved, ready for `Display`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisplayLoc<'a> {
    pub file: &'a str,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for DisplayLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
