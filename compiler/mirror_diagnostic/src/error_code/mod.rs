//! Error codes for reflection diagnostics.
//!
//! Codes are `E####`, the first digit naming the phase that raised them:
//! - E7xxx: reflection queries (misuse of the metafunction surface)
//! - E8xxx: declaration table construction (host builder misuse)
//! - E9xxx: internal errors

use std::fmt;
use std::str::FromStr;

/// Error codes for all Mirror diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorCode {
    // Reflection Errors (E7xxx)
    /// Query applied to a metaobject that does not satisfy its concept
    E7001,
    /// Construct cannot be reflected (function, uninstantiated template)
    E7002,
    /// Reflected name does not resolve to a declaration
    E7003,
    /// Object sequence index out of range
    E7004,
    /// Entity has no source location
    E7005,
    /// Full member listing requested without full access to the record
    E7006,
    /// Object sequence does not fit the requested shape
    E7007,

    // Declaration Table Errors (E8xxx)
    /// Duplicate declaration in the same scope
    E8001,
    /// Declaration placed in something that is not a scope or record
    E8002,
    /// Base specifier does not name a class
    E8003,
    /// Unrecognized builtin type spelling
    E8004,
    /// Declaration id does not belong to this table
    E8005,
    /// Class derives from itself
    E8006,

    // Internal Errors (E9xxx)
    /// Internal error
    E9001,
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// Every code, in numeric order.
    ///
    /// `as_str` and `description` are exhaustive matches; this list is what
    /// `FromStr` searches, and `all_codes_round_trip` checks it stays complete.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E7001,
        ErrorCode::E7002,
        ErrorCode::E7003,
        ErrorCode::E7004,
        ErrorCode::E7005,
        ErrorCode::E7006,
        ErrorCode::E7007,
        ErrorCode::E8001,
        ErrorCode::E8002,
        ErrorCode::E8003,
        ErrorCode::E8004,
        ErrorCode::E8005,
        ErrorCode::E8006,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E7001 => "E7001",
            ErrorCode::E7002 => "E7002",
            ErrorCode::E7003 => "E7003",
            ErrorCode::E7004 => "E7004",
            ErrorCode::E7005 => "E7005",
            ErrorCode::E7006 => "E7006",
            ErrorCode::E7007 => "E7007",
            ErrorCode::E8001 => "E8001",
            ErrorCode::E8002 => "E8002",
            ErrorCode::E8003 => "E8003",
            ErrorCode::E8004 => "E8004",
            ErrorCode::E8005 => "E8005",
            ErrorCode::E8006 => "E8006",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// One-line explanation, for `--explain` style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E7001 => "metafunction applied to a metaobject that does not satisfy its concept",
            ErrorCode::E7002 => "construct cannot be reflected",
            ErrorCode::E7003 => "reflected name does not resolve to a declaration",
            ErrorCode::E7004 => "object sequence index out of range",
            ErrorCode::E7005 => "reflected entity has no source location",
            ErrorCode::E7006 => "full member listing requires full access to the record",
            ErrorCode::E7007 => "object sequence cannot be unpacked into the requested shape",
            ErrorCode::E8001 => "duplicate declaration in the same scope",
            ErrorCode::E8002 => "declaration placed outside a scope or record",
            ErrorCode::E8003 => "base specifier does not name a class",
            ErrorCode::E8004 => "unrecognized builtin type spelling",
            ErrorCode::E8005 => "declaration does not belong to this table",
            ErrorCode::E8006 => "class cannot derive from itself",
            ErrorCode::E9001 => "internal error",
            ErrorCode::E9002 => "too many errors",
        }
    }

    /// Raised by a reflection query (E7xxx).
    pub fn is_reflection_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E7001
                | ErrorCode::E7002
                | ErrorCode::E7003
                | ErrorCode::E7004
                | ErrorCode::E7005
                | ErrorCode::E7006
                | ErrorCode::E7007
        )
    }

    /// Raised while building the declaration table (E8xxx).
    pub fn is_declaration_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E8001
                | ErrorCode::E8002
                | ErrorCode::E8003
                | ErrorCode::E8004
                | ErrorCode::E8005
                | ErrorCode::E8006
        )
    }

    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse of `"E7001"` and friends.
impl FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}
