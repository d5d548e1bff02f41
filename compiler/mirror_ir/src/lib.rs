//! Mirror IR - shared vocabulary types for the reflection facility.
//!
//! This crate holds the small, `Copy` handles every other Mirror crate
//! passes around:
//! - `Name` for interned identifiers (and the `StringInterner` behind them)
//! - `SourceLoc` for declaration locations (file, line, column)
//! - `DeclId` / `TypeId` arena indices into the host declaration table
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`, types `TypeId(u32)`
//! - **Index, Don't Point**: declarations reference each other through
//!   `DeclId`, never through owning references, so cyclic structures
//!   (a class naming itself through a member pointer) need no special care
//! - **Cheap Equality**: every handle compares in O(1)

/// Compile-time assertion that a type has a specific size.
///
/// Used to keep the handle types small; metaobjects embed several of them.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod ids;
mod interner;
mod name;
mod source_loc;

pub use ids::{DeclId, TypeId};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use source_loc::{DisplayLoc, SourceLoc};

static_assert_size!(Name, 4);
static_assert_size!(DeclId, 4);
static_assert_size!(TypeId, 4);
static_assert_size!(SourceLoc, 12);
