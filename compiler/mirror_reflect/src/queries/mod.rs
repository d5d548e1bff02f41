//! Query engine: metafunctions on single metaobjects.
//!
//! Each metafunction checks its concept first and fails with
//! `ConceptViolation` otherwise. Results are pure functions of the
//! metaobject and the table.

mod entity;
mod location;
mod names;
