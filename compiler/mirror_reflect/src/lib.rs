//! Compile-time reflection for Mirror.
//!
//! Program entities (types, records, namespaces, enums, variables, aliases,
//! bases) are reflected into [`Metaobject`]s: small immutable values that
//! metafunctions on a [`Reflector`] query. What a metafunction accepts is
//! decided by [`Concept`] membership, which depends only on the
//! metaobject's [`MetaKind`]. Plural answers come back as
//! [`ObjectSequence`]s in declaration order.
//!
//! ```text
//! let r = Reflector::new(&table);
//! let point = r.reflect("geo::Point")?;
//! for member in &r.get_public_data_members(point)? {
//!     println!("{}", r.get_base_name(member)?);
//! }
//! ```
//!
//! Member enumeration respects encapsulation: only code with full access
//! to a record may list its private members.
//!
//! # Debug Environment Variables
//!
//! - `RUST_LOG=mirror_reflect=debug`: reflections and listings.
//! - `RUST_LOG=mirror_reflect=trace`: per-member filter decisions and
//!   alias hops.

mod concept;
mod error;
mod members;
mod metaobject;
mod options;
mod queries;
mod reflector;
mod sequence;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

pub use concept::{satisfies, Concept, ConceptSet};
pub use error::{ForeignHandle, ReflectError, UnreflectableKind};
pub use metaobject::{Construct, Identity, MetaKind, Metaobject};
pub use options::{DisplayStyle, LocationPolicy, ReflectOptions};
pub use reflector::Reflector;
pub use sequence::{ObjectSequence, Unpack};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
