//! Source location queries.
//!
//! Builtin types, compound types and the global scope have no
//! declaration. Under `LocationPolicy::Error` asking for their location
//! fails; under `LocationPolicy::Sentinel` all four queries agree on
//! `<builtin>:0:0`.

use mirror_ir::SourceLoc;

use crate::{Identity, LocationPolicy, Metaobject, ReflectError, Reflector};

impl<'t> Reflector<'t> {
    fn declared_at(&self, obj: Metaobject) -> Option<SourceLoc> {
        match obj.identity {
            Identity::Decl(decl) => self.table().get(decl)?.loc,
            Identity::Base { derived, index } => self.base_spec(derived, index)?.loc,
            Identity::Type(_) | Identity::GlobalScope => None,
        }
    }

    pub fn get_source_location(&self, obj: Metaobject) -> Result<SourceLoc, ReflectError> {
        self.check_owned(obj)?;
        match (self.declared_at(obj), self.options().location_policy) {
            (Some(loc), _) => Ok(loc),
            (None, LocationPolicy::Sentinel) => Ok(SourceLoc::UNKNOWN),
            (None, LocationPolicy::Error) => Err(ReflectError::NoSourceLocation {
                entity: self.describe(obj),
            }),
        }
    }

    pub fn get_source_line(&self, obj: Metaobject) -> Result<u32, ReflectError> {
        Ok(self.get_source_location(obj)?.line)
    }

    pub fn get_source_column(&self, obj: Metaobject) -> Result<u32, ReflectError> {
        Ok(self.get_source_location(obj)?.column)
    }

    pub fn get_source_file_name(&self, obj: Metaobject) -> Result<&'t str, ReflectError> {
        let loc = self.get_source_location(obj)?;
        Ok(loc.file_name(self.table().interner()))
    }
}
