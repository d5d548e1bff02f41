//! Display names and base names.

use mirror_sema::spelling::{decl_spelling, type_spelling};

use crate::{Concept, DisplayStyle, Identity, Metaobject, ReflectError, Reflector};

impl Reflector<'_> {
    /// Human-oriented name keeping everything that distinguishes entities
    /// with the same base name: enclosing scopes (per the display style),
    /// alias spellings, cv-qualifiers, declarators, template arguments.
    pub fn get_display_name(&self, obj: Metaobject) -> Result<String, ReflectError> {
        obj.require(Concept::Named, "get_display_name")?;
        self.check_owned(obj)?;
        let qualified = self.options().display_style == DisplayStyle::Qualified;
        let table = self.table();
        Ok(match obj.identity {
            Identity::Type(canonical) => {
                type_spelling(table, obj.spelling.unwrap_or(canonical), qualified)
            }
            Identity::Decl(decl) => decl_spelling(table, decl, qualified),
            Identity::GlobalScope | Identity::Base { .. } => String::new(),
        })
    }

    /// The bare name of the entity.
    ///
    /// For types, qualifiers, declarators and alias sugar are dropped and
    /// builtin abbreviations elaborated (`unsigned` is `unsigned int`).
    /// Template instantiations report the template name. An alias reports
    /// its own name, not its target's. Anonymous entities have an empty
    /// base name.
    pub fn get_base_name(&self, obj: Metaobject) -> Result<String, ReflectError> {
        obj.require(Concept::Named, "get_base_name")?;
        self.check_owned(obj)?;
        let table = self.table();
        Ok(match obj.identity {
            Identity::Type(canonical) => {
                let core = table.types().core(canonical);
                match table.types().named_decl(core) {
                    Some(decl) => table.name_str(decl).to_owned(),
                    None => type_spelling(table, core, false),
                }
            }
            Identity::Decl(decl) => table.name_str(decl).to_owned(),
            Identity::GlobalScope | Identity::Base { .. } => String::new(),
        })
    }

    pub fn is_anonymous(&self, obj: Metaobject) -> Result<bool, ReflectError> {
        obj.require(Concept::Named, "is_anonymous")?;
        self.check_owned(obj)?;
        Ok(match obj.identity {
            Identity::Decl(decl) => self.table().decl(decl).is_anonymous(),
            Identity::Type(_) | Identity::GlobalScope | Identity::Base { .. } => false,
        })
    }

    /// Short description of any metaobject, for error messages.
    pub(crate) fn describe(&self, obj: Metaobject) -> String {
        if self.check_owned(obj).is_err() {
            return obj.kind.to_string();
        }
        match obj.identity {
            Identity::GlobalScope => "the global scope".to_owned(),
            Identity::Base { derived, index } => {
                format!(
                    "base #{index} of {}",
                    decl_spelling(self.table(), derived, true)
                )
            }
            Identity::Decl(_) | Identity::Type(_) => self
                .get_display_name(obj)
                .unwrap_or_else(|_| obj.kind.to_string()),
        }
    }
}
