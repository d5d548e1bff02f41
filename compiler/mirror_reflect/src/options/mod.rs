//! Reflector configuration.

/// How [`get_display_name`](crate::Reflector::get_display_name) renders names.
///
/// Both styles keep alias spellings, cv-qualifiers, declarators and full
/// template arguments; they differ only in whether enclosing scopes are
/// written out.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum DisplayStyle {
    /// `geo::Shape::Point`, `const geo::Point*`.
    #[default]
    Qualified,
    /// `Point`, `const Point*`. Template arguments stay qualified.
    Unqualified,
}

/// What location queries return for entities with no declaration.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LocationPolicy {
    /// Fail with `NoSourceLocation`.
    #[default]
    Error,
    /// Report `SourceLoc::UNKNOWN`: file `<builtin>`, line 0, column 0.
    Sentinel,
}

/// Options for a [`Reflector`](crate::Reflector).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ReflectOptions {
    pub display_style: DisplayStyle,
    pub location_policy: LocationPolicy,
}

impl ReflectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_display_style(mut self, style: DisplayStyle) -> Self {
        self.display_style = style;
        self
    }

    #[must_use]
    pub fn with_location_policy(mut self, policy: LocationPolicy) -> Self {
        self.location_policy = policy;
        self
    }
}
