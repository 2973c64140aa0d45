use crate::{Field, PartialId, RenderContext, RenderError};
use std::collections::BTreeSet;

// Slugs every stock installation ships partials for.
const BUILTIN_SLUGS: &[&str] = &[
    "belongs_to",
    "boolean",
    "date_time",
    "has_many",
    "has_one",
    "image",
    "number",
    "text",
];

///
/// PartialRegistry
///
/// The view layer's table of registered render partials. Builtin field
/// kinds are pre-registered for every context; custom kinds must be
/// registered explicitly. A field whose partial is missing is a genuine
/// configuration defect and resolves to an error naming the exact id.
///

#[derive(Clone, Debug)]
pub struct PartialRegistry {
    partials: BTreeSet<PartialId>,
}

impl PartialRegistry {
    /// An empty registry with no partials at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            partials: BTreeSet::new(),
        }
    }

    /// A registry pre-populated with every builtin kind in every context.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for slug in BUILTIN_SLUGS {
            for context in RenderContext::ALL {
                registry.register(context, slug);
            }
        }

        registry
    }

    pub fn register(&mut self, context: RenderContext, slug: &str) {
        self.partials.insert(PartialId::new(context, slug));
    }

    #[must_use]
    pub fn contains(&self, partial: &PartialId) -> bool {
        self.partials.contains(partial)
    }

    /// Resolve a field's partial, failing if the view layer never
    /// registered it.
    pub fn resolve(&self, field: &Field) -> Result<PartialId, RenderError> {
        let partial = field.resolve_partial();

        if self.contains(&partial) {
            Ok(partial)
        } else {
            Err(RenderError::PartialNotFound {
                partial: partial.to_string(),
            })
        }
    }
}

impl Default for PartialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldKind;

    #[test]
    fn builtins_resolve_in_every_context() {
        let registry = PartialRegistry::new();

        for context in RenderContext::ALL {
            for kind in [
                FieldKind::Text,
                FieldKind::Number,
                FieldKind::Boolean,
                FieldKind::DateTime,
                FieldKind::Image,
                FieldKind::belongs_to(),
                FieldKind::has_one(),
                FieldKind::has_many(),
            ] {
                let field = Field::new("attr", kind, None, context);
                assert!(registry.resolve(&field).is_ok());
            }
        }
    }

    #[test]
    fn unregistered_custom_kind_names_the_missing_partial() {
        let registry = PartialRegistry::new();
        let field = Field::new(
            "swatch",
            FieldKind::custom("color"),
            None,
            RenderContext::Show,
        );

        let err = registry.resolve(&field).unwrap_err();
        assert!(matches!(
            err,
            RenderError::PartialNotFound { partial } if partial == "show/color"
        ));
    }

    #[test]
    fn registered_custom_kind_resolves() {
        let mut registry = PartialRegistry::new();
        registry.register(RenderContext::Show, "color");

        let field = Field::new(
            "swatch",
            FieldKind::custom("color"),
            None,
            RenderContext::Show,
        );

        assert_eq!(registry.resolve(&field).unwrap().as_str(), "show/color");
    }
}
