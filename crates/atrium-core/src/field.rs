use crate::{Dashboard, DashboardRegistry, FieldKind, RenderContext, RenderError};
use atrium_schema::types::Cardinality;
use serde_json::Value;
use std::fmt;

///
/// PartialId
///
/// Identifier of the view partial that renders a field:
/// `"{context}/{slug}"`.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PartialId(String);

impl PartialId {
    #[must_use]
    pub fn new(context: RenderContext, slug: &str) -> Self {
        Self(format!("{context}/{slug}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// Field
///
/// One attribute in one render call: the attribute name, the attribute
/// value (or none), the rendering context, and the resolved kind.
/// Immutable once constructed; the view layer builds a fresh instance
/// per render and drops it afterwards.
///

#[derive(Clone, Debug)]
pub struct Field {
    attribute: String,
    value: Option<Value>,
    context: RenderContext,
    kind: FieldKind,
}

impl Field {
    #[must_use]
    pub fn new(
        attribute: impl Into<String>,
        kind: FieldKind,
        value: Option<Value>,
        context: RenderContext,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            value,
            context,
            kind,
        }
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    #[must_use]
    pub const fn context(&self) -> RenderContext {
        self.context
    }

    #[must_use]
    pub const fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Resolve the render partial for this field. Pure: depends only on
    /// the kind's slug and the rendering context.
    #[must_use]
    pub fn resolve_partial(&self) -> PartialId {
        PartialId::new(self.context, self.kind.slug())
    }

    /// Build a descriptor for an index-style listing of the related type.
    ///
    /// Only type information is consulted; the field value is never
    /// touched, so an empty or absent collection still yields a valid
    /// descriptor.
    pub fn related_listing<'a>(
        &self,
        dashboards: &'a DashboardRegistry,
    ) -> Result<ListingDescriptor<'a>, RenderError> {
        if !self.kind.is_relationship() {
            return Err(RenderError::NotARelationship {
                attribute: self.attribute.clone(),
            });
        }

        let type_name = self
            .kind
            .related_type(&self.attribute)
            .expect("relationship kinds always resolve a related type");
        let cardinality = self
            .kind
            .cardinality()
            .expect("relationship kinds always carry a cardinality");

        let dashboard =
            dashboards
                .get(&type_name)
                .ok_or_else(|| RenderError::DashboardNotFound {
                    type_name: type_name.clone(),
                })?;

        Ok(ListingDescriptor {
            type_name,
            cardinality,
            dashboard,
        })
    }
}

///
/// ListingDescriptor
///
/// Enough type information for the view layer to delegate rendering of a
/// related listing: the related type, its arity, and a handle to its
/// dashboard definition. No query is executed here.
///

#[derive(Clone, Debug)]
pub struct ListingDescriptor<'a> {
    pub type_name: String,
    pub cardinality: Cardinality,
    pub dashboard: &'a Dashboard,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dashboard;

    fn registry_with(type_name: &str) -> DashboardRegistry {
        let mut registry = DashboardRegistry::new();
        registry.insert(Dashboard::builder(type_name).build());
        registry
    }

    #[test]
    fn resolve_partial_is_pure_and_context_prefixed() {
        let show = Field::new("avatar", FieldKind::Image, None, RenderContext::Show);
        let index = Field::new("avatar", FieldKind::Image, None, RenderContext::Index);

        assert_eq!(show.resolve_partial(), show.resolve_partial());
        assert_eq!(show.resolve_partial().as_str(), "show/image");
        assert_eq!(index.resolve_partial().as_str(), "index/image");
    }

    #[test]
    fn relationship_partials_use_the_kind_slug() {
        let field = Field::new("orders", FieldKind::has_many(), None, RenderContext::Show);
        assert_eq!(field.resolve_partial().as_str(), "show/has_many");
    }

    #[test]
    fn related_listing_works_for_an_empty_collection() {
        let registry = registry_with("Order");
        let field = Field::new(
            "orders",
            FieldKind::has_many(),
            Some(serde_json::json!([])),
            RenderContext::Show,
        );

        let listing = field.related_listing(&registry).unwrap();
        assert_eq!(listing.type_name, "Order");
        assert_eq!(listing.cardinality, Cardinality::Many);
        assert_eq!(listing.dashboard.type_name(), "Order");
    }

    #[test]
    fn related_listing_ignores_a_missing_value() {
        let registry = registry_with("Profile");
        let field = Field::new("profile", FieldKind::has_one(), None, RenderContext::Show);

        assert!(field.related_listing(&registry).is_ok());
    }

    #[test]
    fn related_listing_respects_class_name_config() {
        let registry = registry_with("Person");
        let field = Field::new(
            "attendees",
            FieldKind::has_many().with_class_name("Person"),
            None,
            RenderContext::Index,
        );

        let listing = field.related_listing(&registry).unwrap();
        assert_eq!(listing.type_name, "Person");
    }

    #[test]
    fn scalar_fields_are_not_traversable() {
        let registry = registry_with("Order");
        let field = Field::new("name", FieldKind::Text, None, RenderContext::Show);

        let err = field.related_listing(&registry).unwrap_err();
        assert!(matches!(err, RenderError::NotARelationship { attribute } if attribute == "name"));
    }

    #[test]
    fn unknown_related_dashboard_is_reported() {
        let registry = DashboardRegistry::new();
        let field = Field::new("orders", FieldKind::has_many(), None, RenderContext::Show);

        let err = field.related_listing(&registry).unwrap_err();
        assert!(
            matches!(err, RenderError::DashboardNotFound { type_name } if type_name == "Order")
        );
    }
}
