use atrium_schema::{naming, types::Cardinality};
use serde::{Deserialize, Serialize};

///
/// FieldKind
///
/// The closed set of field behaviors an attribute can resolve to, plus
/// `Custom` for registered extensions. Relationship variants carry their
/// configuration; a configured class name always wins over inference.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    BelongsTo(RelationConfig),
    Boolean,
    Custom(CustomKind),
    DateTime,
    HasMany(RelationConfig),
    HasOne(RelationConfig),
    Image,
    Number,
    Text,
}

impl FieldKind {
    #[must_use]
    pub const fn belongs_to() -> Self {
        Self::BelongsTo(RelationConfig::new())
    }

    #[must_use]
    pub const fn has_one() -> Self {
        Self::HasOne(RelationConfig::new())
    }

    #[must_use]
    pub const fn has_many() -> Self {
        Self::HasMany(RelationConfig::new())
    }

    #[must_use]
    pub fn custom(slug: impl Into<String>) -> Self {
        Self::Custom(CustomKind { slug: slug.into() })
    }

    /// Configure the related type name. No effect on scalar kinds.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        if let Self::BelongsTo(config) | Self::HasMany(config) | Self::HasOne(config) = &mut self {
            config.class_name = Some(class_name.into());
        }

        self
    }

    /// Lowercase snake identifier used as the partial-id suffix.
    #[must_use]
    pub fn slug(&self) -> &str {
        match self {
            Self::BelongsTo(_) => "belongs_to",
            Self::Boolean => "boolean",
            Self::Custom(custom) => &custom.slug,
            Self::DateTime => "date_time",
            Self::HasMany(_) => "has_many",
            Self::HasOne(_) => "has_one",
            Self::Image => "image",
            Self::Number => "number",
            Self::Text => "text",
        }
    }

    #[must_use]
    pub const fn is_relationship(&self) -> bool {
        matches!(
            self,
            Self::BelongsTo(_) | Self::HasMany(_) | Self::HasOne(_)
        )
    }

    #[must_use]
    pub const fn cardinality(&self) -> Option<Cardinality> {
        match self {
            Self::BelongsTo(_) => Some(Cardinality::One),
            Self::HasOne(_) => Some(Cardinality::Opt),
            Self::HasMany(_) => Some(Cardinality::Many),
            _ => None,
        }
    }

    #[must_use]
    pub const fn relation_config(&self) -> Option<&RelationConfig> {
        match self {
            Self::BelongsTo(config) | Self::HasMany(config) | Self::HasOne(config) => Some(config),
            _ => None,
        }
    }

    /// Related type name for a relationship kind: the configured class
    /// name if present, otherwise derived from the attribute name by
    /// naming convention.
    #[must_use]
    pub fn related_type(&self, attribute: &str) -> Option<String> {
        let config = self.relation_config()?;

        Some(
            config
                .class_name
                .clone()
                .unwrap_or_else(|| naming::type_name_for(attribute)),
        )
    }
}

///
/// RelationConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RelationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl RelationConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self { class_name: None }
    }
}

///
/// CustomKind
///
/// A registered extension variant, identified by its partial-id slug.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CustomKind {
    pub slug: String,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_snake_case_variant_names() {
        assert_eq!(FieldKind::Text.slug(), "text");
        assert_eq!(FieldKind::DateTime.slug(), "date_time");
        assert_eq!(FieldKind::has_many().slug(), "has_many");
        assert_eq!(FieldKind::custom("color").slug(), "color");
    }

    #[test]
    fn class_name_wins_over_derivation() {
        let kind = FieldKind::has_many().with_class_name("Person");
        assert_eq!(kind.related_type("attendees").unwrap(), "Person");
    }

    #[test]
    fn related_type_derives_from_attribute_name() {
        assert_eq!(
            FieldKind::has_many().related_type("orders").unwrap(),
            "Order"
        );
        assert_eq!(
            FieldKind::belongs_to().related_type("customer").unwrap(),
            "Customer"
        );
    }

    #[test]
    fn with_class_name_is_inert_on_scalars() {
        assert_eq!(FieldKind::Text.with_class_name("Order"), FieldKind::Text);
        assert!(FieldKind::Boolean.related_type("flag").is_none());
    }

    #[test]
    fn cardinality_by_variant() {
        assert_eq!(
            FieldKind::belongs_to().cardinality(),
            Some(Cardinality::One)
        );
        assert_eq!(FieldKind::has_one().cardinality(), Some(Cardinality::Opt));
        assert_eq!(FieldKind::has_many().cardinality(), Some(Cardinality::Many));
        assert_eq!(FieldKind::Image.cardinality(), None);
    }
}
