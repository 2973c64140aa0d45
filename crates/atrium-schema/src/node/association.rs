use crate::{MAX_ATTRIBUTE_NAME_LEN, prelude::*};
use convert_case::{Case, Casing};

///
/// Association
///
/// One declared relationship on a model. `class_name` is an explicit
/// target-type override and always wins over inference. A `through` name
/// makes the association indirect; `source` optionally renames the hop
/// looked up on the intermediate target and is meaningless without
/// `through`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Association {
    pub name: String,
    pub kind: AssociationKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub through: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Association {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: AssociationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            class_name: None,
            foreign_key: None,
            through: None,
            source: None,
        }
    }

    #[must_use]
    pub fn belongs_to(name: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::BelongsTo)
    }

    #[must_use]
    pub fn has_one(name: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::HasOne)
    }

    #[must_use]
    pub fn has_many(name: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::HasMany)
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn with_foreign_key(mut self, foreign_key: impl Into<String>) -> Self {
        self.foreign_key = Some(foreign_key.into());
        self
    }

    #[must_use]
    pub fn with_through(mut self, through: impl Into<String>) -> Self {
        self.through = Some(through.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        self.kind.cardinality()
    }

    #[must_use]
    pub const fn is_through(&self) -> bool {
        self.through.is_some()
    }
}

impl ValidateNode for Association {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.name.is_empty() {
            err!(errs, "association name is empty");
        } else if !self.name.is_case(Case::Snake) {
            err!(errs, "association name '{}' must be snake_case", self.name);
        }

        if self.name.len() > MAX_ATTRIBUTE_NAME_LEN {
            err!(
                errs,
                "association name '{}' exceeds {MAX_ATTRIBUTE_NAME_LEN} characters",
                self.name,
            );
        }

        if self.source.is_some() && self.through.is_none() {
            err!(
                errs,
                "association '{}' declares a source without a through",
                self.name,
            );
        }

        if self.through.is_some() && self.kind != AssociationKind::HasMany {
            err!(
                errs,
                "association '{}' is {} and cannot be indirect",
                self.name,
                self.kind,
            );
        }

        errs.result()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_without_through_is_rejected() {
        let assoc = Association::has_many("attendees").with_source("person");

        let err = assoc.validate().unwrap_err();
        assert!(err.to_string().contains("source without a through"));
    }

    #[test]
    fn through_on_belongs_to_is_rejected() {
        let assoc = Association::belongs_to("person").with_through("tickets");

        assert!(assoc.validate().is_err());
    }

    #[test]
    fn well_formed_through_association_passes() {
        let assoc = Association::has_many("attendees")
            .with_through("tickets")
            .with_source("person");

        assert!(assoc.validate().is_ok());
    }
}
