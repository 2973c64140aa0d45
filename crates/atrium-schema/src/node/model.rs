use crate::{MAX_MODEL_NAME_LEN, naming, prelude::*};
use convert_case::{Case, Casing};
use std::collections::BTreeSet;

///
/// Model
///
/// Schema metadata for one data model: the snake_case singular name,
/// ordered persisted columns, and ordered declared associations.
/// Declaration order is preserved verbatim; resolution and generation
/// depend on it for deterministic output.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Model {
    pub name: String,

    #[serde(default)]
    pub columns: Vec<Column>,

    #[serde(default)]
    pub associations: Vec<Association>,
}

impl Model {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            associations: Vec::new(),
        }
    }

    #[must_use]
    pub fn column(mut self, name: impl Into<String>, kind: ColumnKind) -> Self {
        self.columns.push(Column::new(name, kind));
        self
    }

    #[must_use]
    pub fn association(mut self, association: Association) -> Self {
        self.associations.push(association);
        self
    }

    /// PascalCase type name derived from the model name.
    #[must_use]
    pub fn type_name(&self) -> String {
        naming::type_name(&self.name)
    }

    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn get_association(&self, name: &str) -> Option<&Association> {
        self.associations.iter().find(|a| a.name == name)
    }
}

impl ValidateNode for Model {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.name.is_empty() {
            err!(errs, "model name is empty");
        } else if !self.name.is_case(Case::Snake) {
            err!(errs, "model name '{}' must be snake_case", self.name);
        }

        if self.name.len() > MAX_MODEL_NAME_LEN {
            err!(
                errs,
                "model name '{}' exceeds {MAX_MODEL_NAME_LEN} characters",
                self.name,
            );
        }

        // attribute names must be unique across columns and associations
        let mut seen = BTreeSet::new();
        for name in self
            .columns
            .iter()
            .map(|c| &c.name)
            .chain(self.associations.iter().map(|a| &a.name))
        {
            if !seen.insert(name.clone()) {
                err!(errs, "duplicate attribute name '{name}'");
            }
        }

        for column in &self.columns {
            if let Err(e) = column.validate() {
                errs.nest(&format!("column '{}'", column.name), e);
            }
        }

        for association in &self.associations {
            if let Err(e) = association.validate() {
                errs.nest(&format!("association '{}'", association.name), e);
            }
        }

        errs.result()
    }
}

///
/// TESTS
///
