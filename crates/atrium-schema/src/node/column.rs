use crate::{MAX_ATTRIBUTE_NAME_LEN, prelude::*};
use convert_case::{Case, Casing};

///
/// Column
///
/// One persisted column: a name and its primitive storage kind.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl ValidateNode for Column {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.name.is_empty() {
            err!(errs, "column name is empty");
        } else if !self.name.is_case(Case::Snake) {
            err!(errs, "column name '{}' must be snake_case", self.name);
        }

        if self.name.len() > MAX_ATTRIBUTE_NAME_LEN {
            err!(
                errs,
                "column name '{}' exceeds {MAX_ATTRIBUTE_NAME_LEN} characters",
                self.name,
            );
        }

        errs.result()
    }
}
