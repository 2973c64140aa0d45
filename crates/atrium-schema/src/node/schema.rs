use crate::{Error, prelude::*, validate::validate_schema};

///
/// Schema
///
/// The read-only schema registry handed to resolution and generation.
/// Models keep their insertion order; lookups are by model name or by
/// derived type name. Constructed once by the metadata provider and
/// passed around by reference.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Schema {
    models: Vec<Model>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Insert a model, rejecting duplicate names.
    pub fn insert(&mut self, model: Model) -> Result<(), Error> {
        if self.get(&model.name).is_some() {
            return Err(Error::DuplicateModel(model.name));
        }
        self.models.push(model);

        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    #[must_use]
    pub fn get_by_type(&self, type_name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.type_name() == type_name)
    }

    #[must_use]
    pub fn contains_type(&self, type_name: &str) -> bool {
        self.get_by_type(type_name).is_some()
    }

    #[must_use]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Run full structural validation over every model.
    pub fn validate(&self) -> Result<(), Error> {
        validate_schema(self).map_err(Error::Validation)
    }
}

///
/// TESTS
///
