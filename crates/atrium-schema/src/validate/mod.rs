//! Schema validation orchestration and shared helpers.

pub mod naming;

use crate::{
    error::ErrorTree,
    node::{Schema, ValidateNode},
};

/// Run full schema validation in a staged, deterministic order.
pub(crate) fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    // Phase 1: validate each model (structural + local invariants).
    let mut errors = validate_nodes(schema);

    // Phase 2: enforce schema-wide invariants.
    validate_global(schema, &mut errors);

    errors.result()
}

fn validate_nodes(schema: &Schema) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for model in schema.models() {
        if let Err(e) = model.validate() {
            errors.nest(&format!("model '{}'", model.name), e);
        }
    }

    errors
}

// Run global validation passes that require a full schema view.
fn validate_global(schema: &Schema, errors: &mut ErrorTree) {
    naming::validate_model_naming(schema, errors);
}
