use crate::{err, error::ErrorTree, node::Schema};
use std::collections::BTreeMap;

/// Distinct model names must also map to distinct PascalCase type names;
/// a collision would make generated artifacts ambiguous.
pub fn validate_model_naming(schema: &Schema, errs: &mut ErrorTree) {
    let mut by_type: BTreeMap<String, String> = BTreeMap::new();

    for model in schema.models() {
        let type_name = model.type_name();

        if let Some(prev) = by_type.insert(type_name.clone(), model.name.clone()) {
            err!(
                errs,
                "models '{prev}' and '{}' both resolve to type '{type_name}'",
                model.name,
            );
        }
    }
}

///
/// TESTS
///
