//! Naming conventions shared by schema identifiers and generated code.
//!
//! Model names are snake_case singular ("line_item"); type names are
//! PascalCase ("LineItem"); association names are snake_case and may be
//! plural ("line_items"). The singular/plural rules are English
//! heuristics that cover conventional schema vocabulary; they are not a
//! full inflection engine.

use convert_case::{Case, Casing};

/// Convert a snake_case model name to its PascalCase type name.
/// "line_item" -> "LineItem"
#[must_use]
pub fn type_name(name: &str) -> String {
    name.to_case(Case::Pascal)
}

/// Derive a type name from an attribute name: singularized, PascalCase.
/// "orders" -> "Order", "addresses" -> "Address"
#[must_use]
pub fn type_name_for(attribute: &str) -> String {
    singularize(attribute).to_case(Case::Pascal)
}

/// Reduce a plural identifier to its singular form.
///
/// Identifiers ending in "ss" ("address") or "us" ("status") are left
/// alone so already-singular names survive a round trip.
#[must_use]
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        return format!("{stem}y");
    }

    if name.ends_with("ss") || name.ends_with("us") {
        return name.to_string();
    }

    // strip "es" only when the stem demanded it at pluralization time,
    // so "purchases" loses one letter and "addresses" loses two
    if let Some(stem) = name.strip_suffix("es")
        && ["ss", "us", "x", "z", "ch", "sh"]
            .iter()
            .any(|ending| stem.ends_with(ending))
    {
        return stem.to_string();
    }

    name.strip_suffix('s')
        .map_or_else(|| name.to_string(), ToString::to_string)
}

/// Expand a singular identifier to its plural form.
/// "customer" -> "customers", "company" -> "companies", "box" -> "boxes"
#[must_use]
pub fn pluralize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('y')
        && !stem.ends_with(['a', 'e', 'i', 'o', 'u'])
        && !stem.is_empty()
    {
        return format!("{stem}ies");
    }

    for suffix in ["ch", "sh", "s", "x", "z"] {
        if name.ends_with(suffix) {
            return format!("{name}es");
        }
    }

    format!("{name}s")
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_name_is_pascal() {
        assert_eq!(type_name("customer"), "Customer");
        assert_eq!(type_name("line_item"), "LineItem");
    }

    #[test]
    fn type_name_for_singularizes() {
        assert_eq!(type_name_for("orders"), "Order");
        assert_eq!(type_name_for("line_items"), "LineItem");
        assert_eq!(type_name_for("companies"), "Company");
        assert_eq!(type_name_for("addresses"), "Address");
    }

    #[test]
    fn singularize_leaves_singulars_alone() {
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("address"), "address");
        assert_eq!(singularize("person"), "person");
    }

    #[test]
    fn singularize_strips_es_only_where_pluralization_added_it() {
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("purchases"), "purchase");
        assert_eq!(singularize("houses"), "house");
    }

    #[test]
    fn pluralize_common_forms() {
        assert_eq!(pluralize("customer"), "customers");
        assert_eq!(pluralize("company"), "companies");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("line_item"), "line_items");
    }
}
