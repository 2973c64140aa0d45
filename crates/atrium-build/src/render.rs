//! Artifact templating, strictly separate from resolution: this module
//! only serializes already-resolved attribute data into source text.
//! Output is deterministic for identical input so regeneration is
//! byte-identical and diff-friendly.

use crate::resolve::ResolvedAttribute;
use atrium_core::{FieldKind, RelationConfig};
use atrium_schema::{naming, node::Model};
use std::fmt::Write;

// Columns the form context never edits.
const SYSTEM_MANAGED: &[&str] = &["id", "created_at", "updated_at"];

const HEADER: &str = "//! Generated by atrium. Do not edit by hand; regenerate instead.\n";

/// Render the dashboard definition artifact for a model.
#[must_use]
pub(crate) fn dashboard_artifact(
    model: &Model,
    attributes: &[ResolvedAttribute],
    table_limit: usize,
) -> String {
    let type_name = model.type_name();

    let all: Vec<&str> = attributes.iter().map(|a| a.name.as_str()).collect();
    let table: Vec<&str> = all.iter().copied().take(table_limit).collect();
    let form: Vec<&str> = all
        .iter()
        .copied()
        .filter(|name| !SYSTEM_MANAGED.contains(name))
        .collect();

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str("use atrium_core::{Dashboard, FieldKind};\n\n");
    let _ = writeln!(out, "/// Dashboard definition for `{type_name}`.");
    out.push_str("#[must_use]\n");
    let _ = writeln!(out, "pub fn {}_dashboard() -> Dashboard {{", model.name);
    let _ = writeln!(out, "    Dashboard::builder({type_name:?})");

    for attribute in attributes {
        let _ = writeln!(
            out,
            "        .attribute({:?}, {})",
            attribute.name,
            kind_expr(&attribute.kind),
        );
    }

    let _ = writeln!(out, "        .table_attributes(&{})", name_list(&table));
    let _ = writeln!(out, "        .show_page_attributes(&{})", name_list(&all));
    let _ = writeln!(out, "        .form_attributes(&{})", name_list(&form));
    out.push_str("        .build()\n}\n");

    out
}

/// Render the resource controller artifact for a model.
#[must_use]
pub(crate) fn controller_artifact(model: &Model) -> String {
    let type_name = model.type_name();
    let resource = naming::pluralize(&model.name);
    let controller = format!("{}Controller", naming::type_name(&resource));

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str("use atrium_core::ResourceController;\n\n");
    let _ = writeln!(out, "/// Admin resource controller for `{type_name}`.");
    let _ = writeln!(out, "pub struct {controller};\n");
    let _ = writeln!(out, "impl ResourceController for {controller} {{");
    out.push_str("    fn resource_name() -> &'static str {\n");
    let _ = writeln!(out, "        {resource:?}");
    out.push_str("    }\n\n");
    out.push_str("    fn model_type() -> &'static str {\n");
    let _ = writeln!(out, "        {type_name:?}");
    out.push_str("    }\n}\n");

    out
}

// Quoted, escaped attribute-name list: ["id", "name"]
fn name_list(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("{name:?}")).collect();

    format!("[{}]", quoted.join(", "))
}

// The FieldKind expression an artifact constructs for one attribute.
fn kind_expr(kind: &FieldKind) -> String {
    match kind {
        FieldKind::BelongsTo(config) => relation_expr("belongs_to", config),
        FieldKind::Boolean => "FieldKind::Boolean".to_string(),
        FieldKind::Custom(custom) => format!("FieldKind::custom({:?})", custom.slug),
        FieldKind::DateTime => "FieldKind::DateTime".to_string(),
        FieldKind::HasMany(config) => relation_expr("has_many", config),
        FieldKind::HasOne(config) => relation_expr("has_one", config),
        FieldKind::Image => "FieldKind::Image".to_string(),
        FieldKind::Number => "FieldKind::Number".to_string(),
        FieldKind::Text => "FieldKind::Text".to_string(),
    }
}

fn relation_expr(constructor: &str, config: &RelationConfig) -> String {
    match &config.class_name {
        Some(class_name) => {
            format!("FieldKind::{constructor}().with_class_name({class_name:?})")
        }
        None => format!("FieldKind::{constructor}()"),
    }
}

///
/// TESTS
///
