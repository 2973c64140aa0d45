//! Field resolution: map one model's schema metadata to a complete
//! attribute assignment with zero manual intervention.
//!
//! Resolution is a pure function of (model, schema registry). It never
//! fails: malformed or partial metadata degrades to the closest safe
//! default so generation always produces a usable artifact.

use atrium_core::{FieldKind, RelationConfig};
use atrium_schema::{
    naming,
    node::{Association, Model, Schema},
    types::{AssociationKind, ColumnKind},
};
use tracing::{debug, info};

///
/// ResolvedAttribute
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedAttribute {
    pub name: String,
    pub kind: FieldKind,
}

/// Resolve every attribute of a model: columns first, then associations,
/// each group in declaration order.
#[must_use]
pub fn resolve_attributes(model: &Model, schema: &Schema) -> Vec<ResolvedAttribute> {
    let mut attributes = Vec::with_capacity(model.columns.len() + model.associations.len());

    for column in &model.columns {
        attributes.push(ResolvedAttribute {
            name: column.name.clone(),
            kind: scalar_kind(column.kind),
        });
    }

    for association in &model.associations {
        attributes.push(ResolvedAttribute {
            name: association.name.clone(),
            kind: association_kind(model, association, schema),
        });
    }

    attributes
}

/// Storage-kind to field-kind mapping for plain columns.
#[must_use]
pub const fn scalar_kind(kind: ColumnKind) -> FieldKind {
    match kind {
        ColumnKind::Boolean => FieldKind::Boolean,
        ColumnKind::Decimal | ColumnKind::Float | ColumnKind::Integer => FieldKind::Number,
        ColumnKind::DateTime | ColumnKind::Timestamp => FieldKind::DateTime,
        // everything without a dedicated widget renders as plain text
        ColumnKind::Binary | ColumnKind::Date | ColumnKind::Text | ColumnKind::Time => {
            FieldKind::Text
        }
    }
}

// Resolve one association to a relationship field kind, deciding whether
// the emitted field carries an explicit class-name option.
fn association_kind(model: &Model, association: &Association, schema: &Schema) -> FieldKind {
    let fallback = naming::type_name_for(&association.name);

    let (target, explicit) = match &association.class_name {
        Some(class_name) => (class_name.clone(), true),
        None if association.is_through() => match through_target(model, association, schema) {
            Some(target) => (target, false),
            None => {
                debug!(
                    association = %association.name,
                    "through chain did not resolve; deriving target from the association name"
                );
                (fallback.clone(), false)
            }
        },
        None => (fallback.clone(), false),
    };

    let class_name = if target == fallback {
        // the runtime derives this name by convention; no option needed
        None
    } else if explicit || schema.contains_type(&target) {
        Some(target)
    } else {
        info!(
            association = %association.name,
            %target,
            "unresolved association target; deferring to naming convention"
        );
        None
    };

    let config = RelationConfig { class_name };

    match association.kind {
        AssociationKind::BelongsTo => FieldKind::BelongsTo(config),
        AssociationKind::HasMany => FieldKind::HasMany(config),
        AssociationKind::HasOne => FieldKind::HasOne(config),
    }
}

// Follow a has-many-through chain exactly one hop: the `through`
// association on this model, then the `source` association (or the outer
// name, singularized if needed) on the intermediate's target model.
// Every miss returns None and the caller falls back to name derivation.
fn through_target(model: &Model, association: &Association, schema: &Schema) -> Option<String> {
    let through_name = association.through.as_deref()?;
    let through = model.get_association(through_name)?;

    // an intermediate that is itself indirect is not followed
    if through.is_through() && through.class_name.is_none() {
        return None;
    }

    let intermediate_type = through
        .class_name
        .clone()
        .unwrap_or_else(|| naming::type_name_for(&through.name));
    let intermediate = schema.get_by_type(&intermediate_type)?;

    let source_name = association.source.as_deref().unwrap_or(&association.name);
    let source = intermediate
        .get_association(source_name)
        .or_else(|| intermediate.get_association(&naming::singularize(source_name)))?;

    Some(
        source
            .class_name
            .clone()
            .unwrap_or_else(|| naming::type_name_for(&source.name)),
    )
}

///
/// TESTS
///
