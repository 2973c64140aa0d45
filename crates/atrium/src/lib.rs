//! Atrium: schema-driven admin dashboard generation.
//!
//! ## Crate layout
//! - `schema`: model/column/association metadata, registry, validation.
//! - `core`: runtime field kinds, dashboards, registries, render errors.
//! - `build`: field resolution and source artifact generation.
//!
//! The `prelude` module mirrors the surface a host application touches:
//! declaring schema metadata, generating artifacts, and serving the
//! resulting dashboards.

pub use atrium_build as build;
pub use atrium_core as core;
pub use atrium_schema as schema;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::build::{DashboardGenerator, GeneratorConfig, TABLE_ATTRIBUTE_LIMIT};
    pub use crate::core::{
        Dashboard, DashboardRegistry, Field, FieldKind, PartialRegistry, RenderContext,
        RenderError, ResourceController,
    };
    pub use crate::schema::{
        node::{Association, Column, Model, Schema},
        types::{AssociationKind, Cardinality, ColumnKind},
    };
}

///
/// TESTS
///
