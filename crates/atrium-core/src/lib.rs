//! Runtime field and dashboard layer.
//!
//! Everything here is read-only after construction: `Dashboard` and the
//! registries are built once at startup, and `Field` instances are created
//! fresh per render call, so the whole surface is safe to share across
//! concurrent render requests without synchronization.

mod context;
mod controller;
mod dashboard;
mod error;
mod field;
mod kind;
mod partials;
mod registry;

pub use context::RenderContext;
pub use controller::ResourceController;
pub use dashboard::{Dashboard, DashboardBuilder};
pub use error::RenderError;
pub use field::{Field, ListingDescriptor, PartialId};
pub use kind::{CustomKind, FieldKind, RelationConfig};
pub use partials::PartialRegistry;
pub use registry::DashboardRegistry;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Dashboard, DashboardRegistry, Field, FieldKind, PartialRegistry, RenderContext,
        RenderError, ResourceController,
    };
    pub use atrium_schema::types::Cardinality;
}
