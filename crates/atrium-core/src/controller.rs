use crate::{Dashboard, DashboardRegistry, RenderError};

///
/// ResourceController
///
/// The contract a generated resource controller implements: identify
/// which model type and dashboard definition to bind. HTTP verbs,
/// routing, and action semantics belong to the host framework layered on
/// top; nothing here speaks HTTP.
///

pub trait ResourceController {
    /// Snake-case plural resource identifier, used as the routing segment.
    fn resource_name() -> &'static str;

    /// PascalCase type name of the administered model.
    fn model_type() -> &'static str;

    /// Dashboard definition handle for this resource.
    fn dashboard(registry: &DashboardRegistry) -> Result<&Dashboard, RenderError> {
        registry
            .get(Self::model_type())
            .ok_or_else(|| RenderError::DashboardNotFound {
                type_name: Self::model_type().to_string(),
            })
    }
}

///
/// TESTS
///
