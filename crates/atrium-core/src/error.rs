use thiserror::Error as ThisError;

///
/// RenderError
///
/// Runtime failures surfaced to the request cycle. None of these are
/// swallowed: each indicates a configuration or code defect in a
/// dashboard definition or the view layer's partial table.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum RenderError {
    #[error("no dashboard registered for type '{type_name}'")]
    DashboardNotFound { type_name: String },

    #[error("dashboard '{dashboard}' lists attribute '{attribute}' missing from attribute_types")]
    MalformedAttributeList { dashboard: String, attribute: String },

    #[error("attribute '{attribute}' is not a relationship field")]
    NotARelationship { attribute: String },

    #[error("no render partial registered for '{partial}'")]
    PartialNotFound { partial: String },
}
