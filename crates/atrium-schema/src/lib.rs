pub mod error;
pub mod naming;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for model schema identifiers.
pub const MAX_MODEL_NAME_LEN: usize = 64;

/// Maximum length for column and association schema identifiers.
pub const MAX_ATTRIBUTE_NAME_LEN: usize = 64;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{AssociationKind, Cardinality, ColumnKind},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("duplicate model '{0}' in schema")]
    DuplicateModel(String),

    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}
