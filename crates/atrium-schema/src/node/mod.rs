mod association;
mod column;
mod model;
mod schema;

pub use association::*;
pub use column::*;
pub use model::*;
pub use schema::*;

use crate::error::ErrorTree;

///
/// ValidateNode
///
/// Local, structural invariants for one schema node. Schema-wide
/// invariants live in the `validate` module.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}
