use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// RenderContext
///
/// The page a field is being rendered for. The display form is the
/// partial-id prefix.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum RenderContext {
    #[display("index")]
    Index,

    #[display("show")]
    Show,

    #[display("form")]
    Form,
}

impl RenderContext {
    pub const ALL: [Self; 3] = [Self::Index, Self::Show, Self::Form];
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_partial_prefix() {
        assert_eq!(RenderContext::Index.to_string(), "index");
        assert_eq!(RenderContext::Show.to_string(), "show");
        assert_eq!(RenderContext::Form.to_string(), "form");
    }
}
