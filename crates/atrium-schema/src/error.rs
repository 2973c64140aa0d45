use std::fmt;

///
/// ErrorTree
///
/// Flat, ordered aggregation of validation failures. Validation never
/// stops at the first failure; every problem is reported in one pass.
///

#[derive(Clone, Debug, Default)]
pub struct ErrorTree {
    errors: Vec<String>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, err: impl ToString) {
        self.errors.push(err.to_string());
    }

    /// Fold another tree into this one, prefixing each entry with a route.
    pub fn nest(&mut self, route: &str, other: Self) {
        for err in other.errors {
            self.errors.push(format!("{route}: {err}"));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.join("; "))
    }
}

/// Push a formatted error onto an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        let errs = ErrorTree::new();
        assert!(errs.is_empty());
        assert!(errs.result().is_ok());
    }

    #[test]
    fn nested_errors_are_prefixed() {
        let mut inner = ErrorTree::new();
        err!(inner, "bad ident '{}'", "X");

        let mut outer = ErrorTree::new();
        outer.nest("model 'customer'", inner);

        let err = outer.result().unwrap_err();
        assert_eq!(err.to_string(), "model 'customer': bad ident 'X'");
    }
}
