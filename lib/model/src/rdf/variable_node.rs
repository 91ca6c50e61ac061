use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A query variable.
///
/// Variables are never stored. In query and removal arguments they match any value, exactly like
/// an absent argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableNode(Arc<str>);

impl VariableNode {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for VariableNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "?{}", self.name())
    }
}
