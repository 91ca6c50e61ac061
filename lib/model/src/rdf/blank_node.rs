use std::fmt::{Display, Formatter};

/// A blank node, identified by an ordinal allocated by the node manager.
///
/// Blank nodes are never interned: every allocation yields a new ordinal, so two blank nodes are
/// equal only if they come from the same allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(u64);

impl BlankNode {
    /// Creates a blank node with the given `ordinal`.
    pub const fn new(ordinal: u64) -> Self {
        Self(ordinal)
    }

    /// Returns the ordinal of this node.
    pub const fn ordinal(self) -> u64 {
        self.0
    }
}

impl Display for BlankNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:n{}", self.0)
    }
}
