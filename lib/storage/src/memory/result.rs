/// The outcome of adding one occurrence of a quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    /// The quad was already present and its multiplicity has been incremented.
    Incremented,
    /// The quad did not exist before.
    New,
}

/// The outcome of removing quads.
///
/// The variants are ordered by the strength of their effect, see [RemoveResult::merge].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RemoveResult {
    /// No matching quad exists.
    NotFound,
    /// The multiplicity of the quad has been decremented but the quad still exists.
    Decremented,
    /// The quad has been removed.
    Removed,
    /// The quad has been removed and the container that held it is now empty.
    ///
    /// Only reported by the inner layers of the index. A dataset reports
    /// [RemoveResult::Removed] instead.
    Emptied,
}

impl RemoveResult {
    /// Combines the outcomes of removals in two sibling containers.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Adapts the outcome reported by the children to a container that is now `empty` or not.
    #[must_use]
    pub(crate) fn settle(self, empty: bool) -> Self {
        match (self, empty) {
            (RemoveResult::NotFound, _) => RemoveResult::NotFound,
            (_, true) => RemoveResult::Emptied,
            (RemoveResult::Emptied, false) => RemoveResult::Removed,
            (result, false) => result,
        }
    }

    /// Returns whether at least one quad has been removed entirely.
    pub fn is_removed(self) -> bool {
        self >= RemoveResult::Removed
    }
}
