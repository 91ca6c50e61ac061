use crate::Quad;
use std::fmt::{Display, Formatter};

/// A single quad that has been added to or removed from a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Change {
    quad: Quad,
    positive: bool,
}

impl Change {
    pub fn added(quad: Quad) -> Self {
        Self {
            quad,
            positive: true,
        }
    }

    pub fn removed(quad: Quad) -> Self {
        Self {
            quad,
            positive: false,
        }
    }

    pub fn quad(&self) -> &Quad {
        &self.quad
    }

    /// Returns `true` for additions and `false` for removals.
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    pub fn into_quad(self) -> Quad {
        self.quad
    }
}

impl Display for Change {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.positive { '+' } else { '-' };
        write!(f, "{sign} {}", self.quad)
    }
}

/// A set of quads added and removed by a single operation.
///
/// Only the net effect is recorded: a quad whose multiplicity was merely incremented or
/// decremented does not appear in a changeset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changeset {
    added: Vec<Quad>,
    removed: Vec<Quad>,
}

impl Changeset {
    pub fn new(added: Vec<Quad>, removed: Vec<Quad>) -> Self {
        Self { added, removed }
    }

    pub fn from_added(added: Vec<Quad>) -> Self {
        Self::new(added, Vec::new())
    }

    pub fn from_removed(removed: Vec<Quad>) -> Self {
        Self::new(Vec::new(), removed)
    }

    pub fn added(&self) -> &[Quad] {
        &self.added
    }

    pub fn removed(&self) -> &[Quad] {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Quad>, Vec<Quad>) {
        (self.added, self.removed)
    }
}

impl From<Change> for Changeset {
    fn from(value: Change) -> Self {
        if value.positive {
            Self::from_added(vec![value.quad])
        } else {
            Self::from_removed(vec![value.quad])
        }
    }
}

impl Display for Changeset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for quad in &self.removed {
            writeln!(f, "- {quad}")?;
        }
        for quad in &self.added {
            writeln!(f, "+ {quad}")?;
        }
        Ok(())
    }
}

/// Receives the changes applied to a dataset.
///
/// Listeners are invoked synchronously on the thread that performed the mutation, after the
/// index has been updated. A listener must not mutate the dataset it is registered on.
pub trait ChangeListener: Send + Sync {
    /// Called when a single quad has been added or removed.
    fn on_change(&self, change: &Change);

    /// Called when a batch of quads has been added or removed.
    fn on_changeset(&self, changeset: &Changeset);
}
