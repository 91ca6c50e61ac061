use crate::rdf::identity_node;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// An IRI term.
///
/// Equality and hashing are based on the instance, not on the IRI. [IriNode::new] always creates
/// a fresh instance; obtain canonical instances from the node manager of a store.
#[derive(Clone)]
pub struct IriNode(Arc<str>);

identity_node!(IriNode, WeakIriNode, str);

impl IriNode {
    /// Creates a new, non-canonical instance for `iri`.
    pub fn new(iri: impl Into<Arc<str>>) -> Self {
        Self(iri.into())
    }

    /// Returns the IRI of this node.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares the IRIs of two nodes, ignoring their identity.
    pub fn same_iri(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Debug for IriNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IriNode").field(&self.as_str()).finish()
    }
}

impl Display for IriNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}
