use crate::rdf::identity_node;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// A node standing for an OWL anonymous individual.
///
/// The node id of the individual is the key under which the node manager interns it. Like
/// [IriNode](crate::IriNode), equality is based on the instance.
#[derive(Clone)]
pub struct AnonNode(Arc<str>);

identity_node!(AnonNode, WeakAnonNode, str);

impl AnonNode {
    /// Creates a new, non-canonical instance for the individual with the given `node_id`.
    pub fn new(node_id: impl Into<Arc<str>>) -> Self {
        Self(node_id.into())
    }

    /// Returns the node id of the individual.
    pub fn node_id(&self) -> &str {
        &self.0
    }
}

impl Debug for AnonNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AnonNode").field(&self.node_id()).finish()
    }
}

impl Display for AnonNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:anon:{}", self.node_id())
    }
}
