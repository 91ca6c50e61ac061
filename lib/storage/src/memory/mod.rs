//! The in-memory quad store.
//!
//! Quads are indexed in four layers. A [MemDataset] maps every subject to an [EdgeBucket] that
//! holds one [Edge] per property. An edge holds one [EdgeTarget] per object and a target records
//! the graphs containing the statement, each with its own multiplicity.
//!
//! Every layer keys its entries by node *identity*. Nodes must therefore be obtained from the
//! [NodeManager] of the dataset.

mod dataset;
mod edge;
mod edge_bucket;
mod edge_target;
mod node_cache;
mod node_manager;
mod result;
mod slots;

pub use dataset::{MemDataset, SubjectCounts};
pub use node_manager::{CleanupStats, NodeManager};
pub use result::{AddResult, RemoveResult};

use edge::Edge;
use edge_bucket::EdgeBucket;
use edge_target::EdgeTarget;
use xowl_model::{IriNode, Node, Quad};

/// The subject and property under which the lower layers operate.
///
/// Used to assemble the quads reported by bulk operations.
#[derive(Debug, Clone, Copy)]
struct EdgeKey<'a> {
    subject: &'a Node,
    property: &'a IriNode,
}

impl<'a> EdgeKey<'a> {
    fn new(subject: &'a Node, property: &'a IriNode) -> Self {
        Self { subject, property }
    }

    fn quad(self, graph: &Node, object: &Node) -> Quad {
        Quad {
            graph: graph.clone(),
            subject: self.subject.clone(),
            property: self.property.clone(),
            object: object.clone(),
        }
    }
}

/// The quads reported by an operation that moves quads between graphs.
#[derive(Debug, Default)]
struct GraphTransfer {
    /// Quads that no longer exist.
    old: Vec<Quad>,
    /// Quads that did not exist before.
    new: Vec<Quad>,
}

/// Returns whether `value` passes the optional `filter`. An absent filter matches everything.
fn passes<T: PartialEq>(filter: Option<&T>, value: &T) -> bool {
    filter.is_none_or(|filter| filter == value)
}
