use crate::memory::slots::SlotArray;
use crate::memory::{passes, AddResult, Edge, GraphTransfer, RemoveResult};
use xowl_model::{IriNode, Node, Quad};

/// The number of edge slots by which a bucket grows.
const EDGE_CHUNK: usize = 8;

/// All statements of one subject, indexed by property.
///
/// The subject itself is the key under which the dataset stores the bucket and is passed to the
/// operations that report quads.
#[derive(Debug, Clone)]
pub(super) struct EdgeBucket {
    edges: SlotArray<Edge>,
}

impl Default for EdgeBucket {
    fn default() -> Self {
        Self {
            edges: SlotArray::with_chunk(EDGE_CHUNK),
        }
    }
}

impl EdgeBucket {
    pub(super) fn add(&mut self, graph: &Node, property: &IriNode, object: &Node) -> AddResult {
        if let Some((_, edge)) = self.edges.find_mut(|edge| edge.property() == property) {
            return edge.add(graph, object);
        }

        self.edges.insert(Edge::new(property.clone(), graph, object));
        AddResult::New
    }

    pub(super) fn remove(
        &mut self,
        graph: &Node,
        property: &IriNode,
        object: &Node,
    ) -> RemoveResult {
        let Some((index, edge)) = self.edges.find_mut(|edge| edge.property() == property)
        else {
            return RemoveResult::NotFound;
        };

        match edge.remove(graph, object) {
            RemoveResult::Emptied => {
                self.edges.free(index);
                RemoveResult::Removed.settle(self.edges.is_empty())
            }
            result => result,
        }
    }

    pub(super) fn remove_all(
        &mut self,
        graph: Option<&Node>,
        property: Option<&IriNode>,
        object: Option<&Node>,
        subject: &Node,
        buffer: &mut Vec<Quad>,
    ) -> RemoveResult {
        let mut result = RemoveResult::NotFound;
        self.edges.retain_mut(|edge| {
            if !passes(property, edge.property()) {
                return true;
            }
            let removed = edge.remove_all(graph, object, subject, buffer);
            result = result.merge(removed);
            removed != RemoveResult::Emptied
        });
        result.settle(self.edges.is_empty())
    }

    pub(super) fn clear(&mut self, subject: &Node, buffer: &mut Vec<Quad>) {
        for mut edge in self.edges.drain() {
            edge.clear(subject, buffer);
        }
    }

    /// Returns whether the bucket is now empty.
    pub(super) fn clear_graph(
        &mut self,
        graph: &Node,
        subject: &Node,
        buffer: &mut Vec<Quad>,
    ) -> bool {
        self.edges
            .retain_mut(|edge| !edge.clear_graph(graph, subject, buffer));
        self.edges.is_empty()
    }

    /// Returns whether the bucket is now empty.
    pub(super) fn copy(
        &mut self,
        origin: &Node,
        target: &Node,
        overwrite: bool,
        subject: &Node,
        transfer: &mut GraphTransfer,
    ) -> bool {
        self.edges
            .retain_mut(|edge| !edge.copy(origin, target, overwrite, subject, transfer));
        self.edges.is_empty()
    }

    /// Returns whether the bucket is now empty.
    pub(super) fn move_graph(
        &mut self,
        origin: &Node,
        target: &Node,
        subject: &Node,
        transfer: &mut GraphTransfer,
    ) -> bool {
        self.edges
            .retain_mut(|edge| !edge.move_graph(origin, target, subject, transfer));
        self.edges.is_empty()
    }

    pub(super) fn multiplicity(&self, graph: &Node, property: &IriNode, object: &Node) -> u64 {
        self.edges
            .find(|edge| edge.property() == property)
            .map_or(0, |edge| edge.multiplicity(graph, object))
    }

    /// Returns the (property, object, graph) triples matching the filters.
    pub(super) fn get_all<'a>(
        &'a self,
        graph: Option<&'a Node>,
        property: Option<&'a IriNode>,
        object: Option<&'a Node>,
    ) -> impl Iterator<Item = (&'a IriNode, &'a Node, &'a Node)> + 'a {
        self.edges
            .iter()
            .filter(move |edge| passes(property, edge.property()))
            .flat_map(move |edge| {
                edge.get_all(graph, object)
                    .map(move |(object, graph)| (edge.property(), object, graph))
            })
    }

    pub(super) fn count(
        &self,
        graph: Option<&Node>,
        property: Option<&IriNode>,
        object: Option<&Node>,
    ) -> usize {
        self.edges
            .iter()
            .filter(|edge| passes(property, edge.property()))
            .map(|edge| edge.count(graph, object))
            .sum()
    }

    pub(super) fn graphs(&self) -> impl Iterator<Item = &Node> {
        self.edges.iter().flat_map(Edge::graphs)
    }
}
