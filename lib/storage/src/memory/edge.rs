use crate::memory::slots::SlotArray;
use crate::memory::{passes, AddResult, EdgeKey, EdgeTarget, GraphTransfer, RemoveResult};
use xowl_model::{IriNode, Node, Quad};

/// The number of target slots by which an edge grows.
const TARGET_CHUNK: usize = 10;

/// All statements with the same subject and property, indexed by object.
#[derive(Debug, Clone)]
pub(super) struct Edge {
    property: IriNode,
    targets: SlotArray<EdgeTarget>,
}

impl Edge {
    /// Creates an edge holding a single statement.
    pub(super) fn new(property: IriNode, graph: &Node, object: &Node) -> Self {
        let mut targets = SlotArray::with_chunk(TARGET_CHUNK);
        targets.insert(EdgeTarget::new(object.clone(), graph.clone()));
        Self { property, targets }
    }

    pub(super) fn property(&self) -> &IriNode {
        &self.property
    }

    pub(super) fn add(&mut self, graph: &Node, object: &Node) -> AddResult {
        if let Some((_, target)) = self.targets.find_mut(|target| target.object() == object) {
            return target.add(graph);
        }

        self.targets
            .insert(EdgeTarget::new(object.clone(), graph.clone()));
        AddResult::New
    }

    pub(super) fn remove(&mut self, graph: &Node, object: &Node) -> RemoveResult {
        let Some((index, target)) =
            self.targets.find_mut(|target| target.object() == object)
        else {
            return RemoveResult::NotFound;
        };

        match target.remove(graph) {
            RemoveResult::Emptied => {
                self.targets.free(index);
                RemoveResult::Removed.settle(self.targets.is_empty())
            }
            result => result,
        }
    }

    pub(super) fn remove_all(
        &mut self,
        graph: Option<&Node>,
        object: Option<&Node>,
        subject: &Node,
        buffer: &mut Vec<Quad>,
    ) -> RemoveResult {
        let key = EdgeKey::new(subject, &self.property);
        let mut result = RemoveResult::NotFound;
        self.targets.retain_mut(|target| {
            if !passes(object, target.object()) {
                return true;
            }
            let removed = target.remove_all(graph, key, buffer);
            result = result.merge(removed);
            removed != RemoveResult::Emptied
        });
        result.settle(self.targets.is_empty())
    }

    pub(super) fn clear(&mut self, subject: &Node, buffer: &mut Vec<Quad>) {
        let key = EdgeKey::new(subject, &self.property);
        for mut target in self.targets.drain() {
            target.clear(key, buffer);
        }
    }

    /// Returns whether the edge is now empty.
    pub(super) fn clear_graph(
        &mut self,
        graph: &Node,
        subject: &Node,
        buffer: &mut Vec<Quad>,
    ) -> bool {
        let key = EdgeKey::new(subject, &self.property);
        self.targets
            .retain_mut(|target| !target.clear_graph(graph, key, buffer));
        self.targets.is_empty()
    }

    /// Returns whether the edge is now empty.
    pub(super) fn copy(
        &mut self,
        origin: &Node,
        target: &Node,
        overwrite: bool,
        subject: &Node,
        transfer: &mut GraphTransfer,
    ) -> bool {
        let key = EdgeKey::new(subject, &self.property);
        self.targets.retain_mut(|edge_target| {
            !edge_target.copy(origin, target, overwrite, key, transfer)
        });
        self.targets.is_empty()
    }

    /// Returns whether the edge is now empty.
    pub(super) fn move_graph(
        &mut self,
        origin: &Node,
        target: &Node,
        subject: &Node,
        transfer: &mut GraphTransfer,
    ) -> bool {
        let key = EdgeKey::new(subject, &self.property);
        self.targets.retain_mut(|edge_target| {
            !edge_target.move_graph(origin, target, key, transfer)
        });
        self.targets.is_empty()
    }

    pub(super) fn multiplicity(&self, graph: &Node, object: &Node) -> u64 {
        self.targets
            .find(|target| target.object() == object)
            .map_or(0, |target| target.multiplicity(graph))
    }

    /// Returns the (object, graph) pairs matching the filters.
    pub(super) fn get_all<'a>(
        &'a self,
        graph: Option<&'a Node>,
        object: Option<&'a Node>,
    ) -> impl Iterator<Item = (&'a Node, &'a Node)> + 'a {
        self.targets
            .iter()
            .filter(move |target| passes(object, target.object()))
            .flat_map(move |target| {
                target
                    .get_all(graph)
                    .map(move |graph| (target.object(), graph))
            })
    }

    pub(super) fn count(&self, graph: Option<&Node>, object: Option<&Node>) -> usize {
        self.targets
            .iter()
            .filter(|target| passes(object, target.object()))
            .map(|target| target.count(graph))
            .sum()
    }

    pub(super) fn graphs(&self) -> impl Iterator<Item = &Node> {
        self.targets.iter().flat_map(EdgeTarget::graphs)
    }
}
