use crate::memory::slots::SlotArray;
use crate::memory::{passes, AddResult, EdgeKey, GraphTransfer, RemoveResult};
use xowl_model::{Node, Quad};

/// The number of graph slots by which a target grows.
const GRAPH_CHUNK: usize = 3;

#[derive(Debug, Clone)]
struct GraphSlot {
    graph: Node,
    multiplicity: u64,
}

/// All graphs that contain one (subject, property, object) statement.
///
/// Each graph carries the number of times the statement has been added to it.
#[derive(Debug, Clone)]
pub(super) struct EdgeTarget {
    object: Node,
    graphs: SlotArray<GraphSlot>,
}

impl EdgeTarget {
    /// Creates a target for `object` that is contained once in `graph`.
    pub(super) fn new(object: Node, graph: Node) -> Self {
        let mut graphs = SlotArray::with_chunk(GRAPH_CHUNK);
        graphs.insert(GraphSlot {
            graph,
            multiplicity: 1,
        });
        Self { object, graphs }
    }

    pub(super) fn object(&self) -> &Node {
        &self.object
    }

    pub(super) fn add(&mut self, graph: &Node) -> AddResult {
        if let Some((_, slot)) = self.graphs.find_mut(|slot| slot.graph == *graph) {
            slot.multiplicity += 1;
            return AddResult::Incremented;
        }

        self.graphs.insert(GraphSlot {
            graph: graph.clone(),
            multiplicity: 1,
        });
        AddResult::New
    }

    pub(super) fn remove(&mut self, graph: &Node) -> RemoveResult {
        let Some((index, slot)) = self.graphs.find_mut(|slot| slot.graph == *graph) else {
            return RemoveResult::NotFound;
        };

        slot.multiplicity -= 1;
        if slot.multiplicity > 0 {
            return RemoveResult::Decremented;
        }

        self.graphs.free(index);
        RemoveResult::Removed.settle(self.graphs.is_empty())
    }

    /// Removes one occurrence from every graph matching `graph` and pushes the quads that no
    /// longer exist into `buffer`.
    pub(super) fn remove_all(
        &mut self,
        graph: Option<&Node>,
        key: EdgeKey<'_>,
        buffer: &mut Vec<Quad>,
    ) -> RemoveResult {
        let object = &self.object;
        let mut result = RemoveResult::NotFound;
        self.graphs.retain_mut(|slot| {
            if !passes(graph, &slot.graph) {
                return true;
            }

            slot.multiplicity -= 1;
            if slot.multiplicity > 0 {
                result = result.merge(RemoveResult::Decremented);
                true
            } else {
                buffer.push(key.quad(&slot.graph, object));
                result = result.merge(RemoveResult::Removed);
                false
            }
        });
        result.settle(self.graphs.is_empty())
    }

    /// Removes all graphs regardless of their multiplicity.
    pub(super) fn clear(&mut self, key: EdgeKey<'_>, buffer: &mut Vec<Quad>) {
        let object = &self.object;
        buffer.extend(
            self.graphs
                .drain()
                .map(|slot| key.quad(&slot.graph, object)),
        );
    }

    /// Removes `graph` regardless of its multiplicity. Returns whether the target is now empty.
    pub(super) fn clear_graph(
        &mut self,
        graph: &Node,
        key: EdgeKey<'_>,
        buffer: &mut Vec<Quad>,
    ) -> bool {
        if let Some((index, _)) = self.graphs.find_mut(|slot| slot.graph == *graph) {
            self.graphs.free(index);
            buffer.push(key.quad(graph, &self.object));
        }
        self.graphs.is_empty()
    }

    /// Puts the statement in `target` if it is contained in `origin`.
    ///
    /// If the statement is not contained in `origin` and `overwrite` is set, it is removed from
    /// `target`. Returns whether the target is now empty.
    pub(super) fn copy(
        &mut self,
        origin: &Node,
        target: &Node,
        overwrite: bool,
        key: EdgeKey<'_>,
        transfer: &mut GraphTransfer,
    ) -> bool {
        let origin_index = self.position(origin);
        let target_index = self.position(target);
        match (origin_index, target_index) {
            (Some(_), Some(target_index)) => self.increment(target_index),
            (Some(_), None) => {
                self.graphs.insert(GraphSlot {
                    graph: target.clone(),
                    multiplicity: 1,
                });
                transfer.new.push(key.quad(target, &self.object));
            }
            (None, Some(target_index)) if overwrite => {
                self.graphs.free(target_index);
                transfer.old.push(key.quad(target, &self.object));
            }
            _ => {}
        }
        self.graphs.is_empty()
    }

    /// Moves the statement from `origin` to `target`.
    ///
    /// A statement contained in `target` but not in `origin` is removed. Returns whether the
    /// target is now empty.
    pub(super) fn move_graph(
        &mut self,
        origin: &Node,
        target: &Node,
        key: EdgeKey<'_>,
        transfer: &mut GraphTransfer,
    ) -> bool {
        let origin_index = self.position(origin);
        let target_index = self.position(target);
        match (origin_index, target_index) {
            (Some(origin_index), Some(target_index)) => {
                transfer.old.push(key.quad(origin, &self.object));
                self.increment(target_index);
                self.graphs.free(origin_index);
            }
            (Some(origin_index), None) => {
                transfer.old.push(key.quad(origin, &self.object));
                self.graphs.free(origin_index);
                self.graphs.insert(GraphSlot {
                    graph: target.clone(),
                    multiplicity: 1,
                });
                transfer.new.push(key.quad(target, &self.object));
            }
            (None, Some(target_index)) => {
                self.graphs.free(target_index);
                transfer.old.push(key.quad(target, &self.object));
            }
            (None, None) => {}
        }
        self.graphs.is_empty()
    }

    pub(super) fn multiplicity(&self, graph: &Node) -> u64 {
        self.graphs
            .find(|slot| slot.graph == *graph)
            .map_or(0, |slot| slot.multiplicity)
    }

    /// Returns the graphs matching `graph`. An absent filter matches all graphs.
    pub(super) fn get_all<'a>(
        &'a self,
        graph: Option<&'a Node>,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.graphs
            .iter()
            .map(|slot| &slot.graph)
            .filter(move |candidate| passes(graph, candidate))
    }

    pub(super) fn count(&self, graph: Option<&Node>) -> usize {
        self.get_all(graph).count()
    }

    pub(super) fn graphs(&self) -> impl Iterator<Item = &Node> {
        self.get_all(None)
    }

    fn position(&self, graph: &Node) -> Option<usize> {
        self.graphs.position(|slot| slot.graph == *graph)
    }

    fn increment(&mut self, index: usize) {
        if let Some(slot) = self.graphs.get_mut(index) {
            slot.multiplicity += 1;
        }
    }
}
