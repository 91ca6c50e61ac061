use crate::memory::{AddResult, EdgeBucket, GraphTransfer, NodeManager, RemoveResult};
use itertools::{Either, Itertools};
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{trace, warn};
use xowl_model::{
    AnonNode, BlankNode, Change, ChangeListener, Changeset, IriNode, Node, Quad,
    UnsupportedNodeType,
};

/// An in-memory RDF dataset that counts how many times each quad has been added.
///
/// Adding a quad that is already present increments its multiplicity and removing it decrements
/// the multiplicity. The quad only disappears once its multiplicity reaches zero. Queries and
/// counts report every matching quad once, regardless of its multiplicity.
///
/// # Node Identity
///
/// All nodes are compared by identity. Nodes passed to a dataset must be obtained from its
/// [NodeManager], see [MemDataset::nodes_mut]. A node that is equal by value but is not the
/// canonical instance will not match anything.
///
/// # Wildcards
///
/// Query and removal operations take optional nodes. Both [None] and a variable node match any
/// value.
///
/// # Change Notification
///
/// Registered [ChangeListener]s are called synchronously, before the mutating call returns. They
/// only observe net changes: quads that did not exist before and quads that no longer exist.
/// Incrementing or decrementing the multiplicity of a quad is silent.
#[derive(Default)]
pub struct MemDataset {
    nodes: NodeManager,
    iri_subjects: FxHashMap<IriNode, EdgeBucket>,
    blank_subjects: FxHashMap<BlankNode, EdgeBucket>,
    anon_subjects: FxHashMap<AnonNode, EdgeBucket>,
    listeners: Vec<Arc<dyn ChangeListener>>,
}

impl MemDataset {
    /// Creates a new empty [MemDataset] with its own [NodeManager].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty [MemDataset] that obtains its nodes from `nodes`.
    pub fn with_node_manager(nodes: NodeManager) -> Self {
        Self {
            nodes,
            ..Self::default()
        }
    }

    pub fn nodes(&self) -> &NodeManager {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut NodeManager {
        &mut self.nodes
    }

    /// Registers a listener that is notified of all subsequent changes.
    pub fn add_listener(&mut self, listener: Arc<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    /// Unregisters a listener. Returns whether the listener was registered.
    pub fn remove_listener(&mut self, listener: &Arc<dyn ChangeListener>) -> bool {
        let Some(index) = self
            .listeners
            .iter()
            .position(|candidate| Arc::ptr_eq(candidate, listener))
        else {
            warn!("Tried to remove a change listener that is not registered");
            return false;
        };
        self.listeners.remove(index);
        true
    }

    /// Adds one occurrence of a quad.
    ///
    /// Graph and object nodes are stored as given. A variable stored in one of these positions
    /// is still a wildcard in every pattern, so such a quad can only be matched and removed by
    /// leaving that position open.
    ///
    /// # Errors
    ///
    /// Returns an error if `subject` is not an IRI, blank or anonymous node. The dataset is left
    /// unchanged.
    pub fn add(
        &mut self,
        graph: &Node,
        subject: &Node,
        property: &IriNode,
        object: &Node,
    ) -> Result<AddResult, UnsupportedNodeType> {
        let result = self.add_inner(graph, subject, property, object)?;
        if result == AddResult::New {
            self.notify_change(&Change::added(Quad {
                graph: graph.clone(),
                subject: subject.clone(),
                property: property.clone(),
                object: object.clone(),
            }));
        }
        Ok(result)
    }

    /// Adds one occurrence of `quad`.
    ///
    /// # Errors
    ///
    /// See [MemDataset::add].
    pub fn add_quad(&mut self, quad: &Quad) -> Result<AddResult, UnsupportedNodeType> {
        self.add(&quad.graph, &quad.subject, &quad.property, &quad.object)
    }

    /// Applies a single change.
    ///
    /// Listeners receive the net effect as one changeset, which is empty and not sent if only a
    /// multiplicity changed.
    ///
    /// # Errors
    ///
    /// See [MemDataset::insert].
    pub fn insert_change(&mut self, change: &Change) -> Result<(), UnsupportedNodeType> {
        self.insert(&Changeset::from(change.clone()))
    }

    /// Applies all changes of `changeset`: first the additions, then the removals.
    ///
    /// Removals are exact: each removes one occurrence of a fully specified quad. Listeners
    /// receive a single changeset holding the quads that were created and the quads that
    /// disappeared.
    ///
    /// # Errors
    ///
    /// Returns an error if the subject of any quad is not an IRI, blank or anonymous node. All
    /// subjects are checked before the dataset is changed, so the dataset is left unchanged.
    pub fn insert(&mut self, changeset: &Changeset) -> Result<(), UnsupportedNodeType> {
        if let Some(quad) = changeset
            .added()
            .iter()
            .chain(changeset.removed())
            .find(|quad| !quad.subject.is_subject_kind())
        {
            return Err(UnsupportedNodeType::subject(quad.subject.clone()));
        }

        let mut added = Vec::new();
        for quad in changeset.added() {
            let result =
                self.add_inner(&quad.graph, &quad.subject, &quad.property, &quad.object)?;
            if result == AddResult::New {
                added.push(quad.clone());
            }
        }

        let mut removed = Vec::new();
        for quad in changeset.removed() {
            let result =
                self.remove_inner(&quad.graph, &quad.subject, &quad.property, &quad.object)?;
            if result.is_removed() {
                removed.push(quad.clone());
            }
        }

        trace!(
            "Inserted changeset with {} additions and {} removals, {} quads created and {} removed",
            changeset.added().len(),
            changeset.removed().len(),
            added.len(),
            removed.len()
        );
        self.notify_changeset(Changeset::new(added, removed));
        Ok(())
    }

    /// Removes quads matching the pattern.
    ///
    /// If all four nodes are given, one occurrence of that quad is removed. Otherwise, one
    /// occurrence of every matching quad is removed and the listeners receive one changeset
    /// holding the quads that no longer exist. For such bulk removals, the result reports the
    /// strongest effect on any quad.
    ///
    /// # Errors
    ///
    /// Returns an error if `subject` is given and is not an IRI, blank or anonymous node.
    pub fn remove(
        &mut self,
        graph: Option<&Node>,
        subject: Option<&Node>,
        property: Option<&IriNode>,
        object: Option<&Node>,
    ) -> Result<RemoveResult, UnsupportedNodeType> {
        let graph = graph.and_then(Node::as_filter);
        let subject = subject.and_then(Node::as_filter);
        let object = object.and_then(Node::as_filter);

        if let (Some(graph), Some(subject), Some(property), Some(object)) =
            (graph, subject, property, object)
        {
            let result = self.remove_inner(graph, subject, property, object)?;
            if result.is_removed() {
                self.notify_change(&Change::removed(Quad {
                    graph: graph.clone(),
                    subject: subject.clone(),
                    property: property.clone(),
                    object: object.clone(),
                }));
            }
            return Ok(result);
        }

        let mut buffer = Vec::new();
        let result = match subject {
            Some(subject) => {
                let Some(bucket) = self.bucket_mut(subject)? else {
                    return Ok(RemoveResult::NotFound);
                };
                let result = bucket.remove_all(graph, property, object, subject, &mut buffer);
                if result == RemoveResult::Emptied {
                    self.drop_bucket(subject);
                }
                result
            }
            None => {
                let mut result = RemoveResult::NotFound;
                self.sweep(|subject, bucket| {
                    let removed = bucket.remove_all(graph, property, object, subject, &mut buffer);
                    result = result.merge(removed);
                    removed == RemoveResult::Emptied
                });
                result
            }
        };

        trace!("Removed {} quads matching a pattern", buffer.len());
        self.notify_changeset(Changeset::from_removed(buffer));
        Ok(result.settle(false))
    }

    /// Removes quads matching `quad`. Variable nodes in the graph, subject or object act as
    /// wildcards.
    ///
    /// # Errors
    ///
    /// See [MemDataset::remove].
    pub fn remove_quad(&mut self, quad: &Quad) -> Result<RemoveResult, UnsupportedNodeType> {
        self.remove(
            Some(&quad.graph),
            Some(&quad.subject),
            Some(&quad.property),
            Some(&quad.object),
        )
    }

    /// Removes all quads regardless of their multiplicity.
    pub fn clear(&mut self) {
        let mut buffer = Vec::new();
        drain_partition(&mut self.iri_subjects, &mut buffer);
        drain_partition(&mut self.blank_subjects, &mut buffer);
        drain_partition(&mut self.anon_subjects, &mut buffer);

        trace!("Cleared {} quads", buffer.len());
        self.notify_changeset(Changeset::from_removed(buffer));
    }

    /// Removes all quads of `graph` regardless of their multiplicity. A wildcard graph clears the
    /// whole dataset.
    pub fn clear_graph(&mut self, graph: Option<&Node>) {
        let Some(graph) = graph.and_then(Node::as_filter) else {
            self.clear();
            return;
        };

        let mut buffer = Vec::new();
        self.sweep(|subject, bucket| bucket.clear_graph(graph, subject, &mut buffer));

        trace!("Cleared {} quads from graph {graph}", buffer.len());
        self.notify_changeset(Changeset::from_removed(buffer));
    }

    /// Copies the quads of `origin` to `target`.
    ///
    /// Quads that already exist in `target` have their multiplicity incremented. If `overwrite`
    /// is set, quads of `target` that have no counterpart in `origin` are removed. The quads of
    /// `origin` are not affected.
    pub fn copy(&mut self, origin: &Node, target: &Node, overwrite: bool) {
        if origin == target {
            return;
        }

        let mut transfer = GraphTransfer::default();
        self.sweep(|subject, bucket| {
            bucket.copy(origin, target, overwrite, subject, &mut transfer)
        });

        trace!(
            "Copied graph {origin} to {target}, {} quads created and {} removed",
            transfer.new.len(),
            transfer.old.len()
        );
        self.notify_changeset(Changeset::new(transfer.new, transfer.old));
    }

    /// Moves the quads of `origin` to `target`.
    ///
    /// Quads that already exist in `target` have their multiplicity incremented. Quads of
    /// `target` that have no counterpart in `origin` are removed.
    pub fn move_graph(&mut self, origin: &Node, target: &Node) {
        if origin == target {
            return;
        }

        let mut transfer = GraphTransfer::default();
        self.sweep(|subject, bucket| bucket.move_graph(origin, target, subject, &mut transfer));

        trace!(
            "Moved graph {origin} to {target}, {} quads created and {} removed",
            transfer.new.len(),
            transfer.old.len()
        );
        self.notify_changeset(Changeset::new(transfer.new, transfer.old));
    }

    /// Returns how many times a quad has been added, or `0` if it does not exist.
    pub fn multiplicity(
        &self,
        graph: &Node,
        subject: &Node,
        property: &IriNode,
        object: &Node,
    ) -> u64 {
        self.bucket(subject)
            .map_or(0, |bucket| bucket.multiplicity(graph, property, object))
    }

    pub fn multiplicity_of(&self, quad: &Quad) -> u64 {
        self.multiplicity(&quad.graph, &quad.subject, &quad.property, &quad.object)
    }

    /// Returns a lazy iterator over the quads matching the pattern.
    ///
    /// The dataset cannot be mutated while the iterator is alive. Collect the quads first if
    /// they drive a mutation.
    pub fn get_all<'a>(
        &'a self,
        graph: Option<&'a Node>,
        subject: Option<&'a Node>,
        property: Option<&'a IriNode>,
        object: Option<&'a Node>,
    ) -> impl Iterator<Item = Quad> + 'a {
        let graph = graph.and_then(Node::as_filter);
        let object = object.and_then(Node::as_filter);
        match subject.and_then(Node::as_filter) {
            Some(subject) => Either::Left(
                self.bucket(subject)
                    .into_iter()
                    .flat_map(move |bucket| {
                        bucket_quads(subject.clone(), bucket, graph, property, object)
                    }),
            ),
            None => Either::Right(self.buckets().flat_map(move |(subject, bucket)| {
                bucket_quads(subject, bucket, graph, property, object)
            })),
        }
    }

    /// Returns a lazy iterator over all quads.
    pub fn iter(&self) -> impl Iterator<Item = Quad> + '_ {
        self.get_all(None, None, None, None)
    }

    /// Returns the number of distinct quads matching the pattern.
    pub fn count(
        &self,
        graph: Option<&Node>,
        subject: Option<&Node>,
        property: Option<&IriNode>,
        object: Option<&Node>,
    ) -> usize {
        let graph = graph.and_then(Node::as_filter);
        let object = object.and_then(Node::as_filter);
        match subject.and_then(Node::as_filter) {
            Some(subject) => self
                .bucket(subject)
                .map_or(0, |bucket| bucket.count(graph, property, object)),
            None => self
                .buckets()
                .map(|(_, bucket)| bucket.count(graph, property, object))
                .sum(),
        }
    }

    /// Returns the number of distinct quads.
    pub fn len(&self) -> usize {
        self.count(None, None, None, None)
    }

    pub fn is_empty(&self) -> bool {
        self.iri_subjects.is_empty()
            && self.blank_subjects.is_empty()
            && self.anon_subjects.is_empty()
    }

    /// Returns the distinct graphs that contain at least one quad.
    pub fn graphs(&self) -> Vec<Node> {
        self.buckets()
            .flat_map(|(_, bucket)| bucket.graphs())
            .unique()
            .cloned()
            .collect()
    }

    /// Returns the number of subjects per kind.
    pub fn subject_counts(&self) -> SubjectCounts {
        SubjectCounts {
            iri: self.iri_subjects.len(),
            blank: self.blank_subjects.len(),
            anonymous: self.anon_subjects.len(),
        }
    }

    fn add_inner(
        &mut self,
        graph: &Node,
        subject: &Node,
        property: &IriNode,
        object: &Node,
    ) -> Result<AddResult, UnsupportedNodeType> {
        let bucket = match subject {
            Node::Iri(node) => self.iri_subjects.entry(node.clone()).or_default(),
            Node::Blank(node) => self.blank_subjects.entry(*node).or_default(),
            Node::Anonymous(node) => self.anon_subjects.entry(node.clone()).or_default(),
            Node::Literal(_) | Node::Variable(_) => {
                return Err(UnsupportedNodeType::subject(subject.clone()));
            }
        };
        Ok(bucket.add(graph, property, object))
    }

    /// Removes one occurrence of a fully specified quad and drops the bucket of the subject if it
    /// is now empty.
    fn remove_inner(
        &mut self,
        graph: &Node,
        subject: &Node,
        property: &IriNode,
        object: &Node,
    ) -> Result<RemoveResult, UnsupportedNodeType> {
        let Some(bucket) = self.bucket_mut(subject)? else {
            return Ok(RemoveResult::NotFound);
        };
        let result = bucket.remove(graph, property, object);
        if result == RemoveResult::Emptied {
            self.drop_bucket(subject);
        }
        Ok(result.settle(false))
    }

    fn bucket(&self, subject: &Node) -> Option<&EdgeBucket> {
        match subject {
            Node::Iri(node) => self.iri_subjects.get(node),
            Node::Blank(node) => self.blank_subjects.get(node),
            Node::Anonymous(node) => self.anon_subjects.get(node),
            Node::Literal(_) | Node::Variable(_) => None,
        }
    }

    fn bucket_mut(
        &mut self,
        subject: &Node,
    ) -> Result<Option<&mut EdgeBucket>, UnsupportedNodeType> {
        match subject {
            Node::Iri(node) => Ok(self.iri_subjects.get_mut(node)),
            Node::Blank(node) => Ok(self.blank_subjects.get_mut(node)),
            Node::Anonymous(node) => Ok(self.anon_subjects.get_mut(node)),
            Node::Literal(_) | Node::Variable(_) => {
                Err(UnsupportedNodeType::subject(subject.clone()))
            }
        }
    }

    fn drop_bucket(&mut self, subject: &Node) {
        match subject {
            Node::Iri(node) => {
                self.iri_subjects.remove(node);
            }
            Node::Blank(node) => {
                self.blank_subjects.remove(node);
            }
            Node::Anonymous(node) => {
                self.anon_subjects.remove(node);
            }
            Node::Literal(_) | Node::Variable(_) => {}
        }
    }

    /// Returns all subjects with their bucket.
    fn buckets(&self) -> impl Iterator<Item = (Node, &EdgeBucket)> {
        partition_buckets(&self.iri_subjects)
            .chain(partition_buckets(&self.blank_subjects))
            .chain(partition_buckets(&self.anon_subjects))
    }

    /// Applies `op` to every bucket and drops the buckets for which it returns `true`.
    fn sweep(&mut self, mut op: impl FnMut(&Node, &mut EdgeBucket) -> bool) {
        sweep_partition(&mut self.iri_subjects, &mut op);
        sweep_partition(&mut self.blank_subjects, &mut op);
        sweep_partition(&mut self.anon_subjects, &mut op);
    }

    fn notify_change(&self, change: &Change) {
        for listener in &self.listeners {
            listener.on_change(change);
        }
    }

    fn notify_changeset(&self, changeset: Changeset) {
        if changeset.is_empty() {
            return;
        }
        for listener in &self.listeners {
            listener.on_changeset(&changeset);
        }
    }
}

/// The number of subjects per kind held by a [MemDataset].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubjectCounts {
    pub iri: usize,
    pub blank: usize,
    pub anonymous: usize,
}

impl SubjectCounts {
    pub fn total(&self) -> usize {
        self.iri + self.blank + self.anonymous
    }
}

fn bucket_quads<'a>(
    subject: Node,
    bucket: &'a EdgeBucket,
    graph: Option<&'a Node>,
    property: Option<&'a IriNode>,
    object: Option<&'a Node>,
) -> impl Iterator<Item = Quad> + 'a {
    bucket
        .get_all(graph, property, object)
        .map(move |(property, object, graph)| Quad {
            graph: graph.clone(),
            subject: subject.clone(),
            property: property.clone(),
            object: object.clone(),
        })
}

fn partition_buckets<K>(
    partition: &FxHashMap<K, EdgeBucket>,
) -> impl Iterator<Item = (Node, &EdgeBucket)>
where
    K: Clone + Into<Node>,
{
    partition
        .iter()
        .map(|(subject, bucket)| (subject.clone().into(), bucket))
}

fn sweep_partition<K>(
    partition: &mut FxHashMap<K, EdgeBucket>,
    op: &mut impl FnMut(&Node, &mut EdgeBucket) -> bool,
) where
    K: Clone + Eq + Hash + Into<Node>,
{
    partition.retain(|subject, bucket| !op(&subject.clone().into(), bucket));
}

fn drain_partition<K>(partition: &mut FxHashMap<K, EdgeBucket>, buffer: &mut Vec<Quad>)
where
    K: Into<Node>,
{
    for (subject, mut bucket) in partition.drain() {
        bucket.clear(&subject.into(), buffer);
    }
}
