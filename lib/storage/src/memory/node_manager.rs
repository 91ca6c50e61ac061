use crate::memory::node_cache::{LiteralCache, NodeCache};
use std::fmt::{Display, Formatter};
use tracing::debug;
use uuid::Uuid;
use xowl_model::vocab::{rdf, DEFAULT_GRAPH_NAMESPACE};
use xowl_model::{
    AnonNode, BlankNode, IriNode, LiteralNode, WeakAnonNode, WeakIriNode,
};

/// Hands out the canonical instances of nodes.
///
/// Requesting the same IRI, anonymous individual or literal twice yields the same instance, as
/// long as the first instance is still referenced somewhere. The manager only holds its nodes
/// weakly. Entries of nodes that are no longer referenced remain in the caches until they are
/// requested again or [NodeManager::cleanup] is called.
///
/// # Graph Namespace
///
/// The graph namespace is the IRI of the default graph. It is also the base of fresh IRIs that
/// are not scoped to a specific graph, see [NodeManager::new_iri_node].
#[derive(Debug)]
pub struct NodeManager {
    iris: NodeCache<WeakIriNode>,
    anons: NodeCache<WeakAnonNode>,
    literals: LiteralCache,
    /// The ordinal of the next blank node.
    next_blank: u64,
    /// Kept alive for the lifetime of the manager.
    default_graph: IriNode,
}

impl Default for NodeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeManager {
    /// Creates a new [NodeManager] that uses [DEFAULT_GRAPH_NAMESPACE].
    pub fn new() -> Self {
        Self::with_graph_namespace(DEFAULT_GRAPH_NAMESPACE)
    }

    /// Creates a new [NodeManager] whose default graph is `namespace`.
    pub fn with_graph_namespace(namespace: &str) -> Self {
        let mut iris = NodeCache::default();
        let default_graph = iris.get_or_create(namespace, || IriNode::new(namespace));
        Self {
            iris,
            anons: NodeCache::default(),
            literals: LiteralCache::default(),
            next_blank: 0,
            default_graph,
        }
    }

    /// Returns the canonical node of the default graph.
    pub fn default_graph(&self) -> &IriNode {
        &self.default_graph
    }

    pub fn graph_namespace(&self) -> &str {
        self.default_graph.as_str()
    }

    /// Returns the canonical node for `iri`.
    pub fn get_iri_node(&mut self, iri: &str) -> IriNode {
        self.iris.get_or_create(iri, || IriNode::new(iri))
    }

    /// Returns the canonical node for `iri` if it already exists.
    pub fn get_existing_iri_node(&self, iri: &str) -> Option<IriNode> {
        self.iris.get(iri)
    }

    /// Creates a fresh IRI node scoped to `graph`, or to the graph namespace if no graph is given.
    ///
    /// The IRI is made unique with a random suffix. The new node becomes the canonical node for
    /// its IRI.
    pub fn new_iri_node(&mut self, graph: Option<&IriNode>) -> IriNode {
        let base = graph.unwrap_or(&self.default_graph).as_str();
        let iri = format!("{base}#{}", Uuid::new_v4());
        self.get_iri_node(&iri)
    }

    /// Allocates a new blank node. Blank nodes are never reused.
    pub fn get_blank_node(&mut self) -> BlankNode {
        let node = BlankNode::new(self.next_blank);
        self.next_blank += 1;
        node
    }

    /// Returns the canonical node of the anonymous individual identified by `node_id`.
    pub fn get_anon_node(&mut self, node_id: &str) -> AnonNode {
        self.anons.get_or_create(node_id, || AnonNode::new(node_id))
    }

    /// Returns the canonical literal.
    ///
    /// If a `language` is given, the literal is language-tagged and `datatype` is ignored.
    pub fn get_literal_node(
        &mut self,
        lexical: &str,
        datatype: &str,
        language: Option<&str>,
    ) -> LiteralNode {
        match language {
            Some(language) => self.literals.get_or_create(
                lexical,
                rdf::LANG_STRING.as_str(),
                Some(language),
                || LiteralNode::new_language_tagged(lexical, language),
            ),
            None => self.literals.get_or_create(lexical, datatype, None, || {
                LiteralNode::new_typed(lexical, datatype)
            }),
        }
    }

    /// Drops the cache entries of nodes that are no longer referenced.
    pub fn cleanup(&mut self) -> CleanupStats {
        let stats = CleanupStats {
            iris: self.iris.sweep(),
            anons: self.anons.sweep(),
            literals: self.literals.sweep(),
        };
        debug!(
            "Node cleanup swept {stats}, {} nodes remain cached",
            self.cached()
        );
        stats
    }

    /// Returns the number of cache entries, including entries of reclaimed nodes.
    pub fn cached(&self) -> usize {
        self.iris.len() + self.anons.len() + self.literals.len()
    }
}

/// The number of dead cache entries reclaimed since the previous [NodeManager::cleanup].
///
/// Entries replaced or pruned while looking nodes up are counted as well as the entries swept by
/// the cleanup itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupStats {
    pub iris: usize,
    pub anons: usize,
    pub literals: usize,
}

impl CleanupStats {
    pub fn total(&self) -> usize {
        self.iris + self.anons + self.literals
    }
}

impl Display for CleanupStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} IRIs, {} anonymous nodes and {} literals",
            self.iris, self.anons, self.literals
        )
    }
}
