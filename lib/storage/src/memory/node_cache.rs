use rustc_hash::FxHashMap;
use xowl_model::{AnonNode, IriNode, LiteralNode, WeakAnonNode, WeakIriNode, WeakLiteralNode};

/// A weak handle to a node that is interned by a string key.
pub(super) trait WeakNode {
    type Node;

    fn downgrade(node: &Self::Node) -> Self;

    fn upgrade(&self) -> Option<Self::Node>;

    fn is_alive(&self) -> bool;
}

impl WeakNode for WeakIriNode {
    type Node = IriNode;

    fn downgrade(node: &IriNode) -> Self {
        node.downgrade()
    }

    fn upgrade(&self) -> Option<IriNode> {
        WeakIriNode::upgrade(self)
    }

    fn is_alive(&self) -> bool {
        WeakIriNode::is_alive(self)
    }
}

impl WeakNode for WeakAnonNode {
    type Node = AnonNode;

    fn downgrade(node: &AnonNode) -> Self {
        node.downgrade()
    }

    fn upgrade(&self) -> Option<AnonNode> {
        WeakAnonNode::upgrade(self)
    }

    fn is_alive(&self) -> bool {
        WeakAnonNode::is_alive(self)
    }
}

/// Tracks the canonical instance of a node kind by string key.
///
/// The cache holds its nodes weakly. Entries of reclaimed nodes are dropped by
/// [NodeCache::sweep] or replaced when their key is requested again.
#[derive(Debug)]
pub(super) struct NodeCache<W> {
    entries: FxHashMap<Box<str>, W>,
    /// Dead entries replaced since the last sweep.
    replaced: usize,
}

impl<W> Default for NodeCache<W> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
            replaced: 0,
        }
    }
}

impl<W: WeakNode> NodeCache<W> {
    pub(super) fn get(&self, key: &str) -> Option<W::Node> {
        self.entries.get(key).and_then(W::upgrade)
    }

    /// Returns the canonical node for `key`, creating it with `create` if there is none.
    pub(super) fn get_or_create(
        &mut self,
        key: &str,
        create: impl FnOnce() -> W::Node,
    ) -> W::Node {
        if let Some(node) = self.get(key) {
            return node;
        }

        let node = create();
        if self
            .entries
            .insert(key.into(), W::downgrade(&node))
            .is_some()
        {
            self.replaced += 1;
        }
        node
    }

    /// Drops the entries of reclaimed nodes. Returns their number, including the entries replaced
    /// by [NodeCache::get_or_create] since the last sweep.
    pub(super) fn sweep(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, weak| weak.is_alive());
        before - self.entries.len() + std::mem::take(&mut self.replaced)
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Tracks canonical literals, grouped by lexical value.
#[derive(Debug, Default)]
pub(super) struct LiteralCache {
    buckets: FxHashMap<Box<str>, LiteralBucket>,
    /// Dead entries pruned by lookups since the last sweep.
    pruned: usize,
}

impl LiteralCache {
    /// Returns the canonical literal, creating it with `create` if there is none.
    ///
    /// A language-tagged literal is matched by its tag, any other literal by its datatype.
    pub(super) fn get_or_create(
        &mut self,
        lexical: &str,
        datatype: &str,
        language: Option<&str>,
        create: impl FnOnce() -> LiteralNode,
    ) -> LiteralNode {
        if let Some(bucket) = self.buckets.get_mut(lexical) {
            self.pruned += bucket.prune();
            if let Some(literal) = bucket.find(datatype, language) {
                return literal;
            }
        }

        let literal = create();
        self.buckets
            .entry(lexical.into())
            .or_default()
            .literals
            .push(literal.downgrade());
        literal
    }

    /// Drops the entries of reclaimed literals and returns their number, including the entries
    /// pruned by lookups since the last sweep. Empty buckets are dropped as well.
    pub(super) fn sweep(&mut self) -> usize {
        let mut swept = std::mem::take(&mut self.pruned);
        self.buckets.retain(|_, bucket| {
            swept += bucket.prune();
            !bucket.literals.is_empty()
        });
        swept
    }

    pub(super) fn len(&self) -> usize {
        self.buckets
            .values()
            .map(|bucket| bucket.literals.len())
            .sum()
    }
}

/// The literals sharing one lexical value.
#[derive(Debug, Default)]
struct LiteralBucket {
    literals: Vec<WeakLiteralNode>,
}

impl LiteralBucket {
    /// Returns the live literal matching `datatype` and `language`.
    fn find(&self, datatype: &str, language: Option<&str>) -> Option<LiteralNode> {
        self.literals
            .iter()
            .filter_map(WeakLiteralNode::upgrade)
            .find(|literal| match language {
                Some(language) => literal.language() == Some(language),
                None => literal.language().is_none() && literal.datatype() == datatype,
            })
    }

    fn prune(&mut self) -> usize {
        let before = self.literals.len();
        self.literals.retain(WeakLiteralNode::is_alive);
        before - self.literals.len()
    }
}
