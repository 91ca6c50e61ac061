use crate::Node;
use thiserror::Error;

/// The reason reported when a node of a disallowed kind is used as the subject of a quad.
pub const SUBJECT_KIND_REASON: &str = "Subject node must be IRI, blank or anonymous";

/// Raised when a mutation is attempted with a subject whose kind cannot be stored.
///
/// Only IRI, blank and anonymous nodes can be the subject of a stored quad. The error is raised
/// before the index is touched, so the dataset is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}, got the {kind} node {node}", kind = .node.kind())]
pub struct UnsupportedNodeType {
    node: Node,
    reason: &'static str,
}

impl UnsupportedNodeType {
    /// Creates a new error for the offending `node`.
    pub fn new(node: Node, reason: &'static str) -> Self {
        Self { node, reason }
    }

    /// Creates the error raised for a subject of a disallowed kind.
    pub fn subject(node: Node) -> Self {
        Self::new(node, SUBJECT_KIND_REASON)
    }

    /// Returns the offending node.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Returns the reason of the failure.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}
