use crate::{AnonNode, BlankNode, IriNode, LiteralNode, VariableNode};
use std::fmt::{Display, Formatter};

/// The kind of a [Node].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Iri,
    Blank,
    Anonymous,
    Literal,
    Variable,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NodeKind::Iri => "IRI",
            NodeKind::Blank => "blank",
            NodeKind::Anonymous => "anonymous",
            NodeKind::Literal => "literal",
            NodeKind::Variable => "variable",
        })
    }
}

/// An RDF term.
///
/// Equality follows the equality of the wrapped node: IRI, anonymous and literal nodes compare by
/// instance, blank nodes by ordinal and variables by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Iri(IriNode),
    Blank(BlankNode),
    Anonymous(AnonNode),
    Literal(LiteralNode),
    Variable(VariableNode),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Iri(_) => NodeKind::Iri,
            Node::Blank(_) => NodeKind::Blank,
            Node::Anonymous(_) => NodeKind::Anonymous,
            Node::Literal(_) => NodeKind::Literal,
            Node::Variable(_) => NodeKind::Variable,
        }
    }

    /// Returns whether this node can be the subject of a stored quad.
    pub fn is_subject_kind(&self) -> bool {
        matches!(self, Node::Iri(_) | Node::Blank(_) | Node::Anonymous(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Node::Variable(_))
    }

    pub fn as_iri(&self) -> Option<&IriNode> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns [None] if the node is a variable and must be treated as a wildcard.
    pub fn as_filter(&self) -> Option<&Node> {
        (!self.is_variable()).then_some(self)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Iri(node) => node.fmt(f),
            Node::Blank(node) => node.fmt(f),
            Node::Anonymous(node) => node.fmt(f),
            Node::Literal(node) => node.fmt(f),
            Node::Variable(node) => node.fmt(f),
        }
    }
}

macro_rules! implement_from {
    ($variant:ident, $t:ty) => {
        impl From<$t> for Node {
            fn from(value: $t) -> Self {
                Node::$variant(value)
            }
        }
    };
}

implement_from!(Iri, IriNode);
implement_from!(Blank, BlankNode);
implement_from!(Anonymous, AnonNode);
implement_from!(Literal, LiteralNode);
implement_from!(Variable, VariableNode);
