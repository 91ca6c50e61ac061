use crate::{IriNode, Node};
use std::fmt::{Display, Formatter};

/// An RDF quad.
///
/// Only the subject of a stored quad is restricted to IRI, blank and anonymous nodes. The graph
/// is usually an IRI node, but blank and anonymous graphs are stored and exported as well.
///
/// Quads are also used as patterns, in which case any position except the property may hold a
/// [VariableNode](crate::VariableNode).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    pub graph: Node,
    pub subject: Node,
    pub property: IriNode,
    pub object: Node,
}

impl Quad {
    pub fn new(
        graph: impl Into<Node>,
        subject: impl Into<Node>,
        property: IriNode,
        object: impl Into<Node>,
    ) -> Self {
        Self {
            graph: graph.into(),
            subject: subject.into(),
            property,
            object: object.into(),
        }
    }
}

impl Display for Quad {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} .",
            self.subject, self.property, self.object, self.graph
        )
    }
}
