use crate::io::ExportError;
use crate::memory::MemDataset;
use oxrdfio::{RdfFormat, RdfSerializer};
use std::io::Write;
use xowl_model::{IriNode, Node, Quad};

/// Selects the quads of a dataset. Absent nodes match everything.
#[derive(Debug, Clone, Default)]
pub struct QuadPattern {
    pub graph: Option<Node>,
    pub subject: Option<Node>,
    pub property: Option<IriNode>,
    pub object: Option<Node>,
}

/// Converts a stored quad into an [oxrdf::Quad].
///
/// Quads in `default_graph` are put in the default graph. Anonymous nodes become blank nodes
/// labelled by their hex-encoded node id.
///
/// # Errors
///
/// Returns an error if a node cannot be represented, for example a variable or a literal in
/// subject position.
pub fn to_oxrdf_quad(quad: &Quad, default_graph: &IriNode) -> Result<oxrdf::Quad, ExportError> {
    let subject = match &quad.subject {
        Node::Iri(node) => oxrdf::Subject::NamedNode(named_node(node)),
        Node::Blank(_) | Node::Anonymous(_) => oxrdf::Subject::BlankNode(blank_node(&quad.subject)?),
        node @ (Node::Literal(_) | Node::Variable(_)) => {
            return Err(ExportError::unsupported(node, "subject"));
        }
    };
    let object = match &quad.object {
        Node::Iri(node) => oxrdf::Term::NamedNode(named_node(node)),
        Node::Blank(_) | Node::Anonymous(_) => oxrdf::Term::BlankNode(blank_node(&quad.object)?),
        Node::Literal(literal) => oxrdf::Term::Literal(match literal.language() {
            Some(language) => {
                oxrdf::Literal::new_language_tagged_literal(literal.lexical(), language)?
            }
            None => oxrdf::Literal::new_typed_literal(
                literal.lexical(),
                oxrdf::NamedNode::new_unchecked(literal.datatype()),
            ),
        }),
        node @ Node::Variable(_) => return Err(ExportError::unsupported(node, "object")),
    };
    let graph_name = match &quad.graph {
        Node::Iri(node) if node == default_graph => oxrdf::GraphName::DefaultGraph,
        Node::Iri(node) => oxrdf::GraphName::NamedNode(named_node(node)),
        Node::Blank(_) | Node::Anonymous(_) => {
            oxrdf::GraphName::BlankNode(blank_node(&quad.graph)?)
        }
        node @ (Node::Literal(_) | Node::Variable(_)) => {
            return Err(ExportError::unsupported(node, "graph name"));
        }
    };
    Ok(oxrdf::Quad::new(
        subject,
        named_node(&quad.property),
        object,
        graph_name,
    ))
}

/// Serializes the quads of `dataset` matching `pattern` to `writer`.
///
/// # Errors
///
/// Returns an error if a quad cannot be exported or written. Formats without support for named
/// graphs fail on the first quad that is not in the default graph.
pub fn dump<W: Write>(
    dataset: &MemDataset,
    pattern: &QuadPattern,
    format: RdfFormat,
    writer: W,
) -> Result<W, ExportError> {
    let default_graph = dataset.nodes().default_graph();
    let mut serializer = RdfSerializer::from_format(format).for_writer(writer);
    for quad in dataset.get_all(
        pattern.graph.as_ref(),
        pattern.subject.as_ref(),
        pattern.property.as_ref(),
        pattern.object.as_ref(),
    ) {
        serializer.serialize_quad(&to_oxrdf_quad(&quad, default_graph)?)?;
    }
    Ok(serializer.finish()?)
}

fn named_node(node: &IriNode) -> oxrdf::NamedNode {
    oxrdf::NamedNode::new_unchecked(node.as_str())
}

/// Blank nodes are labelled `n{ordinal}` and anonymous nodes `a{hex node id}`, so the two kinds
/// never share a label and any node id yields a valid one.
fn blank_node(node: &Node) -> Result<oxrdf::BlankNode, ExportError> {
    match node {
        Node::Blank(node) => Ok(oxrdf::BlankNode::new_unchecked(format!("n{}", node.ordinal()))),
        Node::Anonymous(node) => Ok(oxrdf::BlankNode::new_unchecked(format!(
            "a{}",
            hex::encode(node.node_id())
        ))),
        node => Err(ExportError::unsupported(node, "blank node")),
    }
}
