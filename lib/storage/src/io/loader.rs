use crate::io::LoaderError;
use crate::memory::{MemDataset, NodeManager};
use oxrdfio::{RdfFormat, RdfParser};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;
use xowl_model::{BlankNode, Changeset, IriNode, Node, Quad};

/// Parses an RDF document and adds all its quads to `dataset`.
///
/// Quads in the default graph of the document are put in `graph`, which must be a node of the
/// dataset's [NodeManager], or in the default graph of the dataset if no graph is given. Every
/// blank node label of the document is mapped to a fresh blank node. All quads are added as one
/// changeset, so listeners are notified once.
///
/// Returns the number of parsed quads.
///
/// # Errors
///
/// Returns an error if the document is invalid or cannot be read. The dataset is left unchanged
/// in that case.
pub fn load(
    dataset: &mut MemDataset,
    reader: impl Read,
    format: RdfFormat,
    base_iri: Option<&str>,
    graph: Option<&IriNode>,
) -> Result<usize, LoaderError> {
    let mut parser = RdfParser::from_format(format);
    if let Some(base_iri) = base_iri {
        parser = parser.with_base_iri(base_iri)?;
    }

    let default_graph = graph.unwrap_or(dataset.nodes().default_graph()).clone();
    let mut importer = Importer {
        nodes: dataset.nodes_mut(),
        blanks: FxHashMap::default(),
        default_graph: Node::Iri(default_graph),
    };
    let quads = parser
        .for_reader(reader)
        .map(|quad| quad.map(|quad| importer.quad(quad)))
        .collect::<Result<Vec<_>, _>>()?;

    let count = quads.len();
    debug!("Parsed {count} quads from a {format} document");
    dataset.insert(&Changeset::from_added(quads))?;
    Ok(count)
}

/// Loads the file at `path`, guessing its format from the file extension.
///
/// # Errors
///
/// See [load]. Also fails if the extension does not name a known RDF format.
pub fn load_file(
    dataset: &mut MemDataset,
    path: &Path,
    base_iri: Option<&str>,
    graph: Option<&IriNode>,
) -> Result<usize, LoaderError> {
    let format = path
        .extension()
        .and_then(|extension| extension.to_str())
        .and_then(RdfFormat::from_extension)
        .ok_or_else(|| LoaderError::UnknownFormat(path.to_path_buf()))?;
    let file = File::open(path)?;
    load(dataset, BufReader::new(file), format, base_iri, graph)
}

/// Converts parsed quads into canonical nodes.
struct Importer<'a> {
    nodes: &'a mut NodeManager,
    /// Blank nodes by document label.
    blanks: FxHashMap<String, BlankNode>,
    default_graph: Node,
}

impl Importer<'_> {
    fn quad(&mut self, quad: oxrdf::Quad) -> Quad {
        let subject = match quad.subject {
            oxrdf::Subject::NamedNode(node) => self.iri(&node),
            oxrdf::Subject::BlankNode(node) => self.blank(node),
        };
        let object = match quad.object {
            oxrdf::Term::NamedNode(node) => self.iri(&node),
            oxrdf::Term::BlankNode(node) => self.blank(node),
            oxrdf::Term::Literal(literal) => Node::Literal(self.nodes.get_literal_node(
                literal.value(),
                literal.datatype().as_str(),
                literal.language(),
            )),
        };
        let graph = match quad.graph_name {
            oxrdf::GraphName::NamedNode(node) => self.iri(&node),
            oxrdf::GraphName::BlankNode(node) => self.blank(node),
            oxrdf::GraphName::DefaultGraph => self.default_graph.clone(),
        };
        Quad {
            graph,
            subject,
            property: self.nodes.get_iri_node(quad.predicate.as_str()),
            object,
        }
    }

    fn iri(&mut self, node: &oxrdf::NamedNode) -> Node {
        Node::Iri(self.nodes.get_iri_node(node.as_str()))
    }

    fn blank(&mut self, node: oxrdf::BlankNode) -> Node {
        let nodes = &mut self.nodes;
        let blank = *self
            .blanks
            .entry(node.into_string())
            .or_insert_with(|| nodes.get_blank_node());
        Node::Blank(blank)
    }
}
