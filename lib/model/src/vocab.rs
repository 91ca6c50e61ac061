//! Vocabularies used by the store.

pub use oxrdf::vocab::{rdf, xsd};

/// The namespace under which the store mints fresh graph-scoped IRIs when no graph is given.
///
/// The IRI itself identifies the default graph of a store.
pub const DEFAULT_GRAPH_NAMESPACE: &str = "http://xowl.org/store/rdfgraph";
