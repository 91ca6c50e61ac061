use oxrdf::{IriParseError, LanguageTagParseError};
use oxrdfio::RdfParseError;
use std::path::PathBuf;
use thiserror::Error;
use xowl_model::{Node, UnsupportedNodeType};

/// An error raised while loading an RDF document into a dataset.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error(transparent)]
    Parse(#[from] RdfParseError),
    #[error("Invalid base IRI: {0}")]
    BaseIri(#[from] IriParseError),
    #[error("Cannot guess the RDF format of {}", .0.display())]
    UnknownFormat(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    UnsupportedNode(#[from] UnsupportedNodeType),
}

/// An error raised while exporting the quads of a dataset.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("The {kind} node {node} cannot be exported as {position}", kind = .node.kind())]
    UnsupportedNode { node: Node, position: &'static str },
    #[error(transparent)]
    LanguageTag(#[from] LanguageTagParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub(super) fn unsupported(node: &Node, position: &'static str) -> Self {
        Self::UnsupportedNode {
            node: node.clone(),
            position,
        }
    }
}
