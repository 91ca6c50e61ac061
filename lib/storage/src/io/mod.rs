//! Loading RDF documents into a [MemDataset](crate::memory::MemDataset) and exporting its quads.
//!
//! Parsing and serialization are done by [oxrdfio]. Terms are interned through the
//! [NodeManager](crate::memory::NodeManager) of the target dataset while loading.

mod error;
mod export;
mod loader;

pub use error::{ExportError, LoaderError};
pub use export::{dump, to_oxrdf_quad, QuadPattern};
pub use loader::{load, load_file};
pub use oxrdfio::RdfFormat;
