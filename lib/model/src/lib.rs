//! The RDF data model of the xOWL store.
//!
//! Terms of this crate use *identity* semantics: two [IriNode]s are equal only if they are the
//! same instance. Canonical instances are handed out by the node manager of the storage layer,
//! which allows the index structures to compare nodes by a single pointer comparison.

mod change;
mod error;
mod quad;
mod rdf;
pub mod vocab;

pub use change::*;
pub use error::*;
pub use quad::*;
pub use rdf::*;
