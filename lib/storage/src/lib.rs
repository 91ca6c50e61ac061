#![doc(test(attr(deny(warnings))))]

//! The in-memory quad store of xOWL.
//!
//! The [memory] module contains the store itself: the [NodeManager](memory::NodeManager) that
//! hands out canonical term instances and the [MemDataset](memory::MemDataset) that indexes quads
//! by subject, property, object and graph. The [io] module loads RDF documents into a dataset and
//! exports its quads again.

pub mod io;
pub mod memory;
