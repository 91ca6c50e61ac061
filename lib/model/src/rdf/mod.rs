mod anon_node;
mod blank_node;
mod iri_node;
mod literal_node;
mod node;
mod variable_node;

pub use anon_node::{AnonNode, WeakAnonNode};
pub use blank_node::BlankNode;
pub use iri_node::{IriNode, WeakIriNode};
pub use literal_node::{LiteralNode, WeakLiteralNode};
pub use node::{Node, NodeKind};
pub use variable_node::VariableNode;

/// Implements equality and hashing by *instance* for a node type wrapping an `Arc`, together with
/// the weak handle used by the node manager to track canonical instances.
macro_rules! identity_node {
    ($node:ident, $weak:ident, $inner:ty) => {
        impl PartialEq for $node {
            fn eq(&self, other: &Self) -> bool {
                std::sync::Arc::ptr_eq(&self.0, &other.0)
            }
        }

        impl Eq for $node {}

        impl std::hash::Hash for $node {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::ptr::hash(std::sync::Arc::as_ptr(&self.0).cast::<u8>(), state);
            }
        }

        impl $node {
            /// Creates a weak handle to this instance that does not keep it alive.
            pub fn downgrade(&self) -> $weak {
                $weak(std::sync::Arc::downgrade(&self.0))
            }
        }

        #[doc = concat!("A weak handle to a [", stringify!($node), "].")]
        #[derive(Debug, Clone)]
        pub struct $weak(std::sync::Weak<$inner>);

        impl $weak {
            /// Returns the node if it is still referenced somewhere.
            pub fn upgrade(&self) -> Option<$node> {
                self.0.upgrade().map($node)
            }

            /// Returns whether the node is still referenced somewhere.
            pub fn is_alive(&self) -> bool {
                self.0.strong_count() > 0
            }
        }
    };
}

pub(crate) use identity_node;
