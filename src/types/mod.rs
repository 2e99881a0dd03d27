//! Core data types for the graph substrate.
//!
//! This module defines the types that represent nodes, edges, and node
//! handles. Metadata payloads are generic: the embedding application decides
//! what a node or edge carries (labels, weights, visited flags) and the
//! substrate never looks inside.

mod edge;
mod id;
mod node;

pub use edge::Edge;
pub use id::NodeId;
pub use node::Node;
