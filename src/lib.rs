//! Backbone
//!
//! A minimal, reusable directed-graph substrate: nodes connected by
//! directed, unidirectional edges, each node and edge carrying an opaque,
//! caller-owned metadata payload. Backbone is a foundation layer for
//! higher-level graph applications (state machines, dependency graphs) that
//! attach their own semantics via metadata; it deliberately provides no
//! traversal algorithms, no serialization of graph contents, and no
//! bidirectional-edge convenience.
//!
//! # Overview
//!
//! - [`GraphStore`] owns the nodes and enforces the structural invariants:
//!   edges are directed and per origin node the destinations form a set.
//! - [`NodeId`] is the handle a node is addressed by. Nodes are reachable
//!   only through handles the caller holds; there is no registry.
//! - Metadata payloads are generic ([`Node<N, E>`](Node), [`Edge<E>`](Edge))
//!   and released exactly once per owning entity, through hooks supplied at
//!   store construction.
//!
//! # Example
//!
//! ```
//! use backbone::{GraphError, GraphStore};
//!
//! let mut store: GraphStore<&str, u32> = GraphStore::new();
//!
//! let a = store.create("a");
//! let b = store.create("b");
//!
//! // Linking is directional and duplicate links are rejected.
//! store.link(a, b, 7).unwrap();
//! assert!(store.linked(a, b));
//! assert!(!store.linked(b, a));
//!
//! let rejected = store.link(a, b, 8).unwrap_err();
//! assert_eq!(rejected.error(), GraphError::DuplicateEdge { origin: a, destination: b });
//! assert_eq!(rejected.into_metadata(), 8); // payload handed back
//!
//! // Edges are read through the origin node, by index and count.
//! let node = store.node(a).unwrap();
//! assert_eq!(node.edge_count(), 1);
//! assert_eq!(node.edges()[0].to(), b);
//!
//! store.destroy(a);
//! store.destroy(b);
//! assert!(store.is_empty());
//! ```
//!
//! # Destroying nodes
//!
//! Destroying a node never scans other nodes for edges pointing at it:
//! those edges keep a stale destination handle, and a later `create` may
//! reissue the same handle for a different node. Unlinking before
//! destroying is the caller's responsibility, as with the caller-owned
//! weak references this substrate models.
//!
//! # Modules
//!
//! - [`store`] - The storage and mutation engine ([`GraphStore`])
//! - [`types`] - Core data types ([`Node`], [`Edge`], [`NodeId`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod store;
pub mod types;

pub use store::{GraphError, GraphResult, GraphStore, GraphStoreBuilder, LinkRejected};
pub use types::{Edge, Node, NodeId};
