//! The node/edge storage and mutation engine.
//!
//! [`GraphStore`] owns every node and enforces the two structural
//! invariants: edges are directed (never mirrored) and per origin node the
//! edge destinations form a set (duplicate links are rejected). Metadata
//! lifecycle is handled through release hooks supplied at construction,
//! invoked exactly once per owning entity when that entity goes away.

mod arena;
mod error;

use std::fmt;

use tracing::trace;

use crate::types::{Edge, Node, NodeId};

use arena::NodeArena;
pub use error::{GraphError, GraphResult, LinkRejected};

type ReleaseFn<T> = Box<dyn FnMut(T)>;

/// The release hooks configured for a store.
///
/// A missing hook means the payload is simply dropped.
struct ReleaseHooks<N, E> {
    node: Option<ReleaseFn<N>>,
    edge: Option<ReleaseFn<E>>,
}

impl<N, E> ReleaseHooks<N, E> {
    fn none() -> Self {
        Self { node: None, edge: None }
    }

    fn release_node(&mut self, metadata: N) {
        match &mut self.node {
            Some(hook) => hook(metadata),
            None => drop(metadata),
        }
    }

    fn release_edge(&mut self, metadata: E) {
        match &mut self.edge {
            Some(hook) => hook(metadata),
            None => drop(metadata),
        }
    }
}

/// Builder for [`GraphStore`].
///
/// Release hooks are fixed for the lifetime of the store; there is no way to
/// swap them after construction.
///
/// # Example
///
/// ```
/// use backbone::GraphStore;
///
/// let mut store: GraphStore<String, u32> = GraphStore::builder()
///     .on_node_release(|label| println!("dropping node {label}"))
///     .on_edge_release(|weight| println!("dropping edge weight {weight}"))
///     .build();
///
/// let a = store.create("a".to_owned());
/// store.destroy(a);
/// ```
#[must_use]
pub struct GraphStoreBuilder<N, E> {
    hooks: ReleaseHooks<N, E>,
}

impl<N, E> GraphStoreBuilder<N, E> {
    /// Set the hook invoked with each node's metadata when the node is
    /// destroyed.
    pub fn on_node_release(mut self, hook: impl FnMut(N) + 'static) -> Self {
        self.hooks.node = Some(Box::new(hook));
        self
    }

    /// Set the hook invoked with each edge's metadata when the edge is
    /// removed (by `unlink` or by destroying its origin node).
    pub fn on_edge_release(mut self, hook: impl FnMut(E) + 'static) -> Self {
        self.hooks.edge = Some(Box::new(hook));
        self
    }

    /// Build the store.
    pub fn build(self) -> GraphStore<N, E> {
        GraphStore { nodes: NodeArena::new(), hooks: self.hooks }
    }
}

/// Owner of a set of nodes and their outgoing edges.
///
/// `N` is the node metadata payload type, `E` the edge payload type. The
/// store never interprets either; higher layers attach their own semantics
/// (labels, weights, visited flags) and may register release hooks through
/// [`GraphStore::builder`] to observe payload teardown.
///
/// Nodes are referenced through [`NodeId`] handles issued by
/// [`create`](Self::create). There is no registry or lookup by name: a node
/// is reachable only through handles the caller holds. Destroying a node
/// never scans other nodes for edges pointing at it, so those edges keep a
/// stale destination handle — avoiding that is the caller's responsibility,
/// exactly as with any other weak reference.
///
/// # Example
///
/// ```
/// use backbone::GraphStore;
///
/// let mut store: GraphStore<&str, u32> = GraphStore::new();
/// let a = store.create("a");
/// let b = store.create("b");
///
/// store.link(a, b, 7).unwrap();
/// assert!(store.linked(a, b));
/// assert!(!store.linked(b, a)); // never bidirectional
///
/// assert_eq!(store.unlink(a, b), 1);
/// assert_eq!(store.node(a).unwrap().edge_count(), 0);
/// ```
pub struct GraphStore<N, E> {
    nodes: NodeArena<Node<N, E>>,
    hooks: ReleaseHooks<N, E>,
}

impl<N, E> GraphStore<N, E> {
    /// Create a store whose payloads are released by plain drop.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: NodeArena::new(), hooks: ReleaseHooks::none() }
    }

    /// Start building a store with explicit release hooks.
    pub fn builder() -> GraphStoreBuilder<N, E> {
        GraphStoreBuilder { hooks: ReleaseHooks::none() }
    }

    /// Create a node with an empty edge list and the given metadata.
    ///
    /// Returns the handle the node is addressed by from now on. Handles of
    /// destroyed nodes may be reissued by later calls, so a stale handle
    /// held past [`destroy`](Self::destroy) can silently alias a new node.
    pub fn create(&mut self, metadata: N) -> NodeId {
        let id = self.nodes.allocate(Node::new(metadata));
        trace!(node = id.as_u32(), "created node");
        id
    }

    /// Read access to a node, or `None` for a stale handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<N, E>> {
        self.nodes.get(id)
    }

    /// Whether `id` resolves to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// The node's metadata, or `None` for a stale handle.
    #[must_use]
    pub fn metadata(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(id).map(Node::metadata)
    }

    /// Mutable access to the node's metadata, or `None` for a stale handle.
    pub fn metadata_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(id).map(Node::metadata_mut)
    }

    /// Whether an edge `origin -> destination` exists.
    ///
    /// Linear scan of `origin`'s edge list; `false` when `origin` is stale.
    /// Never consults `destination`'s own edges.
    #[must_use]
    pub fn linked(&self, origin: NodeId, destination: NodeId) -> bool {
        self.nodes.get(origin).is_some_and(|node| node.links_to(destination))
    }

    /// Add a directed edge `origin -> destination` carrying `metadata`.
    ///
    /// The new edge is appended at the end of `origin`'s edge list, so link
    /// order is preserved and observable by index. Self-loops are permitted
    /// and produce exactly one self-edge.
    ///
    /// # Errors
    ///
    /// Returns [`LinkRejected`] without touching the store when either
    /// handle is stale ([`GraphError::UnknownNode`]) or the edge already
    /// exists ([`GraphError::DuplicateEdge`]). The rejection carries the
    /// metadata back to the caller.
    pub fn link(
        &mut self,
        origin: NodeId,
        destination: NodeId,
        metadata: E,
    ) -> Result<(), LinkRejected<E>> {
        if !self.nodes.contains(destination) {
            return Err(LinkRejected::new(GraphError::UnknownNode(destination), metadata));
        }
        let Some(node) = self.nodes.get_mut(origin) else {
            return Err(LinkRejected::new(GraphError::UnknownNode(origin), metadata));
        };
        if node.links_to(destination) {
            return Err(LinkRejected::new(
                GraphError::DuplicateEdge { origin, destination },
                metadata,
            ));
        }
        node.push_edge(Edge::new(origin, destination, metadata));
        trace!(origin = origin.as_u32(), destination = destination.as_u32(), "linked nodes");
        Ok(())
    }

    /// Remove every edge `origin -> destination`, releasing each removed
    /// edge's metadata through the edge hook.
    ///
    /// Surviving edges keep their relative order. Returns the number of
    /// edges removed; 0 when no such edge exists or `origin` is stale —
    /// neither is an error. Removing `origin -> destination` never affects
    /// `destination -> origin`.
    pub fn unlink(&mut self, origin: NodeId, destination: NodeId) -> usize {
        let Some(node) = self.nodes.get_mut(origin) else {
            return 0;
        };
        let hooks = &mut self.hooks;
        let removed = node.remove_edges_to(destination, |metadata| hooks.release_edge(metadata));
        if removed > 0 {
            trace!(
                origin = origin.as_u32(),
                destination = destination.as_u32(),
                removed,
                "unlinked nodes"
            );
        }
        removed
    }

    /// Destroy a node: release every outgoing edge's metadata, then the
    /// node's own metadata, and free the handle.
    ///
    /// Returns `false` for a stale handle (already destroyed), leaving the
    /// store untouched. Edges owned by *other* nodes that point at the
    /// destroyed node are not touched or validated; their destination
    /// handles go stale.
    pub fn destroy(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.deallocate(id) else {
            return false;
        };
        let (metadata, edges) = node.into_parts();
        for edge in edges {
            self.hooks.release_edge(edge.into_metadata());
        }
        self.hooks.release_node(metadata);
        trace!(node = id.as_u32(), "destroyed node");
        true
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.live_count()
    }

    /// Whether the store holds no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<N, E> Default for GraphStore<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> fmt::Debug for GraphStore<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStore").field("nodes", &self.nodes.live_count()).finish()
    }
}

impl<N, E> Drop for GraphStore<N, E> {
    /// Release every surviving node the same way [`destroy`](Self::destroy)
    /// would: edges first, then the node's own metadata.
    fn drop(&mut self) {
        for node in self.nodes.drain() {
            let (metadata, edges) = node.into_parts();
            for edge in edges {
                self.hooks.release_edge(edge.into_metadata());
            }
            self.hooks.release_node(metadata);
        }
    }
}
