//! Node (vertex) types for the graph.

use super::{Edge, NodeId};

/// A node in the graph: one metadata payload plus an ordered list of the
/// edges it originates.
///
/// The edge list is append-ordered and observable by index. Per origin node
/// the destinations form a set: the store never appends a second edge to a
/// destination that is already present.
///
/// `N` is the caller-defined node metadata payload, `E` the edge payload.
///
/// # Example
///
/// ```
/// use backbone::GraphStore;
///
/// let mut store: GraphStore<&str, ()> = GraphStore::new();
/// let a = store.create("a");
/// let b = store.create("b");
/// store.link(a, b, ()).unwrap();
///
/// let node = store.node(a).unwrap();
/// assert_eq!(node.edge_count(), 1);
/// assert_eq!(node.edges()[0].to(), b);
/// assert_eq!(*node.metadata(), "a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<N, E> {
    metadata: N,
    edges: Vec<Edge<E>>,
}

impl<N, E> Node<N, E> {
    pub(crate) fn new(metadata: N) -> Self {
        Self { metadata, edges: Vec::new() }
    }

    /// Number of outgoing edges.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The outgoing edges in append order.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[Edge<E>] {
        &self.edges
    }

    /// The outgoing edge at `index`, if any.
    #[inline]
    #[must_use]
    pub fn edge(&self, index: usize) -> Option<&Edge<E>> {
        self.edges.get(index)
    }

    /// The node's metadata payload.
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &N {
        &self.metadata
    }

    /// Mutable access to the node's metadata payload.
    #[inline]
    pub fn metadata_mut(&mut self) -> &mut N {
        &mut self.metadata
    }

    /// Whether this node has an edge to `destination`.
    ///
    /// Linear scan over the edge list; not bidirectional.
    #[must_use]
    pub fn links_to(&self, destination: NodeId) -> bool {
        self.edges.iter().any(|edge| edge.to() == destination)
    }

    pub(crate) fn push_edge(&mut self, edge: Edge<E>) {
        self.edges.push(edge);
    }

    /// Remove every edge to `destination`, releasing each removed payload
    /// through `release` before its slot is reclaimed. Survivors keep their
    /// relative order and the allocation shrinks to the new count.
    ///
    /// Written to tolerate duplicate destinations even though the store
    /// never creates them.
    pub(crate) fn remove_edges_to<F>(&mut self, destination: NodeId, mut release: F) -> usize
    where
        F: FnMut(E),
    {
        let before = self.edges.len();
        let mut index = 0;
        while index < self.edges.len() {
            if self.edges[index].to() == destination {
                let edge = self.edges.remove(index);
                release(edge.into_metadata());
            } else {
                index += 1;
            }
        }
        self.edges.shrink_to_fit();
        before - self.edges.len()
    }

    /// Consume the node, yielding its metadata and edges for release.
    pub(crate) fn into_parts(self) -> (N, Vec<Edge<E>>) {
        (self.metadata, self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_has_no_edges() {
        let node: Node<&str, ()> = Node::new("meta");
        assert_eq!(node.edge_count(), 0);
        assert!(node.edges().is_empty());
        assert_eq!(*node.metadata(), "meta");
    }

    #[test]
    fn links_to_is_directional() {
        let mut node: Node<(), ()> = Node::new(());
        node.push_edge(Edge::new(NodeId::new(0), NodeId::new(1), ()));
        assert!(node.links_to(NodeId::new(1)));
        assert!(!node.links_to(NodeId::new(0)));
    }

    #[test]
    fn remove_edges_tolerates_duplicates() {
        // Build a list that violates the no-duplicate invariant on purpose.
        let origin = NodeId::new(0);
        let mut node: Node<(), i32> = Node::new(());
        node.push_edge(Edge::new(origin, NodeId::new(1), 10));
        node.push_edge(Edge::new(origin, NodeId::new(2), 20));
        node.push_edge(Edge::new(origin, NodeId::new(1), 11));
        node.push_edge(Edge::new(origin, NodeId::new(3), 30));

        let mut released = Vec::new();
        let removed = node.remove_edges_to(NodeId::new(1), |meta| released.push(meta));

        assert_eq!(removed, 2);
        assert_eq!(released, vec![10, 11]);
        let survivors: Vec<_> = node.edges().iter().map(|e| e.to().as_u32()).collect();
        assert_eq!(survivors, vec![2, 3]);
    }

    #[test]
    fn metadata_mut_updates_in_place() {
        let mut node: Node<i32, ()> = Node::new(1);
        *node.metadata_mut() = 2;
        assert_eq!(*node.metadata(), 2);
    }
}
