//! Edge (directed connection) types for the graph.

use super::NodeId;

/// A directed, unidirectional edge from one node to another.
///
/// An edge is owned exclusively by its origin node and is never addressable
/// on its own: it can only be reached through the origin node's ordered edge
/// list. The `to` handle is a weak reference — it does not keep the
/// destination node alive.
///
/// `E` is the caller-defined edge metadata payload (e.g. a weight or label).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<E> {
    from: NodeId,
    to: NodeId,
    metadata: E,
}

impl<E> Edge<E> {
    pub(crate) fn new(from: NodeId, to: NodeId, metadata: E) -> Self {
        Self { from, to, metadata }
    }

    /// Handle of the node this edge points *from* (its owner).
    #[inline]
    #[must_use]
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// Handle of the node this edge points *to*.
    #[inline]
    #[must_use]
    pub fn to(&self) -> NodeId {
        self.to
    }

    /// The edge's metadata payload.
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &E {
        &self.metadata
    }

    /// Consume the edge, yielding its metadata for release.
    pub(crate) fn into_metadata(self) -> E {
        self.metadata
    }
}
