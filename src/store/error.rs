//! Error types for graph store operations.

use std::fmt;

use thiserror::Error;

use crate::types::NodeId;

/// Errors that can occur in graph store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node handle did not resolve to a live node.
    #[error("unknown node handle: {0}")]
    UnknownNode(NodeId),

    /// An edge between the two nodes already exists.
    #[error("edge already exists: {origin} -> {destination}")]
    DuplicateEdge {
        /// The origin of the rejected edge.
        origin: NodeId,
        /// The destination of the rejected edge.
        destination: NodeId,
    },
}

/// Result type for graph store operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// A rejected [`link`](crate::store::GraphStore::link) call.
///
/// The store's state is untouched when a link is rejected, and the edge
/// metadata that would have been attached is handed back here instead of
/// being dropped, so the caller can recover or reuse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRejected<E> {
    error: GraphError,
    metadata: E,
}

impl<E> LinkRejected<E> {
    pub(crate) fn new(error: GraphError, metadata: E) -> Self {
        Self { error, metadata }
    }

    /// Why the link was rejected.
    #[must_use]
    pub fn error(&self) -> GraphError {
        self.error
    }

    /// Recover the edge metadata that was not attached.
    #[must_use]
    pub fn into_metadata(self) -> E {
        self.metadata
    }

    /// Split into the rejection reason and the recovered metadata.
    #[must_use]
    pub fn into_parts(self) -> (GraphError, E) {
        (self.error, self.metadata)
    }
}

impl<E> fmt::Display for LinkRejected<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "link rejected: {}", self.error)
    }
}

impl<E: fmt::Debug> std::error::Error for LinkRejected<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GraphError::UnknownNode(NodeId::new(42));
        assert!(err.to_string().contains("42"));

        let err = GraphError::DuplicateEdge {
            origin: NodeId::new(1),
            destination: NodeId::new(2),
        };
        assert!(err.to_string().contains("1 -> 2"));
    }

    #[test]
    fn rejection_recovers_metadata() {
        let rejected = LinkRejected::new(GraphError::UnknownNode(NodeId::new(9)), "payload");
        assert_eq!(rejected.error(), GraphError::UnknownNode(NodeId::new(9)));
        assert!(rejected.to_string().contains("unknown node"));
        assert_eq!(rejected.into_metadata(), "payload");
    }
}
