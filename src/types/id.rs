//! Unique identifiers for graph nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to a node owned by a [`GraphStore`](crate::store::GraphStore).
///
/// A `NodeId` is only meaningful to the store that issued it. After the node
/// is destroyed the handle goes stale, and a later `create` may reissue the
/// same id for a different node. Holding a `NodeId` past the node's
/// destruction is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a `NodeId` from a raw u32 value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
