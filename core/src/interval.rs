//! The node interval record.

use crate::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of one node's position in a nested set tree.
///
/// This is plain data: it never changes after construction. A record
/// describes the node as it was when it was read; after any mutation of the
/// same tree the caller has to read it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeInterval {
    /// Identity of the node.
    pub id: NodeId,
    /// Identity of the parent node; `None` for a root.
    pub parent_id: Option<NodeId>,
    /// Left boundary (>= 1).
    pub left: i64,
    /// Right boundary (> left).
    pub right: i64,
    /// Depth below the root (root = 0).
    pub level: i64,
}

impl NodeInterval {
    pub fn new(id: NodeId, parent_id: Option<NodeId>, left: i64, right: i64, level: i64) -> Self {
        Self {
            id,
            parent_id,
            left,
            right,
            level,
        }
    }

    /// Number of positions the node and its descendants occupy.
    pub fn width(&self) -> i64 {
        self.right - self.left + 1
    }

    /// Returns true if the node has no descendants.
    pub fn is_leaf(&self) -> bool {
        self.right == self.left + 1
    }

    /// Returns true if the node is a root of its tree.
    pub fn is_root(&self) -> bool {
        self.level == 0
    }

    /// Number of descendants, derived from the interval alone.
    pub fn descendant_count(&self) -> i64 {
        (self.right - self.left - 1) / 2
    }

    /// Returns true if `other` is a proper descendant of this node.
    pub fn contains(&self, other: &NodeInterval) -> bool {
        self.left < other.left && self.right > other.right
    }

    /// Returns true if `other` is this node or one of its descendants.
    pub fn encloses(&self, other: &NodeInterval) -> bool {
        self.left <= other.left && self.right >= other.right
    }

    /// Returns true if both records describe the same position.
    pub fn same_position(&self, other: &NodeInterval) -> bool {
        self.left == other.left && self.right == other.right && self.level == other.level
    }
}

impl fmt::Display for NodeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            self.id, self.left, self.right, self.level
        )?;
        if let Some(parent) = self.parent_id {
            write!(f, " <- {}", parent)?;
        }
        Ok(())
    }
}
