//! Placement of inserted and moved nodes.

use nset_core::{NodeId, NodeInterval};

/// Where a node lands relative to a target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Before all existing children of the target.
    FirstChild,
    /// After all existing children of the target.
    LastChild,
    /// Immediately before the target, under the same parent.
    PrevSibling,
    /// Immediately after the target, under the same parent.
    NextSibling,
}

/// Resolved destination, in the coordinates the tree has before the gap opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub left: i64,
    pub parent_id: Option<NodeId>,
    pub level: i64,
}

impl Position {
    /// Returns true if the node becomes a child of the target.
    pub fn is_child(&self) -> bool {
        matches!(self, Position::FirstChild | Position::LastChild)
    }

    pub(crate) fn placement(&self, target: &NodeInterval) -> Placement {
        let left = match self {
            Position::FirstChild => target.left + 1,
            Position::LastChild => target.right,
            Position::PrevSibling => target.left,
            Position::NextSibling => target.right + 1,
        };
        if self.is_child() {
            Placement {
                left,
                parent_id: Some(target.id),
                level: target.level + 1,
            }
        } else {
            Placement {
                left,
                parent_id: target.parent_id,
                level: target.level,
            }
        }
    }
}
