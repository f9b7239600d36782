//! Mutation result types.

use nset_core::{NodeId, NodeInterval};

/// Outcome of a mutation operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// A node was inserted at this position.
    Inserted(NodeInterval),
    /// A node (and possibly its subtree) was removed.
    Removed(Removal),
    /// A subtree was relocated.
    Moved(Relocation),
    /// Left/right/level were recomputed from parent links.
    Rebuilt { renumbered: usize },
}

impl MutationOutcome {
    /// Get the inserted node if this is an Inserted result.
    pub fn inserted(&self) -> Option<NodeInterval> {
        match self {
            MutationOutcome::Inserted(node) => Some(*node),
            _ => None,
        }
    }

    /// Get removed node count.
    pub fn removed_nodes(&self) -> usize {
        match self {
            MutationOutcome::Removed(r) => r.removed,
            _ => 0,
        }
    }

    /// Get moved node count.
    pub fn moved_nodes(&self) -> usize {
        match self {
            MutationOutcome::Moved(m) => m.moved,
            _ => 0,
        }
    }
}

/// Result of a single-node or subtree removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    /// The node the removal was issued for.
    pub node: NodeId,
    /// Rows deleted.
    pub removed: usize,
    /// Former children re-parented (single-node removal only).
    pub promoted: usize,
    /// Positions freed; every boundary past the node moved down by this much.
    pub width: i64,
}

/// Result of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    pub node: NodeId,
    pub new_parent: Option<NodeId>,
    /// Rows that travelled with the node (the node included).
    pub moved: usize,
    /// Change applied to the level of every moved row.
    pub level_delta: i64,
}
