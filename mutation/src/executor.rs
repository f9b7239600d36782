//! Tree mutator - coordinates mutation operations.
//!
//! The mutator delegates to specialized operation modules in `ops/`:
//! - `ops/remove.rs` - REMOVE (single node with promotion, whole subtree)
//! - `ops/insert.rs` - INSERT (relative to a target, or as a new root)
//! - `ops/relocate.rs` - MOVE (subtree relocation)
//! - `ops/rebuild.rs` - REBUILD (renumber from parent links)

use nset_core::{NodeId, NodeInterval};
use nset_store::{TreeScope, TreeStore};

use crate::error::{MutationError, MutationResult};
use crate::lookup;
use crate::ops;
use crate::position::Position;
use crate::result::MutationOutcome;

/// Mutation engine bound to one store and one tree scope.
///
/// Holds no state of its own between calls. Intervals passed in must have
/// been read from the store after the last mutation of the same scope.
pub struct TreeMutator<'s, S: ?Sized, D> {
    store: &'s mut S,
    scope: D,
}

impl<'s, S, D> TreeMutator<'s, S, D>
where
    S: TreeStore + ?Sized,
    D: TreeScope,
{
    /// Create a new mutator.
    pub fn new(store: &'s mut S, scope: D) -> Self {
        Self { store, scope }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &*self.store
    }

    /// The active tree scope.
    pub fn scope(&self) -> &D {
        &self.scope
    }

    /// Read the current interval of a node in scope.
    pub fn fetch(&self, id: NodeId) -> MutationResult<NodeInterval> {
        lookup::fetch(&*self.store, &self.scope, id)?.ok_or(MutationError::NodeNotFound(id))
    }

    /// Remove one node; its children move up to its parent (or become roots).
    pub fn remove_single(&mut self, node: &NodeInterval) -> MutationResult<MutationOutcome> {
        ops::execute_remove_single(&mut *self.store, &self.scope, node)
    }

    /// Remove a node and all of its descendants.
    pub fn remove_subtree(&mut self, node: &NodeInterval) -> MutationResult<MutationOutcome> {
        ops::execute_remove_subtree(&mut *self.store, &self.scope, node)
    }

    /// Insert a new leaf relative to `target`.
    pub fn insert(
        &mut self,
        id: NodeId,
        target: &NodeInterval,
        position: Position,
    ) -> MutationResult<MutationOutcome> {
        ops::execute_insert(&mut *self.store, &self.scope, id, target, position)
    }

    /// Insert a new root after all existing trees of the scope.
    pub fn insert_root(&mut self, id: NodeId) -> MutationResult<MutationOutcome> {
        ops::execute_insert_root(&mut *self.store, &self.scope, id)
    }

    /// Move `node` with its subtree relative to `target`.
    pub fn move_node(
        &mut self,
        node: &NodeInterval,
        target: &NodeInterval,
        position: Position,
    ) -> MutationResult<MutationOutcome> {
        ops::execute_move(&mut *self.store, &self.scope, node, target, position)
    }

    /// Recompute every interval of the scope from parent links.
    pub fn rebuild(&mut self) -> MutationResult<MutationOutcome> {
        ops::execute_rebuild(&mut *self.store, &self.scope)
    }
}
