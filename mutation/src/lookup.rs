//! Scoped single-node lookups shared by the operations.

use nset_core::{Field, NodeId, NodeInterval};
use nset_store::{Predicate, TreeScope, TreeStore};

use crate::error::{MutationError, MutationResult};

/// Read a node's current interval, if it exists in scope.
pub(crate) fn fetch<S, D>(store: &S, scope: &D, id: NodeId) -> MutationResult<Option<NodeInterval>>
where
    S: TreeStore + ?Sized,
    D: TreeScope + ?Sized,
{
    Ok(store.find_one(&scope.apply(Predicate::all().eq(Field::Id, id)), None)?)
}

/// Check that `node` still exists with exactly the recorded position.
pub(crate) fn confirm<S, D>(store: &S, scope: &D, node: &NodeInterval) -> MutationResult<()>
where
    S: TreeStore + ?Sized,
    D: TreeScope + ?Sized,
{
    match fetch(store, scope, node.id)? {
        None => Err(MutationError::NodeNotFound(node.id)),
        Some(stored) if !stored.same_position(node) => {
            Err(MutationError::stale_interval(*node, stored))
        }
        Some(_) => Ok(()),
    }
}
