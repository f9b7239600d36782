//! REMOVE operations - single node (children promoted) and whole subtree.
//!
//! Every predicate below is computed from the interval passed in, i.e. from
//! the coordinates the tree had before the first statement ran. The steps
//! must run in this order and must not re-read the target in between.

use nset_core::{Field, NodeInterval};
use nset_store::{OrderBy, Predicate, RangeUpdate, TreeScope, TreeStore};

use crate::error::{MutationError, MutationResult};
use crate::lookup;
use crate::result::{MutationOutcome, Removal};
use crate::shift;

/// Positions freed by removing one node: its two boundary markers.
const SINGLE_NODE_WIDTH: i64 = 2;

/// Remove exactly one node and hand its children to its parent.
pub fn execute_remove_single<S, D>(
    store: &mut S,
    scope: &D,
    node: &NodeInterval,
) -> MutationResult<MutationOutcome>
where
    S: TreeStore + ?Sized,
    D: TreeScope + ?Sized,
{
    tracing::debug!(%node, "removing single node");
    lookup::confirm(store, scope, node)?;

    // 1. Resolve the children's new parent before anything is written.
    let new_parent = if node.level > 0 {
        Some(find_parent(store, scope, node)?.id)
    } else {
        None
    };

    // 2. Re-parent the immediate children.
    let children = Predicate::all()
        .ge(Field::Left, node.left)
        .le(Field::Right, node.right)
        .eq(Field::Level, node.level + 1);
    let promoted = store.range_update(
        &RangeUpdate::new(scope.apply(children)).set(Field::Parent, new_parent),
    )?;

    // 3. Delete the node itself.
    let removed = store.range_delete(&scope.apply(Predicate::all().eq(Field::Id, node.id)))?;

    // 4. Pull every former descendant up one position and one level.
    let descendants = Predicate::all()
        .gt(Field::Left, node.left)
        .lt(Field::Right, node.right);
    store.range_update(
        &RangeUpdate::new(scope.apply(descendants))
            .add(Field::Left, -1)
            .add(Field::Right, -1)
            .add(Field::Level, -1),
    )?;

    // 5. Close the gap for everything after the node and its ancestors' right bounds.
    shift::shift_bounds(store, scope, node.right, -SINGLE_NODE_WIDTH)?;

    tracing::debug!(node = %node.id, promoted, ?new_parent, "single node removed");
    Ok(MutationOutcome::Removed(Removal {
        node: node.id,
        removed,
        promoted,
        width: SINGLE_NODE_WIDTH,
    }))
}

/// Remove a node together with all of its descendants.
pub fn execute_remove_subtree<S, D>(
    store: &mut S,
    scope: &D,
    node: &NodeInterval,
) -> MutationResult<MutationOutcome>
where
    S: TreeStore + ?Sized,
    D: TreeScope + ?Sized,
{
    tracing::debug!(%node, "removing subtree");
    lookup::confirm(store, scope, node)?;

    // 1. Delete the whole interval.
    let subtree = Predicate::all()
        .ge(Field::Left, node.left)
        .le(Field::Right, node.right);
    let removed = store.range_delete(&scope.apply(subtree))?;

    // 2. Close the gap by the subtree's full width.
    let width = node.width();
    shift::shift_bounds(store, scope, node.right, -width)?;

    tracing::debug!(node = %node.id, removed, width, "subtree removed");
    Ok(MutationOutcome::Removed(Removal {
        node: node.id,
        removed,
        promoted: 0,
        width,
    }))
}

/// The tightest ancestor one level up.
fn find_parent<S, D>(store: &S, scope: &D, node: &NodeInterval) -> MutationResult<NodeInterval>
where
    S: TreeStore + ?Sized,
    D: TreeScope + ?Sized,
{
    let ancestor = Predicate::all()
        .lt(Field::Left, node.left)
        .gt(Field::Right, node.right)
        .eq(Field::Level, node.level - 1);
    match store.find_one(&scope.apply(ancestor), Some(OrderBy::desc(Field::Left)))? {
        Some(parent) => Ok(parent),
        None => {
            tracing::warn!(%node, "no parent found for non-root node");
            Err(MutationError::structural_corruption(
                node.id,
                format!(
                    "no ancestor at level {} although the node's level is greater than 0",
                    node.level - 1
                ),
            ))
        }
    }
}
