//! MOVE operation - relocate a node with its whole subtree.
//!
//! Three shifts: open a gap of the subtree's width at the destination,
//! translate the subtree into it, close the hole it left behind.

use nset_core::{Field, NodeInterval};
use nset_store::{Predicate, RangeUpdate, TreeScope, TreeStore};

use crate::error::{MutationError, MutationResult};
use crate::lookup;
use crate::position::Position;
use crate::result::{MutationOutcome, Relocation};
use crate::shift;

/// Move `node` and its descendants to `position` relative to `target`.
pub fn execute_move<S, D>(
    store: &mut S,
    scope: &D,
    node: &NodeInterval,
    target: &NodeInterval,
    position: Position,
) -> MutationResult<MutationOutcome>
where
    S: TreeStore + ?Sized,
    D: TreeScope + ?Sized,
{
    tracing::debug!(%node, %target, ?position, "moving subtree");
    if node.encloses(target) {
        return Err(MutationError::invalid_move(node.id, target.id));
    }
    lookup::confirm(store, scope, node)?;
    lookup::confirm(store, scope, target)?;

    let placement = position.placement(target);
    let width = node.width();
    let level_delta = placement.level - node.level;

    // 1. Open the gap.
    shift::shift_bounds(store, scope, placement.left - 1, width)?;

    // The subtree itself moved along if it sat past the destination.
    let (left, right) = if node.left >= placement.left {
        (node.left + width, node.right + width)
    } else {
        (node.left, node.right)
    };

    // 2. Translate the subtree into the gap.
    let offset = placement.left - left;
    let subtree = Predicate::all().ge(Field::Left, left).le(Field::Right, right);
    let moved = store.range_update(
        &RangeUpdate::new(scope.apply(subtree))
            .add(Field::Left, offset)
            .add(Field::Right, offset)
            .add(Field::Level, level_delta),
    )?;

    // 3. Close the hole at the old position.
    shift::shift_bounds(store, scope, right, -width)?;

    store.range_update(
        &RangeUpdate::new(scope.apply(Predicate::all().eq(Field::Id, node.id)))
            .set(Field::Parent, placement.parent_id),
    )?;

    Ok(MutationOutcome::Moved(Relocation {
        node: node.id,
        new_parent: placement.parent_id,
        moved,
        level_delta,
    }))
}
