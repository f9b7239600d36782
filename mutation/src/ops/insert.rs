//! INSERT operations - place a new leaf relative to a target, or as a new root.

use nset_core::{Field, NodeId, NodeInterval};
use nset_store::{OrderBy, Predicate, TreeScope, TreeStore};

use crate::error::{MutationError, MutationResult};
use crate::lookup;
use crate::position::Position;
use crate::result::MutationOutcome;
use crate::shift;

/// Positions a new leaf occupies.
const NEW_NODE_WIDTH: i64 = 2;

/// Insert a new leaf `id` at `position` relative to `target`.
pub fn execute_insert<S, D>(
    store: &mut S,
    scope: &D,
    id: NodeId,
    target: &NodeInterval,
    position: Position,
) -> MutationResult<MutationOutcome>
where
    S: TreeStore + ?Sized,
    D: TreeScope + ?Sized,
{
    tracing::debug!(%id, %target, ?position, "inserting node");
    ensure_new(store, id)?;
    lookup::confirm(store, scope, target)?;

    let placement = position.placement(target);

    // Open a gap of two positions starting at the destination.
    shift::shift_bounds(store, scope, placement.left - 1, NEW_NODE_WIDTH)?;

    let node = NodeInterval::new(
        id,
        placement.parent_id,
        placement.left,
        placement.left + 1,
        placement.level,
    );
    store.insert(&node, &scope.tags())?;

    Ok(MutationOutcome::Inserted(node))
}

/// Insert a new root after every existing tree of the scope.
pub fn execute_insert_root<S, D>(store: &mut S, scope: &D, id: NodeId) -> MutationResult<MutationOutcome>
where
    S: TreeStore + ?Sized,
    D: TreeScope + ?Sized,
{
    tracing::debug!(%id, "inserting root");
    ensure_new(store, id)?;

    let last = store.find_one(
        &scope.apply(Predicate::all()),
        Some(OrderBy::desc(Field::Right)),
    )?;
    let left = last.map_or(1, |node| node.right + 1);

    let node = NodeInterval::new(id, None, left, left + 1, 0);
    store.insert(&node, &scope.tags())?;

    Ok(MutationOutcome::Inserted(node))
}

/// A node is new while it has no row (and so no left/right) anywhere in the
/// table. Identities are shared by every scope of a table, so the lookup is
/// not narrowed; it must run before the gap is opened.
fn ensure_new<S>(store: &S, id: NodeId) -> MutationResult<()>
where
    S: TreeStore + ?Sized,
{
    match store.find_one(&Predicate::all().eq(Field::Id, id), None)? {
        Some(_) => Err(MutationError::NodeAlreadyExists(id)),
        None => Ok(()),
    }
}
