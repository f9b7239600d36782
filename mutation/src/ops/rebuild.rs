//! REBUILD operation - recompute left/right/level from parent links.
//!
//! Used to repair a scope whose intervals were corrupted (or never set)
//! while its parent links are still trustworthy. Siblings keep their current
//! relative order by `left`, ties broken by id.

use nset_core::{Field, NodeId, NodeInterval};
use nset_store::{OrderBy, Predicate, RangeUpdate, TreeScope, TreeStore};
use std::collections::HashMap;

use crate::error::{MutationError, MutationResult};
use crate::result::MutationOutcome;

enum Frame {
    Enter(NodeId, i64),
    Exit(NodeId),
}

/// Renumber every node of the scope depth-first from its parent links.
pub fn execute_rebuild<S, D>(store: &mut S, scope: &D) -> MutationResult<MutationOutcome>
where
    S: TreeStore + ?Sized,
    D: TreeScope + ?Sized,
{
    let nodes = store.select(&scope.apply(Predicate::all()), Some(OrderBy::asc(Field::Left)))?;
    tracing::debug!(nodes = nodes.len(), "rebuilding tree");

    let current: HashMap<NodeId, NodeInterval> = nodes.iter().map(|n| (n.id, *n)).collect();
    let mut children: HashMap<Option<NodeId>, Vec<NodeId>> = HashMap::new();
    for node in &nodes {
        if let Some(parent) = node.parent_id {
            if !current.contains_key(&parent) {
                return Err(MutationError::structural_corruption(
                    node.id,
                    format!("parent {} does not exist in this tree", parent),
                ));
            }
        }
        children.entry(node.parent_id).or_default().push(node.id);
    }

    let mut renumbered = Vec::with_capacity(nodes.len());
    let mut entered: HashMap<NodeId, (i64, i64)> = HashMap::new();
    let mut counter = 0;
    let mut stack: Vec<Frame> = children
        .get(&None)
        .into_iter()
        .flatten()
        .rev()
        .map(|root| Frame::Enter(*root, 0))
        .collect();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(id, level) => {
                counter += 1;
                entered.insert(id, (counter, level));
                stack.push(Frame::Exit(id));
                for child in children.get(&Some(id)).into_iter().flatten().rev() {
                    stack.push(Frame::Enter(*child, level + 1));
                }
            }
            Frame::Exit(id) => {
                counter += 1;
                let (left, level) = entered.get(&id).copied().unwrap_or_default();
                renumbered.push((id, left, counter, level));
            }
        }
    }

    if renumbered.len() != nodes.len() {
        let unreachable = nodes
            .iter()
            .find(|n| !entered.contains_key(&n.id))
            .map_or(NodeId(0), |n| n.id);
        tracing::warn!(%unreachable, "parent links form a cycle");
        return Err(MutationError::structural_corruption(
            unreachable,
            "node is not reachable from any root; parent links form a cycle",
        ));
    }

    let mut changed = 0;
    for (id, left, right, level) in renumbered {
        let unchanged = current
            .get(&id)
            .is_some_and(|n| n.left == left && n.right == right && n.level == level);
        if unchanged {
            continue;
        }
        store.range_update(
            &RangeUpdate::new(scope.apply(Predicate::all().eq(Field::Id, id)))
                .set(Field::Left, left)
                .set(Field::Right, right)
                .set(Field::Level, level),
        )?;
        changed += 1;
    }

    Ok(MutationOutcome::Rebuilt {
        renumbered: changed,
    })
}
