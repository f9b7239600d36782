//! Read-only access to one tree scope.

use nset_core::{Field, NodeId, NodeInterval};
use nset_store::{OrderBy, Predicate, TreeScope, TreeStore};
use tracing::{debug, warn};

use crate::error::{QueryError, QueryResult};
use crate::tree::{self, TreeNode};
use crate::verify::{self, Violation};

/// Query interface over a store and a tree scope.
///
/// Every relation is answered from the intervals alone; parent links are
/// only read back, never followed.
pub struct TreeReader<'s, S: ?Sized, D> {
    store: &'s S,
    scope: D,
}

impl<'s, S, D> TreeReader<'s, S, D>
where
    S: TreeStore + ?Sized,
    D: TreeScope,
{
    pub fn new(store: &'s S, scope: D) -> Self {
        Self { store, scope }
    }

    fn select(&self, predicate: Predicate) -> QueryResult<Vec<NodeInterval>> {
        Ok(self
            .store
            .select(&self.scope.apply(predicate), Some(OrderBy::asc(Field::Left)))?)
    }

    /// A node's current interval.
    pub fn get(&self, id: NodeId) -> QueryResult<NodeInterval> {
        self.store
            .find_one(&self.scope.apply(Predicate::all().eq(Field::Id, id)), None)?
            .ok_or(QueryError::NodeNotFound(id))
    }

    /// Immediate children, left to right.
    pub fn children(&self, node: &NodeInterval) -> QueryResult<Vec<NodeInterval>> {
        self.select(
            Predicate::all()
                .gt(Field::Left, node.left)
                .lt(Field::Right, node.right)
                .eq(Field::Level, node.level + 1),
        )
    }

    /// The nearest enclosing node, `None` for a root.
    pub fn parent(&self, node: &NodeInterval) -> QueryResult<Option<NodeInterval>> {
        if node.is_root() {
            return Ok(None);
        }
        Ok(self.store.find_one(
            &self.scope.apply(
                Predicate::all()
                    .lt(Field::Left, node.left)
                    .gt(Field::Right, node.right),
            ),
            Some(OrderBy::desc(Field::Left)),
        )?)
    }

    /// All enclosing nodes, root first.
    pub fn ancestors(&self, node: &NodeInterval) -> QueryResult<Vec<NodeInterval>> {
        self.select(
            Predicate::all()
                .lt(Field::Left, node.left)
                .gt(Field::Right, node.right),
        )
    }

    /// All enclosed nodes in pre-order.
    pub fn descendants(&self, node: &NodeInterval) -> QueryResult<Vec<NodeInterval>> {
        if node.is_leaf() {
            return Ok(Vec::new());
        }
        self.select(
            Predicate::all()
                .gt(Field::Left, node.left)
                .lt(Field::Right, node.right),
        )
    }

    /// Top-level nodes of the scope, left to right.
    pub fn roots(&self) -> QueryResult<Vec<NodeInterval>> {
        self.select(Predicate::all().eq(Field::Level, 0))
    }

    /// Every node of the scope in pre-order.
    pub fn all(&self) -> QueryResult<Vec<NodeInterval>> {
        self.select(Predicate::all())
    }

    /// The scope assembled into nested trees.
    pub fn tree(&self) -> QueryResult<Vec<TreeNode>> {
        tree::assemble(self.all()?)
    }

    /// The subtree rooted at `node`.
    pub fn subtree(&self, node: &NodeInterval) -> QueryResult<TreeNode> {
        let mut nodes = vec![*node];
        nodes.extend(self.descendants(node)?);
        tree::assemble(nodes)?
            .into_iter()
            .next()
            .ok_or(QueryError::NodeNotFound(node.id))
    }

    /// Invariant violations in this scope; empty when the scope is consistent.
    pub fn verify(&self) -> QueryResult<Vec<Violation>> {
        let nodes = self.all()?;
        let violations = verify::verify(&nodes);
        if violations.is_empty() {
            debug!(nodes = nodes.len(), "tree verified");
        } else {
            warn!(violations = violations.len(), "tree invariants violated");
        }
        Ok(violations)
    }

    /// The scope as pretty-printed JSON nested trees.
    pub fn export_json(&self) -> QueryResult<String> {
        Ok(serde_json::to_string_pretty(&self.tree()?)?)
    }
}
