//! Nested tree assembly.

use nset_core::{NodeId, NodeInterval};
use serde::Serialize;

use crate::error::{QueryError, QueryResult};

/// A node together with its children, in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    #[serde(flatten)]
    pub node: NodeInterval,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(node: NodeInterval) -> Self {
        Self {
            node,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, the node included.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Ids in pre-order.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.len());
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            ids.push(current.node.id);
            stack.extend(current.children.iter().rev());
        }
        ids
    }
}

/// Nest intervals sorted by `left` into trees.
pub(crate) fn assemble(nodes: Vec<NodeInterval>) -> QueryResult<Vec<TreeNode>> {
    let mut roots = Vec::new();
    let mut open: Vec<TreeNode> = Vec::new();

    for node in nodes {
        while open.last().is_some_and(|top| top.node.right < node.left) {
            close(&mut open, &mut roots);
        }
        if let Some(top) = open.last() {
            if top.node.right < node.right {
                return Err(QueryError::malformed(
                    node.id,
                    format!("interval overlaps {}", top.node),
                ));
            }
        }
        open.push(TreeNode::leaf(node));
    }
    while !open.is_empty() {
        close(&mut open, &mut roots);
    }

    Ok(roots)
}

fn close(open: &mut Vec<TreeNode>, roots: &mut Vec<TreeNode>) {
    if let Some(done) = open.pop() {
        match open.last_mut() {
            Some(parent) => parent.children.push(done),
            None => roots.push(done),
        }
    }
}
