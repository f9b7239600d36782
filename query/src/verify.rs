//! Invariant verification of one tree scope.

use nset_core::{NodeId, NodeInterval};
use std::fmt;

/// A broken nested set invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `left < 1` or `right <= left`.
    InvalidBounds { node: NodeId },
    /// Boundary values are not exactly `1..=2n`.
    Numbering { expected: i64, found: i64 },
    /// Two intervals partially overlap.
    Overlap { first: NodeId, second: NodeId },
    /// Level does not match the nesting depth.
    WrongLevel { node: NodeId, expected: i64, found: i64 },
    /// Parent link does not match the nearest enclosing interval.
    WrongParent {
        node: NodeId,
        expected: Option<NodeId>,
        found: Option<NodeId>,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvalidBounds { node } => write!(f, "{}: invalid bounds", node),
            Violation::Numbering { expected, found } => {
                write!(f, "boundary {} expected, found {}", expected, found)
            }
            Violation::Overlap { first, second } => {
                write!(f, "{} and {} partially overlap", first, second)
            }
            Violation::WrongLevel {
                node,
                expected,
                found,
            } => write!(f, "{}: level {} expected, found {}", node, expected, found),
            Violation::WrongParent {
                node,
                expected,
                found,
            } => write!(
                f,
                "{}: parent {:?} expected, found {:?}",
                node, expected, found
            ),
        }
    }
}

/// Check every invariant over all nodes of one scope.
///
/// An empty result means the scope is a valid nested set forest.
pub fn verify(nodes: &[NodeInterval]) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut sorted = nodes.to_vec();
    sorted.sort_by_key(|n| (n.left, n.id));

    for node in &sorted {
        if node.left < 1 || node.right <= node.left {
            violations.push(Violation::InvalidBounds { node: node.id });
        }
    }

    let mut bounds: Vec<i64> = sorted.iter().flat_map(|n| [n.left, n.right]).collect();
    bounds.sort_unstable();
    if let Some((expected, found)) = (1..)
        .zip(bounds.iter().copied())
        .find(|(expected, found)| expected != found)
    {
        violations.push(Violation::Numbering { expected, found });
    }

    let mut open: Vec<&NodeInterval> = Vec::new();
    for node in &sorted {
        while open.last().is_some_and(|top| top.right < node.left) {
            open.pop();
        }
        if let Some(top) = open.last() {
            if top.right < node.right {
                violations.push(Violation::Overlap {
                    first: top.id,
                    second: node.id,
                });
                continue;
            }
        }

        let expected_level = open.len() as i64;
        if node.level != expected_level {
            violations.push(Violation::WrongLevel {
                node: node.id,
                expected: expected_level,
                found: node.level,
            });
        }
        let expected_parent = open.last().map(|top| top.id);
        if node.parent_id != expected_parent {
            violations.push(Violation::WrongParent {
                node: node.id,
                expected: expected_parent,
                found: node.parent_id,
            });
        }
        open.push(node);
    }

    violations
}
