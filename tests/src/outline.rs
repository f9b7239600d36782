//! Indented tree outlines.
//!
//! One node id per line, two spaces of indentation per level:
//!
//! ```text
//! 1
//!   2
//!     3
//!   4
//! ```
//!
//! Indentation common to every line is ignored.

use nset_core::{NodeId, NodeInterval};
use nset_query::TreeNode;

use crate::error::{ExampleError, ExampleResult};

const INDENT: usize = 2;

/// Number an outline into intervals, listed in pre-order.
pub fn parse_outline(source: &str) -> ExampleResult<Vec<NodeInterval>> {
    let mut nodes: Vec<NodeInterval> = Vec::new();
    // indices into `nodes` of the currently open ancestors
    let mut open: Vec<usize> = Vec::new();
    let mut counter = 0i64;
    let base = source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(indentation)
        .min()
        .unwrap_or(0);

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let indent = indentation(line) - base;
        if indent % INDENT != 0 {
            return Err(ExampleError::outline_parse(
                line_no,
                "indentation is not a multiple of two",
            ));
        }
        let depth = indent / INDENT;
        if depth > open.len() {
            return Err(ExampleError::outline_parse(
                line_no,
                "indented more than one level",
            ));
        }
        let id: u64 = line.trim().parse().map_err(|_| {
            ExampleError::outline_parse(line_no, format!("not a node id: {}", line.trim()))
        })?;

        while open.len() > depth {
            close(&mut nodes, &mut open, &mut counter);
        }

        counter += 1;
        let parent_id = open.last().map(|&i| nodes[i].id);
        nodes.push(NodeInterval::new(NodeId(id), parent_id, counter, 0, depth as i64));
        open.push(nodes.len() - 1);
    }
    while !open.is_empty() {
        close(&mut nodes, &mut open, &mut counter);
    }

    Ok(nodes)
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn close(nodes: &mut [NodeInterval], open: &mut Vec<usize>, counter: &mut i64) {
    if let Some(index) = open.pop() {
        *counter += 1;
        nodes[index].right = *counter;
    }
}

/// Render assembled trees back into an outline.
pub fn render_outline(trees: &[TreeNode]) -> String {
    let mut out = String::new();
    for tree in trees {
        render(tree, 0, &mut out);
    }
    out
}

fn render(tree: &TreeNode, depth: usize, out: &mut String) {
    out.push_str(&" ".repeat(depth * INDENT));
    out.push_str(&tree.node.id.raw().to_string());
    out.push('\n');
    for child in &tree.children {
        render(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_outline() {
        let nodes = parse_outline("1\n  2\n    3\n  4\n5\n").unwrap();

        assert_eq!(
            nodes,
            vec![
                NodeInterval::new(NodeId(1), None, 1, 8, 0),
                NodeInterval::new(NodeId(2), Some(NodeId(1)), 2, 5, 1),
                NodeInterval::new(NodeId(3), Some(NodeId(2)), 3, 4, 2),
                NodeInterval::new(NodeId(4), Some(NodeId(1)), 6, 7, 1),
                NodeInterval::new(NodeId(5), None, 9, 10, 0),
            ]
        );
    }

    #[test]
    fn test_parse_outline_ignores_common_indent() {
        let nodes = parse_outline("\n        1\n          2\n    ").unwrap();

        assert_eq!(nodes[1], NodeInterval::new(NodeId(2), Some(NodeId(1)), 2, 3, 1));
    }

    #[test]
    fn test_parse_outline_rejects_jump() {
        assert!(matches!(
            parse_outline("1\n    2\n"),
            Err(ExampleError::OutlineParse { line: 2, .. })
        ));
    }

    #[test]
    fn test_render_outline() {
        let trees = vec![TreeNode {
            node: NodeInterval::new(NodeId(1), None, 1, 4, 0),
            children: vec![TreeNode::leaf(NodeInterval::new(
                NodeId(2),
                Some(NodeId(1)),
                2,
                3,
                1,
            ))],
        }];

        assert_eq!(render_outline(&trees), "1\n  2\n");
    }
}
