// src/graph/stats.rs
//! Summary statistics printed when inspecting a sample.

use serde::Serialize;

use super::model::Graph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub average_degree: f64,
    pub isolated_nodes: usize,
    pub self_loops: usize,
    pub leaves: usize,
    /// Longest root-to-leaf edge count; `None` unless the graph has exactly one root.
    pub depth: Option<usize>,
    pub feature_dimension: usize,
}

impl GraphStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(graph: &Graph) -> Self {
        let nodes = graph.nodes();
        let average_degree = if nodes.is_empty() {
            0.0
        } else {
            graph.edge_count() as f64 / nodes.len() as f64
        };

        Self {
            nodes: nodes.len(),
            edges: graph.edge_count(),
            average_degree,
            isolated_nodes: nodes
                .iter()
                .filter(|n| n.in_degree == 0 && n.children.is_empty())
                .count(),
            self_loops: graph.edges().filter(|(p, c)| p == c).count(),
            leaves: nodes.iter().filter(|n| n.children.is_empty()).count(),
            depth: depth(graph),
            feature_dimension: graph.feature_dimension(),
        }
    }
}

fn depth(graph: &Graph) -> Option<usize> {
    let root = crate::graph::validate::validate_tree(graph).ok()?;
    let nodes = graph.nodes();
    let mut max = 0;
    let mut stack = vec![(root, 0usize)];
    while let Some((i, d)) = stack.pop() {
        max = max.max(d);
        stack.extend(nodes[i].children.iter().map(|&c| (c, d + 1)));
    }
    Some(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::parse_edges;

    #[test]
    fn counts_tree_shape() {
        let g = parse_edges("1 2\n2 3\n2 4\n4 5", "mem").unwrap();
        let s = GraphStats::of(&g);
        assert_eq!(s.nodes, 5);
        assert_eq!(s.edges, 4);
        assert!((s.average_degree - 0.8).abs() < 1e-12);
        assert_eq!(s.leaves, 2);
        assert_eq!(s.depth, Some(3));
        assert_eq!(s.isolated_nodes, 0);
        assert_eq!(s.self_loops, 0);
    }

    #[test]
    fn depth_is_none_for_non_trees() {
        let g = parse_edges("1 2\n2 1", "mem").unwrap();
        assert_eq!(GraphStats::of(&g).depth, None);
    }
}
