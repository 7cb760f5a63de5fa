// src/graph/tensors.rs
//! Classifier-facing tensor view of a graph.

use serde::Serialize;

use super::model::Graph;

/// `(feature matrix, edge index, batch assignment)` for one or more graphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphTensors {
    /// One row per node, `N x D`.
    pub x: Vec<Vec<f32>>,
    /// `[parents, children]`, `2 x E`, using row positions in `x`.
    pub edge_index: [Vec<usize>; 2],
    /// Graph index of every node row.
    pub batch: Vec<usize>,
}

impl GraphTensors {
    /// Tensors for a single graph (batch of one).
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let x = graph.nodes().iter().map(|n| n.features.clone()).collect();
        let (parents, children) = graph.edge_positions().iter().copied().unzip();
        Self {
            x,
            edge_index: [parents, children],
            batch: vec![0; graph.node_count()],
        }
    }

    /// Concatenates graphs into one batch, offsetting edge indices.
    #[must_use]
    pub fn batch<'a, I>(graphs: I) -> Self
    where
        I: IntoIterator<Item = &'a Graph>,
    {
        let mut out = Self::default();
        for (g_idx, graph) in graphs.into_iter().enumerate() {
            let offset = out.x.len();
            let single = Self::from_graph(graph);
            out.x.extend(single.x);
            out.edge_index[0].extend(single.edge_index[0].iter().map(|p| p + offset));
            out.edge_index[1].extend(single.edge_index[1].iter().map(|c| c + offset));
            out.batch.extend(std::iter::repeat(g_idx).take(graph.node_count()));
        }
        out
    }

    #[must_use]
    pub fn graph_count(&self) -> usize {
        self.batch.last().map_or(0, |&b| b + 1)
    }
}
