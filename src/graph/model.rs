// src/graph/model.rs
//! The per-solution co-occurrence graph.
//!
//! Nodes live in first-appearance order. Each node records the parent from its
//! first incoming edge, its in-degree, and its children in edge insertion order.
//! That is enough for root detection, tree validation, and layout.

use std::collections::HashMap;

use serde::Serialize;

/// Identifier of a node as it appears in the edge list.
pub type NodeId = String;

#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub features: Vec<f32>,
    #[serde(skip)]
    pub(crate) parent: Option<usize>,
    #[serde(skip)]
    pub(crate) in_degree: usize,
    #[serde(skip)]
    pub(crate) children: Vec<usize>,
}

/// A directed graph over code tokens with one feature vector per node.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<(usize, usize)>,
    #[serde(skip)]
    index: HashMap<NodeId, usize>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in first-appearance order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Edges as `(parent, child)` node positions, in insertion order.
    #[must_use]
    pub fn edge_positions(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Edges as `(parent, child)` identifiers, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges
            .iter()
            .map(|&(p, c)| (self.nodes[p].id.as_str(), self.nodes[c].id.as_str()))
    }

    /// Children of `id` in the order their edges were inserted.
    #[must_use]
    pub fn children(&self, id: &str) -> Vec<&str> {
        self.position(id)
            .map(|i| {
                self.nodes[i]
                    .children
                    .iter()
                    .map(|&c| self.nodes[c].id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Parent recorded by the first edge pointing at `id`.
    #[must_use]
    pub fn parent(&self, id: &str) -> Option<&str> {
        let i = self.position(id)?;
        self.nodes[i].parent.map(|p| self.nodes[p].id.as_str())
    }

    #[must_use]
    pub fn in_degree(&self, id: &str) -> Option<usize> {
        self.position(id).map(|i| self.nodes[i].in_degree)
    }

    #[must_use]
    pub fn contains_edge(&self, parent: &str, child: &str) -> bool {
        match (self.position(parent), self.position(child)) {
            (Some(p), Some(c)) => self.nodes[p].children.contains(&c),
            _ => false,
        }
    }

    /// Returns the position of `id`, inserting a featureless node if absent.
    pub(crate) fn intern(&mut self, id: &str) -> usize {
        if let Some(&i) = self.index.get(id) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(Node {
            id: id.to_string(),
            features: Vec::new(),
            parent: None,
            in_degree: 0,
            children: Vec::new(),
        });
        self.index.insert(id.to_string(), i);
        i
    }

    /// Appends an edge without duplicate or self-loop checks.
    pub(crate) fn push_edge(&mut self, parent: usize, child: usize) {
        self.edges.push((parent, child));
        self.nodes[parent].children.push(child);
        let node = &mut self.nodes[child];
        node.in_degree += 1;
        if node.parent.is_none() {
            node.parent = Some(parent);
        }
    }

    pub(crate) fn set_features(&mut self, position: usize, features: Vec<f32>) {
        self.nodes[position].features = features;
    }

    /// Length of the feature vectors, taken from the first node.
    #[must_use]
    pub fn feature_dimension(&self) -> usize {
        self.nodes.first().map_or(0, |n| n.features.len())
    }
}
