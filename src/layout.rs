// src/layout.rs
//! Hierarchical tree layout.
//!
//! The root sits at `(width / 2, 0)`. A node's horizontal span is split into
//! equal sub-spans, one per child in insertion order, and each child sits at
//! the midpoint of its sub-span one `level_gap` lower. Traversal uses an
//! explicit stack, so depth is bounded only by memory.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::Result;
use crate::graph::model::Graph;
use crate::graph::validate::resolve_root;

pub const DEFAULT_WIDTH: f64 = 10.0;
pub const DEFAULT_LEVEL_GAP: f64 = 0.2;

/// Where a node was placed, and the span it owns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub left: f64,
    pub right: f64,
    pub depth: usize,
}

/// One placement per node, in graph node order.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutPosition {
    pub entries: Vec<(String, Placement)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl LayoutPosition {
    #[must_use]
    pub fn get(&self, node: &str) -> Option<(f64, f64)> {
        self.placement(node).map(|p| (p.x, p.y))
    }

    #[must_use]
    pub fn placement(&self, node: &str) -> Option<&Placement> {
        self.index.get(node).map(|&i| &self.entries[i].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HierarchyLayout {
    pub width: f64,
    pub level_gap: f64,
}

impl Default for HierarchyLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            level_gap: DEFAULT_LEVEL_GAP,
        }
    }
}

impl HierarchyLayout {
    #[must_use]
    pub fn new(width: f64, level_gap: f64) -> Self {
        Self { width, level_gap }
    }

    /// Lays out `graph` from `root` (or the unique parentless node).
    ///
    /// # Errors
    /// Returns `NotATree` if the graph violates the rooted-tree invariant, or if
    /// `root` is unknown or not the tree's root.
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(&self, graph: &Graph, root: Option<&str>) -> Result<LayoutPosition> {
        let root = resolve_root(graph, root)?;
        let nodes = graph.nodes();
        let mut placed: Vec<Option<Placement>> = vec![None; nodes.len()];

        let mut stack = vec![(root, 0.0, self.width, 0.0, 0usize)];
        while let Some((i, left, right, y, depth)) = stack.pop() {
            placed[i] = Some(Placement {
                x: (left + right) / 2.0,
                y,
                left,
                right,
                depth,
            });

            let children = &nodes[i].children;
            if children.is_empty() {
                continue;
            }
            let step = (right - left) / children.len() as f64;
            for (k, &child) in children.iter().enumerate() {
                let child_left = left + k as f64 * step;
                let child_right = left + (k + 1) as f64 * step;
                stack.push((child, child_left, child_right, y - self.level_gap, depth + 1));
            }
        }

        // validate_tree guarantees every node was reached.
        let entries: Vec<(String, Placement)> = nodes
            .iter()
            .zip(placed)
            .filter_map(|(n, p)| p.map(|p| (n.id.clone(), p)))
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (id, _))| (id.clone(), i))
            .collect();
        Ok(LayoutPosition { entries, index })
    }
}
