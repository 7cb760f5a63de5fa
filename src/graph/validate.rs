// src/graph/validate.rs
//! Rooted-tree validation.
//!
//! A graph is a rooted tree when exactly one node has in-degree 0, every other
//! node has in-degree 1, and every node is reachable from the root. With those
//! in-degrees, any unreachable node sits on a cycle.

use std::fmt;

use super::model::Graph;

/// Why a graph failed tree validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeViolation {
    /// Every node has a parent, so the graph is one or more cycles.
    NoRoot,
    MultipleRoots(Vec<String>),
    MultipleParents(String),
    /// Nodes not reachable from the root (they form a cycle).
    Unreachable(Vec<String>),
    UnknownRoot(String),
    RootHasParent(String),
    Empty,
}

impl fmt::Display for TreeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRoot => write!(f, "no node without a parent (cycle)"),
            Self::MultipleRoots(ids) => write!(f, "multiple roots: {}", ids.join(", ")),
            Self::MultipleParents(id) => write!(f, "node '{id}' has more than one parent"),
            Self::Unreachable(ids) => {
                write!(f, "nodes unreachable from the root (cycle): {}", ids.join(", "))
            }
            Self::UnknownRoot(id) => write!(f, "requested root '{id}' is not in the graph"),
            Self::RootHasParent(id) => write!(f, "requested root '{id}' has a parent"),
            Self::Empty => write!(f, "graph has no nodes"),
        }
    }
}

/// Checks the rooted-tree invariant and returns the root's node position.
///
/// # Errors
/// Returns the first [`TreeViolation`] found.
pub fn validate_tree(graph: &Graph) -> Result<usize, TreeViolation> {
    let nodes = graph.nodes();
    if nodes.is_empty() {
        return Err(TreeViolation::Empty);
    }

    let roots: Vec<usize> = (0..nodes.len()).filter(|&i| nodes[i].in_degree == 0).collect();
    let root = match roots.as_slice() {
        [] => return Err(TreeViolation::NoRoot),
        [only] => *only,
        many => {
            return Err(TreeViolation::MultipleRoots(
                many.iter().map(|&i| nodes[i].id.clone()).collect(),
            ))
        }
    };

    if let Some(n) = nodes.iter().find(|n| n.in_degree > 1) {
        return Err(TreeViolation::MultipleParents(n.id.clone()));
    }

    let unreachable = unreachable_from(graph, root);
    if !unreachable.is_empty() {
        return Err(TreeViolation::Unreachable(unreachable));
    }

    Ok(root)
}

/// Resolves an optional caller-chosen root against the validated tree.
///
/// # Errors
/// Returns a violation if the graph is not a tree, or the requested root is
/// unknown or not the tree's root.
pub fn resolve_root(graph: &Graph, requested: Option<&str>) -> Result<usize, TreeViolation> {
    let root = validate_tree(graph)?;
    let Some(id) = requested else {
        return Ok(root);
    };
    match graph.position(id) {
        None => Err(TreeViolation::UnknownRoot(id.to_string())),
        Some(pos) if pos != root => Err(TreeViolation::RootHasParent(id.to_string())),
        Some(pos) => Ok(pos),
    }
}

fn unreachable_from(graph: &Graph, root: usize) -> Vec<String> {
    let nodes = graph.nodes();
    let mut seen = vec![false; nodes.len()];
    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        if seen[i] {
            continue;
        }
        seen[i] = true;
        stack.extend(nodes[i].children.iter().copied().filter(|&c| !seen[c]));
    }
    seen.iter()
        .enumerate()
        .filter(|(_, &s)| !s)
        .map(|(i, _)| nodes[i].id.clone())
        .collect()
}
