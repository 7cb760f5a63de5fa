// tests/unit_layout.rs
//! Hierarchical layout over generated trees.

use proptest::prelude::*;
use solgraph_core::graph::parse_edges;
use solgraph_core::layout::HierarchyLayout;
use solgraph_core::SolgraphError;

const EPS: f64 = 1e-9;

/// Edge list for a tree where node `i + 1` hangs off `parents[i]`.
fn tree_edges(parents: &[usize]) -> String {
    parents
        .iter()
        .enumerate()
        .map(|(i, p)| format!("n{p} n{}\n", i + 1))
        .collect()
}

fn parent_vectors() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<prop::sample::Index>(), 1..60).prop_map(|picks| {
        picks
            .iter()
            .enumerate()
            .map(|(i, pick)| pick.index(i + 1))
            .collect()
    })
}

proptest! {
    #[test]
    fn children_partition_their_parent_span(
        parents in parent_vectors(),
        width in 1.0f64..100.0,
        gap in 0.01f64..5.0,
    ) {
        let graph = parse_edges(&tree_edges(&parents), "gen").unwrap();
        let pos = HierarchyLayout::new(width, gap).layout(&graph, None).unwrap();
        prop_assert_eq!(pos.len(), parents.len() + 1);

        let root = pos.placement("n0").unwrap();
        prop_assert!((root.x - width / 2.0).abs() < EPS);
        prop_assert!(root.y.abs() < EPS);

        for node in graph.nodes() {
            let p = pos.placement(&node.id).unwrap();
            #[allow(clippy::cast_precision_loss)]
            let expected_y = -(p.depth as f64) * gap;
            prop_assert!((p.y - expected_y).abs() < 1e-6);
            prop_assert!((p.x - (p.left + p.right) / 2.0).abs() < EPS);

            let children = graph.children(&node.id);
            let mut cursor = p.left;
            for child in children {
                let c = pos.placement(child).unwrap();
                prop_assert_eq!(c.depth, p.depth + 1);
                // siblings tile the parent span left to right without overlap
                prop_assert!((c.left - cursor).abs() < 1e-6);
                prop_assert!(c.right > c.left);
                cursor = c.right;
            }
            if !graph.children(&node.id).is_empty() {
                prop_assert!((cursor - p.right).abs() < 1e-6);
            }
        }
    }
}

#[test]
fn test_worked_example() {
    let graph = parse_edges("1 2\n1 3\n2 4\n2 5", "mem").unwrap();
    let pos = HierarchyLayout::default().layout(&graph, Some("1")).unwrap();

    let cases = [
        ("1", (5.0, 0.0), "root at half width"),
        ("2", (2.5, -0.2), "first child, left half"),
        ("3", (7.5, -0.2), "second child, right half"),
        ("4", (1.25, -0.4), "grandchild, left quarter"),
        ("5", (3.75, -0.4), "grandchild, second quarter"),
    ];
    for (node, (x, y), desc) in cases {
        let (gx, gy) = pos.get(node).unwrap();
        assert!((gx - x).abs() < EPS && (gy - y).abs() < EPS, "Failed: {desc}: ({gx}, {gy})");
    }
}

#[test]
fn test_layout_rejects_non_trees() {
    let layout = HierarchyLayout::default();
    let cases = [
        ("a b\nb c\nc a", None, "three-cycle"),
        ("a b\nc d", None, "two roots"),
        ("a b\na c\nb d\nc d", None, "shared child"),
        ("a b", Some("zzz"), "unknown root"),
        ("a b", Some("b"), "root with a parent"),
    ];
    for (edges, root, desc) in cases {
        let graph = parse_edges(edges, "mem").unwrap();
        let result = layout.layout(&graph, root);
        assert!(
            matches!(result, Err(SolgraphError::NotATree(_))),
            "Failed: {desc}"
        );
    }
}

#[test]
fn test_wide_fan_out_keeps_spans_ordered() {
    let edges: String = (1..=100).map(|i| format!("root leaf{i}\n")).collect();
    let graph = parse_edges(&edges, "mem").unwrap();
    let pos = HierarchyLayout::new(100.0, 1.0).layout(&graph, None).unwrap();

    let xs: Vec<f64> = (1..=100).map(|i| pos.get(&format!("leaf{i}")).unwrap().0).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    assert!((xs[0] - 0.5).abs() < EPS);
    assert!((xs[99] - 99.5).abs() < EPS);
}
