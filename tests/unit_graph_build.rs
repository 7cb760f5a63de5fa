// tests/unit_graph_build.rs
//! Edge-list files and inline strings through the same builder.

use anyhow::Result;
use solgraph_core::graph::{
    validate_tree, FeatureTable, Graph, GraphBuilder, GraphSource, GraphStats, GraphTensors,
    TreeViolation,
};
use solgraph_core::SolgraphError;
use std::fs;
use tempfile::TempDir;

const EDGES: &str = "for i\nfor range\ni print\n";
const FEATURES: &str = "for: 1 0 0\ni: 0 1 0\nrange: 0 0 1\nprint: 1 1 0\n";

fn ids(graph: &Graph) -> Vec<String> {
    graph.nodes().iter().map(|n| n.id.clone()).collect()
}

#[test]
fn test_file_and_inline_sources_agree() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("two-sum-1.edges");
    fs::write(&path, EDGES)?;
    fs::write(dir.path().join("two-sum-1.features"), FEATURES)?;

    let builder = GraphBuilder::new(3, "features");
    let from_file = builder.build_with_sidecar(&path)?;

    let table = FeatureTable::parse(FEATURES, 3, "mem")?;
    let inline = builder.build(&GraphSource::Inline(EDGES.to_string()), &table)?;

    assert_eq!(ids(&from_file), ids(&inline));
    assert_eq!(GraphTensors::from_graph(&from_file), GraphTensors::from_graph(&inline));
    assert_eq!(ids(&inline), ["for", "i", "range", "print"]);
    assert_eq!(inline.node("print").unwrap().features, [1.0, 1.0, 0.0]);
    Ok(())
}

#[test]
fn test_tensor_view() -> Result<()> {
    let table = FeatureTable::parse(FEATURES, 3, "mem")?;
    let g = GraphBuilder::new(3, "features").build(&GraphSource::Inline(EDGES.into()), &table)?;
    let t = GraphTensors::from_graph(&g);
    assert_eq!(t.x.len(), 4);
    assert_eq!(t.edge_index, [vec![0, 0, 1], vec![1, 2, 3]]);
    assert_eq!(t.graph_count(), 1);

    let both = GraphTensors::batch([&g, &g]);
    assert_eq!(both.x.len(), 8);
    assert_eq!(both.edge_index[0], [0, 0, 1, 4, 4, 5]);
    assert_eq!(both.batch, [0, 0, 0, 0, 1, 1, 1, 1]);
    assert_eq!(both.graph_count(), 2);
    Ok(())
}

#[test]
fn test_missing_feature_names_the_node() -> Result<()> {
    let table = FeatureTable::parse("for: 1 0 0\ni: 0 1 0\n", 3, "mem")?;
    let err = GraphBuilder::new(3, "features")
        .build(&GraphSource::Inline(EDGES.into()), &table)
        .unwrap_err();
    match err {
        SolgraphError::MissingFeature { node, .. } => assert_eq!(node, "range"),
        other => panic!("unexpected {other}"),
    }
    Ok(())
}

#[test]
fn test_wrong_dimension_is_rejected() {
    let err = FeatureTable::parse("for: 1 0\n", 3, "mem").unwrap_err();
    assert!(matches!(
        err,
        SolgraphError::FeatureDimension { expected: 3, found: 2, .. }
    ));
}

#[test]
fn test_missing_files() -> Result<()> {
    let dir = TempDir::new()?;
    let builder = GraphBuilder::new(3, "features");

    let absent = dir.path().join("nope-1.edges");
    assert!(matches!(
        builder.build_with_sidecar(&absent),
        Err(SolgraphError::FileNotFound { .. })
    ));

    // edge file present, sidecar absent
    let path = dir.path().join("a-1.edges");
    fs::write(&path, EDGES)?;
    match builder.build_with_sidecar(&path) {
        Err(SolgraphError::FileNotFound { path: missing }) => {
            assert!(missing.ends_with("a-1.features"));
        }
        other => panic!("unexpected {other:?}"),
    }
    Ok(())
}

#[test]
fn test_shared_table_across_graphs() -> Result<()> {
    let table = FeatureTable::parse(FEATURES, 3, "vocab")?;
    let builder = GraphBuilder::new(3, "features");
    let a = builder.build(&GraphSource::Inline("for i".into()), &table)?;
    let b = builder.build(&GraphSource::Inline("range print".into()), &table)?;
    assert_eq!(a.node("for").unwrap().features, [1.0, 0.0, 0.0]);
    assert_eq!(b.node("range").unwrap().features, [0.0, 0.0, 1.0]);
    assert_eq!(table.len(), 4);
    Ok(())
}

#[test]
fn test_tree_checks_after_build() -> Result<()> {
    let table = FeatureTable::parse("a: 0\nb: 0\nc: 0\nd: 0\n", 1, "mem")?;
    let builder = GraphBuilder::new(1, "features");
    let build = |edges: &str| builder.build(&GraphSource::Inline(edges.into()), &table);

    let tree = build("a b\na c\nc d")?;
    assert_eq!(validate_tree(&tree).map(|r| tree.nodes()[r].id.clone()), Ok("a".into()));
    let stats = GraphStats::of(&tree);
    assert_eq!((stats.nodes, stats.edges, stats.leaves), (4, 3, 2));
    assert_eq!(stats.depth, Some(2));
    assert_eq!(stats.feature_dimension, 1);

    // the builder accepts these; validation rejects them
    let cases = [
        ("a b\nb a", "cycle"),
        ("a b\nc d", "forest"),
        ("a c\nb c", "two parents"),
    ];
    for (edges, desc) in cases {
        let g = build(edges)?;
        assert!(validate_tree(&g).is_err(), "Failed: {desc}");
        assert_eq!(GraphStats::of(&g).depth, None, "Failed: {desc}");
    }

    let g = build("a c\nb c")?;
    assert!(matches!(validate_tree(&g), Err(TreeViolation::MultipleRoots(_))));
    Ok(())
}
