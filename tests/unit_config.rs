// tests/unit_config.rs
//! `solgraph.toml` parsing, defaults and validation.

use anyhow::Result;
use solgraph_core::config::{Config, IndexStrategy};
use solgraph_core::SolgraphError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::new();
    assert_eq!(config.catalog.root, PathBuf::from("data/raw"));
    assert_eq!(config.catalog.strategy, IndexStrategy::Scanned);
    assert_eq!(config.catalog.page_size, 500);
    assert_eq!(config.catalog.extension, "edges");
    assert_eq!(config.features.dimension, 139);
    assert_eq!(config.features.sidecar_extension, "features");
    assert_eq!(config.inference.top_k, 3);
    assert!((config.layout.width - 10.0).abs() < f64::EPSILON);
    assert!((config.layout.level_gap - 0.2).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_full_file() -> Result<()> {
    let config = Config::parse_toml(
        r#"
[catalog]
root = "/datasets/leetcode"
strategy = "fixed-page"
page_size = 250
categories = ["two-sum", "koko-eating-bananas"]
per_category_limit = 100

[features]
dimension = 64
table = "vocab.features"

[layout]
width = 20.0

[inference]
top_k = 5
model = "head.json"

[dataset]
workers = 4
"#,
    )?;
    assert_eq!(config.catalog.strategy, IndexStrategy::FixedPage);
    assert_eq!(config.catalog.page_size, 250);
    assert_eq!(config.catalog.categories, ["two-sum", "koko-eating-bananas"]);
    assert_eq!(config.catalog.per_category_limit, Some(100));
    assert_eq!(config.catalog.category_limit, None);
    assert_eq!(config.features.dimension, 64);
    assert_eq!(config.features.table, Some(PathBuf::from("vocab.features")));
    assert!((config.layout.width - 20.0).abs() < f64::EPSILON);
    // unspecified keys keep their defaults
    assert!((config.layout.level_gap - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.inference.top_k, 5);
    assert_eq!(config.dataset.workers, Some(4));
    Ok(())
}

#[test]
fn test_empty_file_is_all_defaults() -> Result<()> {
    let config = Config::parse_toml("")?;
    assert_eq!(config.catalog.page_size, 500);
    assert_eq!(config.inference.top_k, 3);
    Ok(())
}

#[test]
fn test_invalid_settings_are_rejected() {
    let cases = [
        ("[catalog]\npage_size = 0", "page_size"),
        ("[catalog]\nextension = \"\"", "extension"),
        ("[features]\ndimension = 0", "dimension"),
        ("[features]\nsidecar_extension = \"edges\"", "sidecar_extension"),
        ("[inference]\ntop_k = 0", "top_k"),
        ("[layout]\nwidth = -1.0", "width"),
        ("[layout]\nlevel_gap = 0.0", "level_gap"),
        ("[dataset]\nworkers = 0", "workers"),
        ("[catalog]\nstrategy = \"random\"", "random"),
        ("[catalog\n", "TOML parse error"),
    ];
    for (text, needle) in cases {
        match Config::parse_toml(text) {
            Err(SolgraphError::Config(msg)) => {
                assert!(msg.contains(needle), "Failed: {needle}: {msg}");
            }
            other => panic!("Failed: {needle}: unexpected {other:?}"),
        }
    }
}

#[test]
fn test_save_and_reload() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("solgraph.toml");

    let mut config = Config::new();
    config.catalog.strategy = IndexStrategy::FixedPage;
    config.inference.top_k = 7;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.catalog.strategy, IndexStrategy::FixedPage);
    assert_eq!(loaded.inference.top_k, 7);
    assert_eq!(loaded.features.dimension, 139);
    Ok(())
}

#[test]
fn test_missing_explicit_file() -> Result<()> {
    let dir = TempDir::new()?;
    assert!(matches!(
        Config::from_file(&dir.path().join("absent.toml")),
        Err(SolgraphError::FileNotFound { .. })
    ));
    Ok(())
}
