// src/graph/builder.rs
//! Edge-list parsing and feature attachment.
//!
//! Files (batch construction) and inline strings (inference) go through the
//! same parser.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::features::{FeatureSource, FeatureTable};
use super::model::Graph;
use crate::error::{Result, SolgraphError};

/// Where an edge list comes from.
#[derive(Debug, Clone)]
pub enum GraphSource {
    File(PathBuf),
    Inline(String),
}

impl GraphSource {
    /// Label used in error messages.
    #[must_use]
    pub fn origin(&self) -> String {
        match self {
            Self::File(p) => p.display().to_string(),
            Self::Inline(_) => "<inline>".to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Self::File(p) => fs::read_to_string(p).map_err(|e| SolgraphError::from_io(e, p)),
            Self::Inline(s) => Ok(s.clone()),
        }
    }
}

/// Builds graphs whose node features all have length `dimension`.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    dimension: usize,
    sidecar_extension: String,
}

impl GraphBuilder {
    #[must_use]
    pub fn new(dimension: usize, sidecar_extension: impl Into<String>) -> Self {
        Self {
            dimension,
            sidecar_extension: sidecar_extension.into(),
        }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Builds a graph, pulling node features from `features`.
    ///
    /// # Errors
    /// Returns `FileNotFound`/`Io` if the source cannot be read, `MalformedGraph`
    /// on syntax errors, self-loops or duplicate edges, and `MissingFeature` or
    /// `FeatureDimension` if a node's annotation is absent or the wrong size.
    pub fn build(&self, source: &GraphSource, features: &dyn FeatureSource) -> Result<Graph> {
        let origin = source.origin();
        let text = source.read()?;
        let mut graph = parse_edges(&text, &origin)?;
        self.attach_features(&mut graph, features, &origin)?;
        debug!(
            origin = %origin,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built graph"
        );
        Ok(graph)
    }

    /// Builds a graph from an edge file whose annotations sit next to it in
    /// `<stem>.<sidecar_extension>`.
    ///
    /// # Errors
    /// Same as [`GraphBuilder::build`], plus feature table load failures.
    pub fn build_with_sidecar(&self, path: &Path) -> Result<Graph> {
        let sidecar = self.sidecar_path(path);
        // Check the edge file first so a missing solution is reported as such.
        if !path.is_file() {
            return Err(SolgraphError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let table = FeatureTable::load(&sidecar, self.dimension)?;
        self.build(&GraphSource::File(path.to_path_buf()), &table)
    }

    #[must_use]
    pub fn sidecar_path(&self, path: &Path) -> PathBuf {
        path.with_extension(&self.sidecar_extension)
    }

    fn attach_features(
        &self,
        graph: &mut Graph,
        features: &dyn FeatureSource,
        origin: &str,
    ) -> Result<()> {
        let ids: Vec<String> = graph.nodes().iter().map(|n| n.id.clone()).collect();
        for (pos, id) in ids.into_iter().enumerate() {
            let Some(values) = features.lookup(&id) else {
                return Err(SolgraphError::MissingFeature {
                    node: id,
                    origin: format!("{origin} (features: {})", features.origin()),
                });
            };
            if values.len() != self.dimension {
                return Err(SolgraphError::FeatureDimension {
                    node: id,
                    origin: features.origin().to_string(),
                    expected: self.dimension,
                    found: values.len(),
                });
            }
            graph.set_features(pos, values.to_vec());
        }
        Ok(())
    }
}

/// Parses `parent child` lines into a featureless graph.
///
/// # Errors
/// Returns `MalformedGraph` for lines without exactly two tokens, self-loops,
/// duplicate edges, or an edge list with no edges.
pub fn parse_edges(text: &str, origin: &str) -> Result<Graph> {
    let malformed = |reason: String| SolgraphError::MalformedGraph {
        origin: origin.to_string(),
        reason,
    };

    let mut graph = Graph::new();
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let mut tokens = line.split_whitespace();
        let (parent, child) = match (tokens.next(), tokens.next(), tokens.next()) {
            (None, _, _) => continue,
            (Some(p), Some(c), None) => (p, c),
            _ => {
                return Err(malformed(format!(
                    "line {line_no}: expected 'parent child', got '{}'",
                    line.trim()
                )))
            }
        };

        if parent == child {
            return Err(malformed(format!("line {line_no}: self-loop on '{parent}'")));
        }
        if graph.contains_edge(parent, child) {
            return Err(malformed(format!(
                "line {line_no}: duplicate edge '{parent} {child}'"
            )));
        }

        let p = graph.intern(parent);
        let c = graph.intern(child);
        graph.push_edge(p, c);
    }

    if graph.edge_count() == 0 {
        return Err(malformed("edge list is empty".to_string()));
    }
    Ok(graph)
}
