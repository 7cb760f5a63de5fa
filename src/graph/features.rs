// src/graph/features.rs
//! Per-node feature annotations.
//!
//! Annotations use the `key: v1 v2 ... vD` line layout of the co-occurrence
//! export. Every row must hold exactly `D` values.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, SolgraphError};

/// Anything that can hand out a feature vector for a node id.
pub trait FeatureSource {
    /// Length every returned vector has.
    fn dimension(&self) -> usize;

    fn lookup(&self, node: &str) -> Option<&[f32]>;

    /// Where the annotations came from, for error messages.
    fn origin(&self) -> &str;
}

/// Feature vectors keyed by node id.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    dimension: usize,
    origin: String,
    rows: HashMap<String, Vec<f32>>,
}

impl FeatureTable {
    #[must_use]
    pub fn new(dimension: usize, origin: impl Into<String>) -> Self {
        Self {
            dimension,
            origin: origin.into(),
            rows: HashMap::new(),
        }
    }

    /// Parses annotation text.
    ///
    /// # Errors
    /// Returns `MalformedFeatures` on unparseable rows, `FeatureDimension` when a
    /// row does not hold exactly `dimension` values.
    pub fn parse(text: &str, dimension: usize, origin: &str) -> Result<Self> {
        let mut table = Self::new(dimension, origin);
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (node, values) = parse_row(line, origin, i + 1)?;
            table.insert(node, values)?;
        }
        Ok(table)
    }

    /// Loads an annotation file from disk.
    ///
    /// # Errors
    /// Returns `FileNotFound`/`Io` on read failure, or any [`FeatureTable::parse`] error.
    pub fn load(path: &Path, dimension: usize) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| SolgraphError::from_io(e, path))?;
        Self::parse(&text, dimension, &path.display().to_string())
    }

    /// Adds or replaces a row.
    ///
    /// # Errors
    /// Returns `FeatureDimension` if `values` has the wrong length.
    pub fn insert(&mut self, node: impl Into<String>, values: Vec<f32>) -> Result<()> {
        let node = node.into();
        if values.len() != self.dimension {
            return Err(SolgraphError::FeatureDimension {
                node,
                origin: self.origin.clone(),
                expected: self.dimension,
                found: values.len(),
            });
        }
        self.rows.insert(node, values);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FeatureSource for FeatureTable {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn lookup(&self, node: &str) -> Option<&[f32]> {
        self.rows.get(node).map(Vec::as_slice)
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}

fn parse_row(line: &str, origin: &str, line_no: usize) -> Result<(String, Vec<f32>)> {
    let malformed = |reason: String| SolgraphError::MalformedFeatures {
        origin: origin.to_string(),
        line: line_no,
        reason,
    };

    let Some((key, rest)) = line.split_once(':') else {
        return Err(malformed("expected '<node>: <values>'".to_string()));
    };
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(malformed(format!("invalid node id '{key}'")));
    }

    let values = rest
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f32>()
                .map_err(|_| malformed(format!("'{tok}' is not a number")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((key.to_string(), values))
}
