// src/dataset/export.rs
//! JSON Lines persistence for built samples.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::DatasetSample;
use crate::error::{Result, SolgraphError};
use crate::graph::GraphTensors;

/// One persisted sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub index: usize,
    pub category: String,
    pub number: usize,
    pub path: PathBuf,
    /// Node ids in row order of `x`.
    pub nodes: Vec<String>,
    pub x: Vec<Vec<f32>>,
    pub edge_index: [Vec<usize>; 2],
    pub y: Vec<u8>,
}

impl From<&DatasetSample> for SampleRecord {
    fn from(sample: &DatasetSample) -> Self {
        let tensors = GraphTensors::from_graph(&sample.graph);
        Self {
            index: sample.index,
            category: sample.solution.category.name.clone(),
            number: sample.solution.number,
            path: sample.solution.path.clone(),
            nodes: sample.graph.nodes().iter().map(|n| n.id.clone()).collect(),
            x: tensors.x,
            edge_index: tensors.edge_index,
            y: sample.label.clone(),
        }
    }
}

/// Writes one JSON object per sample and returns how many were written.
///
/// # Errors
/// Returns `Io` if the file cannot be written, `Json` on serialization failure.
pub fn write_jsonl<'a, I>(path: &Path, samples: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a DatasetSample>,
{
    let file = File::create(path).map_err(|e| SolgraphError::from_io(e, path))?;
    let mut out = BufWriter::new(file);
    let mut written = 0;
    for sample in samples {
        serde_json::to_writer(&mut out, &SampleRecord::from(sample))?;
        out.write_all(b"\n").map_err(|e| SolgraphError::from_io(e, path))?;
        written += 1;
    }
    out.flush().map_err(|e| SolgraphError::from_io(e, path))?;
    Ok(written)
}

/// Reads records written by [`write_jsonl`].
///
/// # Errors
/// Returns `FileNotFound`/`Io` on read failure, `Json` on a bad record.
pub fn read_jsonl(path: &Path) -> Result<Vec<SampleRecord>> {
    let file = File::open(path).map_err(|e| SolgraphError::from_io(e, path))?;
    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| SolgraphError::from_io(e, path))?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}
