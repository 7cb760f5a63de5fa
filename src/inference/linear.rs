// src/inference/linear.rs
//! Mean-pool + linear readout classifier loaded from JSON weights.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::Classifier;
use crate::error::{Result, SolgraphError};
use crate::graph::GraphTensors;

/// `scores = W · mean(x) + b`, one score per category.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearHead {
    /// `categories x D`.
    pub weights: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
}

impl LinearHead {
    /// # Errors
    /// Returns `Classifier` if rows are ragged or `bias` does not match.
    pub fn new(weights: Vec<Vec<f32>>, bias: Vec<f32>) -> Result<Self> {
        let head = Self { weights, bias };
        head.check_shape()?;
        Ok(head)
    }

    /// Loads `{"weights": [[..]], "bias": [..]}`.
    ///
    /// # Errors
    /// Returns `FileNotFound`/`Io`, `Json`, or `Classifier` on shape mismatch.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| SolgraphError::from_io(e, path))?;
        let head: Self = serde_json::from_str(&text)?;
        head.check_shape()?;
        Ok(head)
    }

    #[must_use]
    pub fn input_dimension(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn output_dimension(&self) -> usize {
        self.weights.len()
    }

    fn check_shape(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(SolgraphError::Classifier("weight matrix is empty".into()));
        }
        let d = self.input_dimension();
        if self.weights.iter().any(|row| row.len() != d) {
            return Err(SolgraphError::Classifier("weight rows have different lengths".into()));
        }
        if self.bias.len() != self.weights.len() {
            return Err(SolgraphError::Classifier(format!(
                "bias has {} entries for {} weight rows",
                self.bias.len(),
                self.weights.len()
            )));
        }
        Ok(())
    }
}

impl Classifier for LinearHead {
    #[allow(clippy::cast_precision_loss)]
    fn classify(&self, input: &GraphTensors) -> Result<Vec<f32>> {
        let d = self.input_dimension();
        if input.x.is_empty() {
            return Err(SolgraphError::Classifier("graph has no nodes".into()));
        }
        if let Some(row) = input.x.iter().find(|r| r.len() != d) {
            return Err(SolgraphError::Classifier(format!(
                "node features have length {}, model expects {d}",
                row.len()
            )));
        }

        let mut pooled = vec![0.0f32; d];
        for row in &input.x {
            for (acc, v) in pooled.iter_mut().zip(row) {
                *acc += v;
            }
        }
        let n = input.x.len() as f32;
        pooled.iter_mut().for_each(|v| *v /= n);

        Ok(self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, b)| row.iter().zip(&pooled).map(|(w, x)| w * x).sum::<f32>() + b)
            .collect())
    }
}
