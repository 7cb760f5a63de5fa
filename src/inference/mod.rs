// src/inference/mod.rs
//! Single-shot inference: inline edge list → graph → classifier → ranking.

pub mod linear;
pub mod ranker;

pub use linear::LinearHead;
pub use ranker::{rank, softmax, top_k, Prediction, RankedPrediction};

use tracing::debug;

use crate::error::{Result, SolgraphError};
use crate::graph::{validate_tree, FeatureSource, GraphBuilder, GraphSource, GraphTensors};

/// The trained model, treated as a black box.
pub trait Classifier: Send + Sync {
    /// Returns one raw score per category.
    ///
    /// # Errors
    /// Returns `Classifier` if the input does not fit the model.
    fn classify(&self, input: &GraphTensors) -> Result<Vec<f32>>;
}

impl<F> Classifier for F
where
    F: Fn(&GraphTensors) -> Vec<f32> + Send + Sync,
{
    fn classify(&self, input: &GraphTensors) -> Result<Vec<f32>> {
        Ok(self(input))
    }
}

/// Classifier plus the catalog names its score vector is indexed by.
pub struct InferenceEngine {
    builder: GraphBuilder,
    classifier: Box<dyn Classifier>,
    names: Vec<String>,
    top_k: usize,
}

impl InferenceEngine {
    #[must_use]
    pub fn new(
        builder: GraphBuilder,
        classifier: Box<dyn Classifier>,
        names: Vec<String>,
        top_k: usize,
    ) -> Self {
        Self {
            builder,
            classifier,
            names,
            top_k,
        }
    }

    /// Classifies an inline edge list and ranks the top categories.
    ///
    /// # Errors
    /// Propagates build, tree validation, classifier and ranking errors. A
    /// score vector whose length differs from the category count is a
    /// `Classifier` error.
    pub fn classify_edges(&self, edges: &str, features: &dyn FeatureSource) -> Result<RankedPrediction> {
        let graph = self
            .builder
            .build(&GraphSource::Inline(edges.to_string()), features)?;
        validate_tree(&graph)?;

        let scores = self.classifier.classify(&GraphTensors::from_graph(&graph))?;
        if scores.len() != self.names.len() {
            return Err(SolgraphError::Classifier(format!(
                "classifier returned {} scores for {} categories",
                scores.len(),
                self.names.len()
            )));
        }
        debug!(nodes = graph.node_count(), scores = scores.len(), "classified graph");
        rank(&scores, self.top_k, &self.names)
    }
}
