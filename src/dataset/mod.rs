// src/dataset/mod.rs
//! Labeled graph samples over the catalog.

pub mod batch;
pub mod export;

pub use batch::{BatchReport, SampleError};

use tracing::debug;

use crate::catalog::Solution;
use crate::config::Config;
use crate::error::Result;
use crate::graph::{validate_tree, FeatureTable, Graph, GraphBuilder, GraphSource};
use crate::index::{self, IndexMapper};
use crate::label::LabelEncoder;

/// One `(graph, label)` pair plus where it came from.
#[derive(Debug, Clone)]
pub struct DatasetSample {
    pub index: usize,
    pub solution: Solution,
    pub graph: Graph,
    pub label: Vec<u8>,
}

/// Composes the index mapper, graph builder and label encoder.
pub struct DatasetAssembler {
    mapper: Box<dyn IndexMapper>,
    builder: GraphBuilder,
    encoder: LabelEncoder,
    shared_features: Option<FeatureTable>,
    workers: Option<usize>,
}

impl DatasetAssembler {
    #[must_use]
    pub fn new(mapper: Box<dyn IndexMapper>, builder: GraphBuilder) -> Self {
        let encoder = LabelEncoder::new(mapper.catalog().len());
        Self {
            mapper,
            builder,
            encoder,
            shared_features: None,
            workers: None,
        }
    }

    /// Scans the catalog and loads any shared feature table named in `config`.
    ///
    /// # Errors
    /// Returns catalog scan or feature table load errors.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mapper = index::from_config(&config.catalog)?;
        let builder = GraphBuilder::new(
            config.features.dimension,
            config.features.sidecar_extension.clone(),
        );
        let mut assembler = Self::new(mapper, builder).with_workers(config.dataset.workers);
        if let Some(path) = &config.features.table {
            assembler = assembler.with_shared_features(FeatureTable::load(path, config.features.dimension)?);
        }
        Ok(assembler)
    }

    /// Uses one feature table for every solution instead of per-file sidecars.
    #[must_use]
    pub fn with_shared_features(mut self, table: FeatureTable) -> Self {
        self.shared_features = Some(table);
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub fn mapper(&self) -> &dyn IndexMapper {
        self.mapper.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mapper.total_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds the sample at `index`.
    ///
    /// # Errors
    /// Propagates the first failure: index, file, parse, feature, tree or label.
    pub fn build_sample(&self, index: usize) -> Result<DatasetSample> {
        let solution = self.mapper.resolve(index)?;
        self.build_resolved(index, solution)
    }

    pub(crate) fn build_resolved(&self, index: usize, solution: Solution) -> Result<DatasetSample> {
        let graph = self.build_graph(&solution)?;
        validate_tree(&graph)?;
        let label = self.encoder.encode(&solution.category)?;
        debug!(index, category = %solution.category.name, number = solution.number, "built sample");
        Ok(DatasetSample {
            index,
            solution,
            graph,
            label,
        })
    }

    fn build_graph(&self, solution: &Solution) -> Result<Graph> {
        match &self.shared_features {
            Some(table) => self
                .builder
                .build(&GraphSource::File(solution.path.clone()), table),
            None => self.builder.build_with_sidecar(&solution.path),
        }
    }
}
