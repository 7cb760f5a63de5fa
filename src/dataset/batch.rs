// src/dataset/batch.rs
//! Bulk sample construction with per-index failure isolation.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use rayon::prelude::*;
use tracing::{info, warn};

use super::{DatasetAssembler, DatasetSample};
use crate::catalog::Solution;
use crate::error::SolgraphError;

/// A failed index, with enough context to find the offending input.
#[derive(Debug)]
pub struct SampleError {
    pub index: usize,
    /// `None` when the index itself did not resolve.
    pub solution: Option<Solution>,
    pub source: SolgraphError,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.solution {
            Some(s) => write!(
                f,
                "index {} ({} #{}, {}): {}",
                self.index,
                s.category.name,
                s.number,
                s.path.display(),
                self.source
            ),
            None => write!(f, "index {}: {}", self.index, self.source),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

pub type SampleResult = Result<DatasetSample, SampleError>;

/// Per-index outcomes of a batch, in index order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<(usize, SampleResult)>,
}

impl BatchReport {
    pub fn successes(&self) -> impl Iterator<Item = &DatasetSample> {
        self.results.iter().filter_map(|(_, r)| r.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &SampleError> {
        self.results.iter().filter_map(|(_, r)| r.as_ref().err())
    }

    #[must_use]
    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Failure counts keyed by error kind.
    #[must_use]
    pub fn tally(&self) -> BTreeMap<&'static str, usize> {
        let mut tally = BTreeMap::new();
        for failure in self.failures() {
            *tally.entry(failure.source.kind()).or_insert(0) += 1;
        }
        tally
    }

    /// Splits into successful samples and failures.
    #[must_use]
    pub fn into_parts(self) -> (Vec<DatasetSample>, Vec<SampleError>) {
        let mut samples = Vec::new();
        let mut failures = Vec::new();
        for (_, result) in self.results {
            match result {
                Ok(s) => samples.push(s),
                Err(e) => failures.push(e),
            }
        }
        (samples, failures)
    }
}

impl DatasetAssembler {
    /// Builds every sample in the dataset.
    #[must_use]
    pub fn build_all(&self) -> BatchReport {
        self.build_range(0..self.len())
    }

    /// Builds each index in `range` in parallel. A failing index is recorded
    /// and the batch continues; results come back in index order.
    #[must_use]
    pub fn build_range(&self, range: Range<usize>) -> BatchReport {
        info!(start = range.start, end = range.end, "building samples");
        let results = match self.worker_pool() {
            Some(pool) => pool.install(|| self.map_range(range)),
            None => self.map_range(range),
        };
        let report = BatchReport { results };
        info!(
            built = report.success_count(),
            failed = report.failure_count(),
            "batch finished"
        );
        report
    }

    fn map_range(&self, range: Range<usize>) -> Vec<(usize, SampleResult)> {
        range
            .into_par_iter()
            .map(|index| (index, self.build_isolated(index)))
            .collect()
    }

    fn build_isolated(&self, index: usize) -> SampleResult {
        let solution = match self.mapper().resolve(index) {
            Ok(s) => s,
            Err(source) => return Err(failure(index, None, source)),
        };
        self.build_resolved(index, solution.clone())
            .map_err(|source| failure(index, Some(solution), source))
    }

    fn worker_pool(&self) -> Option<rayon::ThreadPool> {
        let workers = self.workers?;
        match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!("falling back to the global thread pool: {e}");
                None
            }
        }
    }
}

fn failure(index: usize, solution: Option<Solution>, source: SolgraphError) -> SampleError {
    let err = SampleError {
        index,
        solution,
        source,
    };
    warn!("skipping sample: {err}");
    err
}
