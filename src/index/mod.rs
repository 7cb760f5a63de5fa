// src/index/mod.rs
//! Flat sample index <-> solution mapping.
//!
//! Both strategies are bijections onto `[0, total_count())` for the catalog
//! listing captured at construction.

pub mod fixed;
pub mod scanned;

pub use fixed::FixedPageMapper;
pub use scanned::ScannedMapper;

use crate::catalog::{Catalog, Solution};
use crate::config::{CatalogConfig, IndexStrategy};
use crate::error::{Result, SolgraphError};

pub trait IndexMapper: Send + Sync {
    fn catalog(&self) -> &Catalog;

    fn total_count(&self) -> usize;

    /// Maps a flat index to its solution.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `index >= total_count()`.
    fn resolve(&self, index: usize) -> Result<Solution>;

    /// Maps a category name and 1-based solution number back to its index.
    ///
    /// # Errors
    /// Returns `UnknownCategory` or `IndexOutOfRange`.
    fn locate(&self, category: &str, number: usize) -> Result<usize>;
}

/// Picks the mapper named by `config.strategy`.
#[must_use]
pub fn for_strategy(catalog: Catalog, config: &CatalogConfig) -> Box<dyn IndexMapper> {
    match config.strategy {
        IndexStrategy::FixedPage => Box::new(FixedPageMapper::new(catalog, config.page_size)),
        IndexStrategy::Scanned => Box::new(ScannedMapper::new(catalog)),
    }
}

/// Scans the catalog and builds the configured mapper.
///
/// # Errors
/// Returns catalog scan errors.
pub fn from_config(config: &CatalogConfig) -> Result<Box<dyn IndexMapper>> {
    let catalog = Catalog::load(config)?;
    Ok(for_strategy(catalog, config))
}

pub(crate) fn out_of_range(index: usize, total: usize) -> SolgraphError {
    SolgraphError::IndexOutOfRange { index, total }
}
