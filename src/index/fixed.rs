// src/index/fixed.rs
use super::{out_of_range, IndexMapper};
use crate::catalog::{Catalog, Solution};
use crate::error::{Result, SolgraphError};

/// Assumes every category holds exactly `page_size` solutions.
///
/// Short categories are not detected here; opening a missing file fails with
/// `FileNotFound` at build time.
#[derive(Debug, Clone)]
pub struct FixedPageMapper {
    catalog: Catalog,
    page_size: usize,
}

impl FixedPageMapper {
    /// A zero `page_size` is treated as 1; config validation rejects it first.
    #[must_use]
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl IndexMapper for FixedPageMapper {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn total_count(&self) -> usize {
        self.catalog.len() * self.page_size
    }

    fn resolve(&self, index: usize) -> Result<Solution> {
        let total = self.total_count();
        let category = self
            .catalog
            .category(index / self.page_size)
            .filter(|_| index < total)
            .ok_or_else(|| out_of_range(index, total))?;
        Ok(self.catalog.solution(category, index % self.page_size + 1))
    }

    fn locate(&self, category: &str, number: usize) -> Result<usize> {
        let cat = self
            .catalog
            .find(category)
            .ok_or_else(|| SolgraphError::UnknownCategory(category.to_string()))?;
        if number == 0 || number > self.page_size {
            return Err(out_of_range(number, self.page_size));
        }
        Ok(cat.ordinal * self.page_size + number - 1)
    }
}
