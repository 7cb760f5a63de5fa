// src/index/scanned.rs
use super::{out_of_range, IndexMapper};
use crate::catalog::{Catalog, Solution};
use crate::error::{Result, SolgraphError};

/// Uses the per-category counts observed when the catalog was scanned.
#[derive(Debug, Clone)]
pub struct ScannedMapper {
    catalog: Catalog,
    /// `offsets[i]` is the first flat index of category `i`; one extra entry
    /// holds the total.
    offsets: Vec<usize>,
}

impl ScannedMapper {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let mut offsets = Vec::with_capacity(catalog.len() + 1);
        let mut acc = 0;
        offsets.push(acc);
        for &count in catalog.counts() {
            acc += count;
            offsets.push(acc);
        }
        Self { catalog, offsets }
    }
}

impl IndexMapper for ScannedMapper {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn total_count(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }

    fn resolve(&self, index: usize) -> Result<Solution> {
        let total = self.total_count();
        if index >= total {
            return Err(out_of_range(index, total));
        }
        // Last category whose first index is <= index; empty categories share
        // their offset with the next one and are skipped by taking the last.
        let ordinal = self.offsets.partition_point(|&start| start <= index) - 1;
        let category = self
            .catalog
            .category(ordinal)
            .ok_or_else(|| out_of_range(index, total))?;
        Ok(self.catalog.solution(category, index - self.offsets[ordinal] + 1))
    }

    fn locate(&self, category: &str, number: usize) -> Result<usize> {
        let cat = self
            .catalog
            .find(category)
            .ok_or_else(|| SolgraphError::UnknownCategory(category.to_string()))?;
        let count = self.catalog.counts()[cat.ordinal];
        if number == 0 || number > count {
            return Err(out_of_range(number, count));
        }
        Ok(self.offsets[cat.ordinal] + number - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_uneven_counts() {
        let catalog = Catalog::from_counts("/d", "edges", &[("a", 2), ("b", 0), ("c", 3)]);
        let m = ScannedMapper::new(catalog);
        assert_eq!(m.total_count(), 5);

        let got: Vec<(String, usize)> = (0..5)
            .map(|i| {
                let s = m.resolve(i).unwrap();
                (s.category.name, s.number)
            })
            .collect();
        let expected = [("a", 1), ("a", 2), ("c", 1), ("c", 2), ("c", 3)];
        for ((name, n), (want_name, want_n)) in got.iter().zip(expected) {
            assert_eq!((name.as_str(), *n), (want_name, want_n));
        }
        assert!(m.resolve(5).is_err());
    }
}
