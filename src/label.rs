// src/label.rs
//! One-hot label encoding.

use crate::catalog::Category;
use crate::error::{Result, SolgraphError};

/// Encodes `category` as a one-hot vector of length `category_count`.
///
/// # Errors
/// Returns `InvalidOrdinal` if `category.ordinal >= category_count`.
pub fn encode(category: &Category, category_count: usize) -> Result<Vec<u8>> {
    if category.ordinal >= category_count {
        return Err(SolgraphError::InvalidOrdinal {
            ordinal: category.ordinal,
            count: category_count,
        });
    }
    let mut label = vec![0; category_count];
    label[category.ordinal] = 1;
    Ok(label)
}

/// Ordinal of a well-formed one-hot vector.
#[must_use]
pub fn decode(label: &[u8]) -> Option<usize> {
    let mut hot = label.iter().enumerate().filter(|(_, &v)| v != 0);
    match (hot.next(), hot.next()) {
        (Some((i, &1)), None) => Some(i),
        _ => None,
    }
}

/// Label encoder bound to one catalog size.
#[derive(Debug, Clone, Copy)]
pub struct LabelEncoder {
    category_count: usize,
}

impl LabelEncoder {
    #[must_use]
    pub fn new(category_count: usize) -> Self {
        Self { category_count }
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.category_count
    }

    /// # Errors
    /// Returns `InvalidOrdinal` for ordinals outside the catalog.
    pub fn encode(&self, category: &Category) -> Result<Vec<u8>> {
        encode(category, self.category_count)
    }
}
