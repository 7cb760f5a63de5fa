// src/catalog/mod.rs
//! The category catalog as observed on disk.
//!
//! Layout: `root/<category>/<category>-<N>.<extension>`. Ordinals are positions
//! in the listing captured at construction and never change afterwards.

pub mod scan;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::CatalogConfig;
use crate::error::{Result, SolgraphError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    pub name: String,
    pub ordinal: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub category: Category,
    /// 1-based solution number.
    pub number: usize,
    pub path: PathBuf,
}

/// Missing solution numbers in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    pub category: String,
    pub missing: Vec<usize>,
}

/// Categories plus the solution count observed for each.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
    extension: String,
    categories: Vec<Category>,
    counts: Vec<usize>,
    numbers: Vec<Vec<usize>>,
}

impl Catalog {
    /// Scans `config.root` according to `config`.
    ///
    /// # Errors
    /// Returns `Catalog` if the root is not a readable directory or a listed
    /// category directory is missing.
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        let root = config.root.clone();
        if !root.is_dir() {
            return Err(SolgraphError::Catalog {
                path: root,
                reason: "catalog root is not a directory".to_string(),
            });
        }

        let mut names = if config.categories.is_empty() {
            scan::category_dirs(&root)?
        } else {
            config.categories.clone()
        };
        if let Some(limit) = config.category_limit {
            names.truncate(limit);
        }

        let mut numbers = Vec::with_capacity(names.len());
        for name in &names {
            numbers.push(scan::solution_numbers(&root, name, &config.extension)?);
        }

        let counts = numbers
            .iter()
            .map(|n| config.per_category_limit.map_or(n.len(), |cap| n.len().min(cap)))
            .collect();

        Ok(Self {
            root,
            extension: config.extension.clone(),
            categories: enumerate(names),
            counts,
            numbers,
        })
    }

    /// Builds a catalog from known counts without touching the filesystem.
    #[must_use]
    pub fn from_counts(root: impl Into<PathBuf>, extension: &str, entries: &[(&str, usize)]) -> Self {
        let names = entries.iter().map(|(n, _)| (*n).to_string()).collect();
        Self {
            root: root.into(),
            extension: extension.to_string(),
            categories: enumerate(names),
            counts: entries.iter().map(|(_, c)| *c).collect(),
            numbers: entries.iter().map(|(_, c)| (1..=*c).collect()).collect(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Solution counts per category, in ordinal order.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    #[must_use]
    pub fn category(&self, ordinal: usize) -> Option<&Category> {
        self.categories.get(ordinal)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Category name lookup used by the ranker.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// `root/<category>/<category>-<number>.<extension>`.
    #[must_use]
    pub fn solution_path(&self, category: &str, number: usize) -> PathBuf {
        self.root
            .join(category)
            .join(format!("{category}-{number}.{}", self.extension))
    }

    #[must_use]
    pub fn solution(&self, category: &Category, number: usize) -> Solution {
        Solution {
            path: self.solution_path(&category.name, number),
            category: category.clone(),
            number,
        }
    }

    /// Numbers missing below each category's highest observed number.
    #[must_use]
    pub fn gaps(&self) -> Vec<Gap> {
        self.categories
            .iter()
            .zip(&self.numbers)
            .filter_map(|(cat, present)| {
                let max = present.last().copied().unwrap_or(0);
                let missing: Vec<usize> = (1..=max)
                    .filter(|n| present.binary_search(n).is_err())
                    .collect();
                (!missing.is_empty()).then(|| Gap {
                    category: cat.name.clone(),
                    missing,
                })
            })
            .collect()
    }
}

fn enumerate(names: Vec<String>) -> Vec<Category> {
    names
        .into_iter()
        .enumerate()
        .map(|(ordinal, name)| Category { name, ordinal })
        .collect()
}
