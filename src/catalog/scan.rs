// src/catalog/scan.rs
//! Directory scanning for the catalog.

use std::path::Path;

use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, SolgraphError};

/// Lists category directories directly under `root`, sorted by name.
/// Hidden entries (`.DS_Store`, `.git`) are skipped.
///
/// # Errors
/// Returns `Catalog` if the walk fails.
pub fn category_dirs(root: &Path) -> Result<Vec<String>> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut names = Vec::new();
    for entry in walker {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !entry.file_type().is_dir() {
            continue;
        }
        names.push(name);
    }
    debug!(root = %root.display(), categories = names.len(), "scanned catalog root");
    Ok(names)
}

/// Returns the sorted solution numbers present for `category`.
/// Only files named `<category>-<N>.<extension>` count.
///
/// # Errors
/// Returns `Catalog` if the category directory is missing or unreadable.
pub fn solution_numbers(root: &Path, category: &str, extension: &str) -> Result<Vec<usize>> {
    let dir = root.join(category);
    if !dir.is_dir() {
        return Err(SolgraphError::Catalog {
            path: dir,
            reason: format!("category directory for '{category}' is missing"),
        });
    }

    let pattern = solution_pattern(category, extension)?;
    let mut numbers = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if let Some(n) = parse_number(&pattern, &name) {
            numbers.push(n);
        }
    }
    numbers.sort_unstable();
    Ok(numbers)
}

fn solution_pattern(category: &str, extension: &str) -> Result<Regex> {
    let src = format!(
        r"^{}-(\d+)\.{}$",
        regex::escape(category),
        regex::escape(extension)
    );
    Regex::new(&src).map_err(|e| SolgraphError::Config(format!("bad solution pattern: {e}")))
}

fn parse_number(pattern: &Regex, file_name: &str) -> Option<usize> {
    let caps = pattern.captures(file_name)?;
    let n: usize = caps.get(1)?.as_str().parse().ok()?;
    (n >= 1).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_only_own_solution_files() {
        let re = solution_pattern("two-sum", "edges").unwrap();
        let cases = [
            ("two-sum-1.edges", Some(1)),
            ("two-sum-42.edges", Some(42)),
            ("two-sum-0.edges", None),
            ("two-sum-1.features", None),
            ("two-sum-ii-1.edges", None),
            ("3sum-1.edges", None),
            ("two-sum-1.edges.bak", None),
        ];
        for (name, expected) in cases {
            assert_eq!(parse_number(&re, name), expected, "{name}");
        }
    }

    #[test]
    fn escapes_category_names() {
        let re = solution_pattern("a.b", "edges").unwrap();
        assert_eq!(parse_number(&re, "a.b-3.edges"), Some(3));
        assert_eq!(parse_number(&re, "axb-3.edges"), None);
    }
}
