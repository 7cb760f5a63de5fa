// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::graph::validate::TreeViolation;

#[derive(Debug, Error)]
pub enum SolgraphError {
    #[error("index {index} is out of range (dataset holds {total} samples)")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("solution file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("malformed graph in {origin}: {reason}")]
    MalformedGraph { origin: String, reason: String },

    #[error("node '{node}' has no feature annotation (source: {origin})")]
    MissingFeature { node: String, origin: String },

    #[error("node '{node}' in {origin} has {found} features, expected {expected}")]
    FeatureDimension {
        node: String,
        origin: String,
        expected: usize,
        found: usize,
    },

    #[error("malformed feature table {origin} at line {line}: {reason}")]
    MalformedFeatures {
        origin: String,
        line: usize,
        reason: String,
    },

    #[error("graph is not a rooted tree: {0}")]
    NotATree(TreeViolation),

    #[error("category ordinal {ordinal} is invalid for a catalog of {count} categories")]
    InvalidOrdinal { ordinal: usize, count: usize },

    #[error("cannot take top {k} of {len} scores")]
    InvalidTopK { k: usize, len: usize },

    #[error("score at index {index} is not a finite number")]
    InvalidScore { index: usize },

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("catalog error at {}: {reason}", path.display())]
    Catalog { path: PathBuf, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("classifier error: {0}")]
    Classifier(String),

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SolgraphError>;

impl SolgraphError {
    /// Maps an I/O failure on `path`, turning `NotFound` into [`SolgraphError::FileNotFound`].
    #[must_use]
    pub fn from_io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            SolgraphError::FileNotFound { path }
        } else {
            SolgraphError::Io { source, path }
        }
    }

    /// Short stable label used when tallying batch failures.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "index-out-of-range",
            Self::FileNotFound { .. } => "file-not-found",
            Self::MalformedGraph { .. } => "malformed-graph",
            Self::MissingFeature { .. } => "missing-feature",
            Self::FeatureDimension { .. } => "feature-dimension",
            Self::MalformedFeatures { .. } => "malformed-features",
            Self::NotATree(_) => "not-a-tree",
            Self::InvalidOrdinal { .. } => "invalid-ordinal",
            Self::InvalidTopK { .. } => "invalid-top-k",
            Self::InvalidScore { .. } => "invalid-score",
            Self::UnknownCategory(_) => "unknown-category",
            Self::Catalog { .. } => "catalog",
            Self::Config(_) => "config",
            Self::Classifier(_) => "classifier",
            Self::Io { .. } => "io",
            Self::Json(_) => "json",
        }
    }
}

// Allow `?` on std::io::Error by converting to SolgraphError::Io with unknown path.
impl From<std::io::Error> for SolgraphError {
    fn from(source: std::io::Error) -> Self {
        SolgraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<walkdir::Error> for SolgraphError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from);
        SolgraphError::Catalog {
            path,
            reason: e.to_string(),
        }
    }
}

impl From<TreeViolation> for SolgraphError {
    fn from(v: TreeViolation) -> Self {
        SolgraphError::NotATree(v)
    }
}
