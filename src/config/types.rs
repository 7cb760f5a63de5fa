use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How flat sample indices map onto solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IndexStrategy {
    /// Every category holds exactly `page_size` solutions.
    FixedPage,
    /// Per-category counts come from the files present.
    #[default]
    Scanned,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default)]
    pub strategy: IndexStrategy,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Explicit listing; empty means scan the root.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub category_limit: Option<usize>,
    #[serde(default)]
    pub per_category_limit: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            strategy: IndexStrategy::default(),
            page_size: default_page_size(),
            extension: default_extension(),
            categories: Vec::new(),
            category_limit: None,
            per_category_limit: None,
        }
    }
}

fn default_root() -> PathBuf { PathBuf::from("data/raw") }
const fn default_page_size() -> usize { 500 }
fn default_extension() -> String { "edges".to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    #[serde(default = "default_dimension")]
    pub dimension: usize,
    #[serde(default = "default_sidecar_extension")]
    pub sidecar_extension: String,
    /// One table shared by every solution; overrides sidecars when set.
    #[serde(default)]
    pub table: Option<PathBuf>,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            sidecar_extension: default_sidecar_extension(),
            table: None,
        }
    }
}

const fn default_dimension() -> usize { 139 }
fn default_sidecar_extension() -> String { "features".to_string() }

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_level_gap")]
    pub level_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { width: default_width(), level_gap: default_level_gap() }
    }
}

const fn default_width() -> f64 { crate::layout::DEFAULT_WIDTH }
const fn default_level_gap() -> f64 { crate::layout::DEFAULT_LEVEL_GAP }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default)]
    pub model: Option<PathBuf>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self { top_k: default_top_k(), model: None }
    }
}

const fn default_top_k() -> usize { 3 }

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Worker threads for batch construction; `None` uses the rayon default.
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Contents of `solgraph.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolgraphToml {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub features: FeatureConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}
