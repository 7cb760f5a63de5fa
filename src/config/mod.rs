// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{
    CatalogConfig, DatasetConfig, FeatureConfig, IndexStrategy, InferenceConfig, LayoutConfig,
    SolgraphToml,
};
use crate::error::{Result, SolgraphError};
use std::path::Path;

pub const CONFIG_FILE: &str = "solgraph.toml";

/// Effective settings for one run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub features: FeatureConfig,
    pub layout: LayoutConfig,
    pub inference: InferenceConfig,
    pub dataset: DatasetConfig,
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `solgraph.toml` from the working directory, falling back to defaults.
    ///
    /// # Errors
    /// Returns `Config` if the file exists but is invalid.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Self::from_toml(io::load_local(&cwd)?);
        config.validate()?;
        Ok(config)
    }

    /// Loads an explicit config file.
    ///
    /// # Errors
    /// Returns error if the file is unreadable or invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = Self::from_toml(io::load_file(path)?);
        config.validate()?;
        Ok(config)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    /// Returns `Config` on parse or validation failure.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config = Self::from_toml(io::parse_toml(content)?);
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn from_toml(toml: SolgraphToml) -> Self {
        Self {
            catalog: toml.catalog,
            features: toml.features,
            layout: toml.layout,
            inference: toml.inference,
            dataset: toml.dataset,
            verbose: false,
        }
    }

    #[must_use]
    pub fn to_toml(&self) -> SolgraphToml {
        SolgraphToml {
            catalog: self.catalog.clone(),
            features: self.features.clone(),
            layout: self.layout,
            inference: self.inference.clone(),
            dataset: self.dataset.clone(),
        }
    }

    /// Validates numeric settings.
    ///
    /// # Errors
    /// Returns `Config` naming the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(SolgraphError::Config(msg.to_string()));
        if self.catalog.page_size == 0 {
            return invalid("catalog.page_size must be at least 1");
        }
        if self.catalog.extension.is_empty() {
            return invalid("catalog.extension must not be empty");
        }
        if self.features.dimension == 0 {
            return invalid("features.dimension must be at least 1");
        }
        if self.features.sidecar_extension == self.catalog.extension {
            return invalid("features.sidecar_extension must differ from catalog.extension");
        }
        if self.inference.top_k == 0 {
            return invalid("inference.top_k must be at least 1");
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.layout.width) || !positive(self.layout.level_gap) {
            return invalid("layout.width and layout.level_gap must be positive");
        }
        if self.dataset.workers == Some(0) {
            return invalid("dataset.workers must be at least 1");
        }
        Ok(())
    }

    /// Writes the current settings to `path`.
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(&self.to_toml(), path)
    }
}
