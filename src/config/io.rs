// src/config/io.rs
use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::SolgraphToml;
use super::CONFIG_FILE;
use crate::error::{Result, SolgraphError};

/// Parses TOML text into config sections.
///
/// # Errors
/// Returns `Config` on syntax or type errors.
pub fn parse_toml(content: &str) -> Result<SolgraphToml> {
    toml::from_str(content).map_err(|e| SolgraphError::Config(e.to_string()))
}

/// Reads a config file.
///
/// # Errors
/// Returns `FileNotFound`/`Io` if unreadable, `Config` if invalid.
pub fn load_file(path: &Path) -> Result<SolgraphToml> {
    let content = fs::read_to_string(path).map_err(|e| SolgraphError::from_io(e, path))?;
    debug!(path = %path.display(), "loaded config");
    parse_toml(&content)
}

/// Reads `solgraph.toml` from `dir`, or defaults when absent.
///
/// # Errors
/// Returns `Config` if the file exists but is invalid.
pub fn load_local(dir: &Path) -> Result<SolgraphToml> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        load_file(&path)
    } else {
        Ok(SolgraphToml::default())
    }
}

/// Writes the config as TOML.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save_to_file(toml: &SolgraphToml, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(toml).map_err(|e| SolgraphError::Config(e.to_string()))?;
    fs::write(path, content).map_err(|e| SolgraphError::from_io(e, path))
}
