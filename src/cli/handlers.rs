use crate::catalog::Catalog;
use crate::config::{Config, CONFIG_FILE};
use crate::dataset::{export, DatasetAssembler};
use crate::exit::SolgraphExit;
use crate::graph::{parse_edges, FeatureTable, GraphBuilder};
use crate::index;
use crate::inference::{self, InferenceEngine, LinearHead};
use crate::layout::HierarchyLayout;
use crate::reporting;
use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::args::LayoutArgs;

/// Writes a default config to the working directory.
///
/// # Errors
/// Returns error if the file exists (without `force`) or cannot be written.
pub fn handle_init(force: bool) -> Result<SolgraphExit> {
    let path = PathBuf::from(CONFIG_FILE);
    if path.exists() && !force {
        bail!("{CONFIG_FILE} already exists (use --force to overwrite)");
    }
    Config::new().save(&path)?;
    println!("{}", format!("[OK] Wrote {CONFIG_FILE}").green().bold());
    Ok(SolgraphExit::Success)
}

/// # Errors
/// Returns error if the catalog cannot be scanned.
pub fn handle_catalog(config: &Config) -> Result<SolgraphExit> {
    let mapper = index::from_config(&config.catalog)?;
    reporting::print_catalog(mapper.as_ref());
    Ok(SolgraphExit::Success)
}

/// # Errors
/// Returns error if the catalog cannot be scanned.
pub fn handle_check(config: &Config) -> Result<SolgraphExit> {
    let catalog = Catalog::load(&config.catalog)?;
    let gaps = catalog.gaps();
    reporting::print_gaps(&gaps);
    if gaps.is_empty() {
        Ok(SolgraphExit::Success)
    } else {
        Ok(SolgraphExit::InvalidInput)
    }
}

/// # Errors
/// Returns error if the catalog cannot be scanned or the index is out of range.
pub fn handle_resolve(config: &Config, index: usize) -> Result<SolgraphExit> {
    let mapper = index::from_config(&config.catalog)?;
    let solution = mapper.resolve(index)?;
    reporting::print_solution(index, &solution);
    Ok(SolgraphExit::Success)
}

/// # Errors
/// Returns error if the category is unknown or the number is out of range.
pub fn handle_locate(config: &Config, category: &str, number: usize) -> Result<SolgraphExit> {
    let mapper = index::from_config(&config.catalog)?;
    let index = mapper.locate(category, number)?;
    let solution = mapper.resolve(index)?;
    reporting::print_solution(index, &solution);
    Ok(SolgraphExit::Success)
}

/// # Errors
/// Returns the sample's build error.
pub fn handle_sample(config: &Config, index: usize) -> Result<SolgraphExit> {
    let assembler = DatasetAssembler::from_config(config)?;
    let sample = assembler.build_sample(index)?;
    reporting::print_sample(&sample);
    Ok(SolgraphExit::Success)
}

/// Builds `start..end`, reports failures, and optionally exports successes.
///
/// # Errors
/// Returns error on catalog/config failures or if the export cannot be written.
/// Per-sample failures are reported, not returned.
pub fn handle_build(
    config: &Config,
    start: usize,
    end: Option<usize>,
    output: Option<&Path>,
) -> Result<SolgraphExit> {
    let assembler = DatasetAssembler::from_config(config)?;
    let end = end.unwrap_or(assembler.len()).min(assembler.len());
    if start > end {
        bail!("--start {start} is past the end of the range ({end})");
    }

    let report = assembler.build_range(start..end);
    reporting::print_batch_report(&report);

    if let Some(path) = output {
        let written = export::write_jsonl(path, report.successes())
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Saved {written} samples to {}", path.display());
    }

    if report.has_failures() {
        Ok(SolgraphExit::PartialFailure)
    } else {
        Ok(SolgraphExit::Success)
    }
}

/// # Errors
/// Returns `NotATree` for malformed trees, or build errors for catalog samples.
pub fn handle_layout(config: &Config, args: &LayoutArgs) -> Result<SolgraphExit> {
    let graph = match (&args.edges, args.index) {
        (Some(edges), _) => parse_edges(edges, "<inline>")?,
        (None, Some(index)) => DatasetAssembler::from_config(config)?.build_sample(index)?.graph,
        (None, None) => bail!("either INDEX or --edges is required"),
    };

    let layout = HierarchyLayout::new(
        args.width.unwrap_or(config.layout.width),
        args.level_gap.unwrap_or(config.layout.level_gap),
    );
    let positions = layout.layout(&graph, args.root.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&positions)?);
    Ok(SolgraphExit::Success)
}

/// # Errors
/// Returns error if features or model are missing, or classification fails.
pub fn handle_classify(
    config: &Config,
    edges: &str,
    features: Option<&Path>,
    model: Option<&Path>,
    k: Option<usize>,
) -> Result<SolgraphExit> {
    let features_path = features
        .or(config.features.table.as_deref())
        .ok_or_else(|| anyhow!("no feature table: pass --features or set features.table"))?;
    let model_path = model
        .or(config.inference.model.as_deref())
        .ok_or_else(|| anyhow!("no model: pass --model or set inference.model"))?;

    let table = FeatureTable::load(features_path, config.features.dimension)?;
    let head = LinearHead::load(model_path)?;
    let catalog = Catalog::load(&config.catalog)?;

    let engine = InferenceEngine::new(
        GraphBuilder::new(config.features.dimension, config.features.sidecar_extension.clone()),
        Box::new(head),
        catalog.names(),
        k.unwrap_or(config.inference.top_k),
    );
    let prediction = engine.classify_edges(edges, &table)?;
    reporting::print_prediction(&prediction);
    Ok(SolgraphExit::Success)
}

/// # Errors
/// Returns error if the scores do not parse or ranking fails.
pub fn handle_rank(config: &Config, scores: &str, k: Option<usize>) -> Result<SolgraphExit> {
    let scores = parse_scores(scores)?;
    let catalog = Catalog::load(&config.catalog)?;
    let prediction =
        inference::rank(&scores, k.unwrap_or(config.inference.top_k), &catalog.names())?;
    reporting::print_prediction(&prediction);
    Ok(SolgraphExit::Success)
}

fn parse_scores(text: &str) -> Result<Vec<f32>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f32>().with_context(|| format!("invalid score '{s}'")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_score_lists() {
        assert_eq!(parse_scores("0.1, 5.2,-3").unwrap(), [0.1, 5.2, -3.0]);
        assert_eq!(parse_scores("1,").unwrap(), [1.0]);
        assert!(parse_scores("1,x").is_err());
    }
}
