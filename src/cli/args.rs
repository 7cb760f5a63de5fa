use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "solgraph",
    version,
    about = "Build labeled co-occurrence graph datasets and rank classifier output"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Config file (defaults to ./solgraph.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default solgraph.toml
    Init {
        #[arg(long, short)]
        force: bool,
    },
    /// List categories, ordinals and solution counts
    Catalog,
    /// Report gaps in solution numbering
    Check,
    /// Map a flat index to its solution
    Resolve {
        #[arg(value_name = "INDEX")]
        index: usize,
    },
    /// Map a category and solution number back to its flat index
    Locate {
        category: String,
        #[arg(value_name = "NUMBER")]
        number: usize,
    },
    /// Build one sample and print its statistics
    Sample {
        #[arg(value_name = "INDEX")]
        index: usize,
    },
    /// Build a range of samples, isolating failures
    Build {
        #[arg(long, default_value = "0")]
        start: usize,
        /// Exclusive end; defaults to the dataset size
        #[arg(long)]
        end: Option<usize>,
        /// Write successful samples as JSON Lines
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print hierarchical layout coordinates as JSON
    Layout(LayoutArgs),
    /// Classify an inline edge list with the configured model
    Classify {
        /// Edge list text, one `parent child` pair per line
        #[arg(long)]
        edges: String,
        /// Feature table for the nodes (defaults to features.table)
        #[arg(long, value_name = "FILE")]
        features: Option<PathBuf>,
        /// Model weights (defaults to inference.model)
        #[arg(long, value_name = "FILE")]
        model: Option<PathBuf>,
        #[arg(long, short)]
        k: Option<usize>,
    },
    /// Rank a raw score vector against the catalog
    Rank {
        /// Comma-separated scores, one per category
        #[arg(long, allow_hyphen_values = true)]
        scores: String,
        #[arg(long, short)]
        k: Option<usize>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Sample index to lay out
    #[arg(value_name = "INDEX", conflicts_with = "edges", required_unless_present = "edges")]
    pub index: Option<usize>,
    /// Inline edge list instead of a catalog sample
    #[arg(long)]
    pub edges: Option<String>,
    #[arg(long)]
    pub root: Option<String>,
    #[arg(long)]
    pub width: Option<f64>,
    #[arg(long)]
    pub level_gap: Option<f64>,
}
