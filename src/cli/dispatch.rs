//! Command dispatch, kept out of the binary so it stays small.

use super::args::Commands;
use super::handlers::{
    handle_build, handle_catalog, handle_check, handle_classify, handle_init, handle_layout,
    handle_locate, handle_rank, handle_resolve, handle_sample,
};
use crate::config::Config;
use crate::exit::SolgraphExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: &Commands, config: &Config) -> Result<SolgraphExit> {
    match command {
        Commands::Init { force } => handle_init(*force),

        Commands::Catalog => handle_catalog(config),
        Commands::Check => handle_check(config),
        Commands::Resolve { index } => handle_resolve(config, *index),
        Commands::Locate { category, number } => handle_locate(config, category, *number),

        Commands::Sample { index } => handle_sample(config, *index),
        Commands::Build { start, end, output } => {
            handle_build(config, *start, *end, output.as_deref())
        }
        Commands::Layout(args) => handle_layout(config, args),

        Commands::Classify {
            edges,
            features,
            model,
            k,
        } => handle_classify(config, edges, features.as_deref(), model.as_deref(), *k),
        Commands::Rank { scores, k } => handle_rank(config, scores, *k),
    }
}
