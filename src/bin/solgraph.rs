// src/bin/solgraph.rs
use clap::Parser;
use colored::Colorize;
use solgraph_core::cli::{self, Cli, Commands};
use solgraph_core::config::Config;
use solgraph_core::exit::SolgraphExit;
use solgraph_core::logging;

fn main() -> SolgraphExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            SolgraphExit::for_error(&e)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<SolgraphExit> {
    let mut config = match (&cli.command, &cli.config) {
        // init must work even when an existing config is broken
        (Commands::Init { .. }, _) => Config::new(),
        (_, Some(path)) => Config::from_file(path)?,
        (_, None) => Config::load()?,
    };
    config.verbose = cli.verbose;
    cli::dispatch::execute(&cli.command, &config)
}
