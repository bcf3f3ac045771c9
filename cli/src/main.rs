//! `doclist`: renders documented lists (nested row data) as tables.
#![allow(clippy::exit)]

mod cli;
mod commands;
mod config;
mod output;
mod text;
mod timing;

use anyhow::Result;
use clap::Parser as _;
use doclist_directive::{JsonDirSource, Runner};
use tracing::{debug, instrument};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::Output;

fn main() {
    let cli = Cli::parse();
    timing::init_tracing(cli.verbose, cli.timing);

    if let Err(e) = run(cli) {
        Output::stderr().error(format!("{e:#}"));
        std::process::exit(1);
    }
}

#[instrument(skip_all, name = "doclist")]
fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let data_root = cli.data_root.unwrap_or_else(|| config.data_root());
    debug!("Data root: {}", data_root.display());

    let runner = Runner::new(JsonDirSource::new(data_root)).with_max_depth(config.max_depth());

    match cli.command {
        Commands::Render(args) => {
            let format = args.format.unwrap_or_else(|| config.format());
            commands::run_render(&runner, &args, config.default_header.as_deref(), format)
        }
        Commands::Directive { file, format } => {
            commands::run_directive(&runner, &file, format.unwrap_or_else(|| config.format()))
        }
        Commands::Check { file } => commands::run_check(&runner, &file),
        Commands::Completions { shell } => {
            commands::generate_completions(shell);
            Ok(())
        }
    }
}
