//! mx - Mendix project and version manager
//!
//! Finds Mendix projects and Studio Pro versions by fuzzy directory name,
//! opens them with the system handler and converts projects in place to
//! another Studio Pro version.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod classify;
mod cli;
mod commands;
mod config;
mod convert;
mod domain;
mod error;
mod launcher;
mod resolver;
mod search;
mod ui;

use cli::{Cli, Commands};
use error::Result;

/// Initialize logging on stderr; stdout carries command output
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        // Must work with a broken configuration so it can be repaired
        Commands::Config => commands::config::run(),
        Commands::Completions(args) => commands::completions::run(args),
        Commands::List(args) => commands::list::run(&config::store::load()?, &args),
        Commands::Open(args) => commands::open::run(&config::store::load()?, &args),
        Commands::Convert(args) => commands::convert::run(&config::store::load()?, &args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("Help: {}", help);
        }
        std::process::exit(1);
    }
}
