//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - list: List command arguments
//! - open: Open command arguments
//! - convert: Convert command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod convert;
pub mod list;
pub mod open;

pub use completions::CompletionsArgs;
pub use convert::ConvertArgs;
pub use list::ListArgs;
pub use open::OpenArgs;

/// mx - Mendix project and version manager
///
/// Find, open and convert Mendix Studio Pro versions and projects.
#[derive(Parser, Debug)]
#[command(
    name = "mx",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Mendix Project Manager",
    long_about = "A CLI tool for managing Mendix Studio Pro versions and projects. \
                  Queries are matched word by word against directory names, ignoring \
                  case, spaces and punctuation.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mx list                          \x1b[90m# List all projects and versions\x1b[0m\n   \
                  mx open portal                   \x1b[90m# Open the project matching 'portal'\x1b[0m\n   \
                  mx open -v 10.6 --all            \x1b[90m# Open up to 3 matching versions\x1b[0m\n   \
                  mx convert -v 10.6.3 -p portal   \x1b[90m# Convert a project in place\x1b[0m\n   \
                  mx config                        \x1b[90m# Edit the search directories\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the config file
    Config,

    /// Search projects and versions using arguments
    List(ListArgs),

    /// Open a Mendix project or Studio Pro version
    #[command(
        long_about = "Open any Mendix project or Studio Pro version matching the arguments. \
                      If several items match, refine the arguments until only one does, \
                      or pass --all/-a to open the first 3 matches."
    )]
    Open(OpenArgs),

    /// Convert Mendix projects from one version to another
    #[command(
        long_about = "Convert a Mendix project in place with the tooling of one Studio Pro \
                      version. The version query must match exactly one installed version. \
                      Use --all/-a to convert up to 3 matching projects."
    )]
    Convert(ConvertArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
