//! Error types and handling for mendix-pvm
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration file errors
//! - [`fs`]: Search root and file system errors
//! - [`convert`]: Launch and conversion tool errors

pub mod config;
pub mod convert;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mendix-pvm operations
#[derive(Error, Diagnostic, Debug)]
pub enum PvmError {
    // Configuration errors
    #[error("Could not determine the user home directory")]
    #[diagnostic(
        code(mx::config::no_home),
        help("Set MX_PVM_CONFIG to the full path of the configuration file")
    )]
    HomeDirUnavailable,

    #[error("Invalid configuration: {message}")]
    #[diagnostic(
        code(mx::config::invalid),
        help("Run 'mx config' to edit the configuration file")
    )]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(mx::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(mx::config::parse_failed),
        help("Run 'mx config' to fix the JSON, or delete the file to regenerate defaults")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to write configuration file: {path}: {reason}")]
    #[diagnostic(code(mx::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    // Search root errors
    #[error("Path does not exist: {path}")]
    #[diagnostic(
        code(mx::fs::not_found),
        help("Check the directories configured with 'mx config'")
    )]
    RootNotFound { path: String },

    #[error("Path is not a directory: {path}")]
    #[diagnostic(
        code(mx::fs::not_a_directory),
        help("Check the directories configured with 'mx config'")
    )]
    NotADirectory { path: String },

    #[error("Unable to read directory {path}: {reason}")]
    #[diagnostic(code(mx::fs::read_failed))]
    DirectoryReadFailed { path: String, reason: String },

    // Resolution errors
    #[error("No version matches found for '{query}'")]
    #[diagnostic(
        code(mx::resolve::no_version),
        help("Run 'mx list --version' to see the installed Studio Pro versions")
    )]
    NoVersionMatch { query: String },

    #[error("Multiple version matches ({count}) for '{query}'. Please refine --version")]
    #[diagnostic(
        code(mx::resolve::ambiguous_version),
        help("A conversion needs exactly one Studio Pro version")
    )]
    AmbiguousVersion { query: String, count: usize },

    // Launch and conversion errors
    #[error("Failed to open {path}: {reason}")]
    #[diagnostic(code(mx::launch::failed))]
    LaunchFailed { path: String, reason: String },

    #[error("Failed to start conversion tool {tool}: {reason}")]
    #[diagnostic(
        code(mx::convert::launch_failed),
        help("Check that the Studio Pro installation contains its modeler tools")
    )]
    ToolLaunchFailed { tool: String, reason: String },

    #[error("Conversion tool {tool} was terminated before reporting an exit code")]
    #[diagnostic(code(mx::convert::terminated))]
    ToolTerminated { tool: String },

    #[error("Failed to convert {project}: {outcome}")]
    #[diagnostic(
        code(mx::convert::failed),
        help("Pass --all/-a to keep converting the remaining projects after a failure")
    )]
    ConversionFailed { project: String, outcome: String },

    #[error("Failed to convert {project} (unexpected exit code {code})")]
    #[diagnostic(code(mx::convert::unexpected_exit_code))]
    UnexpectedExitCode { project: String, code: i32 },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(mx::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mx::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PvmError {
    fn from(err: std::io::Error) -> Self {
        PvmError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PvmError {
    fn from(err: serde_json::Error) -> Self {
        PvmError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PvmError>;
