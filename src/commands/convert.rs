//! Convert command implementation
//!
//! Resolves exactly one Studio Pro version, then converts the matching
//! projects in place one at a time with that version's `mx` tool.
//!
//! Recognized failures stop the run unless `--all` is given. An exit code
//! the tool does not document always stops the run.

use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use crate::cli::ConvertArgs;
use crate::config::Config;
use crate::convert::{ConversionOutcome, Converter, MxConverter};
use crate::domain::{Domain, Target};
use crate::error::{self, PvmError, Result};
use crate::resolver::{BATCH_CAP, Selection, search_domain, select};
use crate::search::Query;
use crate::ui;

/// Run convert command
pub fn run(config: &Config, args: &ConvertArgs) -> Result<()> {
    convert(config, args, &MxConverter, &mut std::io::stdout().lock())
}

pub(crate) fn convert(
    config: &Config,
    args: &ConvertArgs,
    converter: &dyn Converter,
    out: &mut dyn Write,
) -> Result<()> {
    let version = resolve_version(config, &args.version, out)?;
    debug!("Converting with Studio Pro at {}", version.root().display());

    let projects = search_domain(
        &config.project_directory,
        Domain::Project,
        &Query::from_option(&args.project),
    )?;

    let selection = select(&projects, args.all);
    let capped = selection.is_capped();
    let batch: Vec<&Target> = match selection {
        Selection::None => {
            writeln!(out, "No project matches found.")?;
            return Ok(());
        }
        Selection::Ambiguous(items) => {
            ui::write_target_list(out, items)?;
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                ui::hint(&format!(
                    "Multiple matches ({}). Refine your --project argument or pass --all/-a to convert the first {BATCH_CAP} match(es).",
                    items.len()
                ))
            )?;
            return Ok(());
        }
        Selection::Single(target) => vec![target],
        Selection::Batch { items, total } => {
            if capped {
                writeln!(out, "Converting first {} of {} matches.", items.len(), total)?;
            }
            items.iter().collect()
        }
    };

    let count = batch.len();
    let mut converted = 0;
    for (index, project) in batch.into_iter().enumerate() {
        let project_root = project.root();
        writeln!(
            out,
            "({}/{}) Converting project: {}",
            index + 1,
            count,
            project_root.display()
        )?;

        let outcome = run_one(converter, version.root(), project_root)?;
        writeln!(out, "{}", outcome_line(outcome, project_root))?;

        if outcome.is_success() {
            converted += 1;
        } else if let ConversionOutcome::Unexpected(code) = outcome {
            return Err(error::convert::unexpected_exit_code(project_root, code));
        } else if !args.all {
            return Err(PvmError::ConversionFailed {
                project: project_root.display().to_string(),
                outcome: outcome.to_string(),
            });
        }
    }

    if count > 1 {
        writeln!(out, "Converted {converted} of {count} project(s).")?;
    }

    Ok(())
}

/// Resolve the `--version` query to exactly one installed version
fn resolve_version(config: &Config, query: &str, out: &mut dyn Write) -> Result<Target> {
    let mut versions = search_domain(
        &config.version_directory,
        Domain::Version,
        &Query::from_option(query),
    )?;

    match versions.len() {
        0 => Err(PvmError::NoVersionMatch {
            query: query.to_string(),
        }),
        1 => Ok(versions.remove(0)),
        count => {
            ui::write_target_list(out, &versions)?;
            Err(PvmError::AmbiguousVersion {
                query: query.to_string(),
                count,
            })
        }
    }
}

fn run_one(
    converter: &dyn Converter,
    version_root: &Path,
    project_root: &Path,
) -> Result<ConversionOutcome> {
    match converter.convert(version_root, project_root) {
        Ok(code) => Ok(ConversionOutcome::from_exit_code(code)),
        Err(e @ PvmError::ToolLaunchFailed { .. }) => {
            warn!("{}", e);
            Ok(ConversionOutcome::ToolLaunchError)
        }
        Err(e) => Err(e),
    }
}

fn outcome_line(outcome: ConversionOutcome, project_root: &Path) -> String {
    let path = project_root.display();
    match outcome {
        ConversionOutcome::Success => format!("Finished converting: {path} (success)"),
        ConversionOutcome::InternalError => format!("Internal error during conversion: {path}"),
        ConversionOutcome::OptionsError => format!("Error with options: {path}"),
        ConversionOutcome::ConversionFailed => format!("Conversion failed: {path}"),
        ConversionOutcome::ToolLaunchError => {
            format!("Could not start the conversion tool for: {path}")
        }
        ConversionOutcome::Unexpected(code) => {
            format!("Unexpected exit code {code} while converting: {path}")
        }
    }
}
