//! Open command implementation
//!
//! Opens a single match right away. Several matches are only listed unless
//! `--all` is given, in which case the first few are opened in order.

use std::io::Write;

use tracing::warn;

use crate::cli::OpenArgs;
use crate::config::Config;
use crate::domain::Target;
use crate::error::Result;
use crate::launcher::{Launcher, SystemLauncher};
use crate::resolver::{BATCH_CAP, Scope, Selection, search_targets, select};
use crate::search::Query;
use crate::ui;

/// Run open command
pub fn run(config: &Config, args: &OpenArgs) -> Result<()> {
    let scope = Scope::from_flags(args.project, args.version);
    let query = Query::new(&args.query);
    open(
        config,
        scope,
        &query,
        args.all,
        &SystemLauncher,
        &mut std::io::stdout().lock(),
    )
}

pub(crate) fn open(
    config: &Config,
    scope: Scope,
    query: &Query,
    all: bool,
    launcher: &dyn Launcher,
    out: &mut dyn Write,
) -> Result<()> {
    let targets = search_targets(config, scope, query)?;

    let selection = select(&targets, all);
    let capped = selection.is_capped();
    match selection {
        Selection::None => writeln!(out, "No matches found.")?,
        Selection::Single(target) => open_target(target, launcher, out)?,
        Selection::Ambiguous(items) => {
            ui::write_target_list(out, items)?;
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                ui::hint(&format!(
                    "Multiple matches ({}). Refine your arguments or pass --all/-a to open the first {BATCH_CAP} match(es).",
                    items.len()
                ))
            )?;
        }
        Selection::Batch { items, total } => {
            if capped {
                writeln!(out, "Opening first {} of {} matches.", items.len(), total)?;
            }
            for target in items {
                // Launch failures are per item; the rest of the batch still opens
                if let Err(e) = open_target(target, launcher, out) {
                    warn!("{}", e);
                }
            }
        }
    }

    Ok(())
}

fn open_target(target: &Target, launcher: &dyn Launcher, out: &mut dyn Write) -> Result<()> {
    launcher.launch(&target.launch_path())?;

    match target {
        Target::Project { root, .. } => writeln!(out, "Opening project: {}", root.display())?,
        Target::Version { root, .. } => writeln!(out, "Opening Studio Pro: {}", root.display())?,
    }
    Ok(())
}
