//! List command implementation
//!
//! Prints every project and/or version matching the query. Listing never
//! needs disambiguation, so all matches are shown regardless of count.

use std::io::Write;

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::resolver::{Scope, search_targets};
use crate::search::Query;
use crate::ui;

/// Run list command
pub fn run(config: &Config, args: &ListArgs) -> Result<()> {
    let scope = Scope::from_flags(args.project, args.version);
    let query = Query::new(&args.query);
    list(config, scope, &query, &mut std::io::stdout().lock())
}

pub(crate) fn list(
    config: &Config,
    scope: Scope,
    query: &Query,
    out: &mut dyn Write,
) -> Result<()> {
    let targets = search_targets(config, scope, query)?;

    if targets.is_empty() {
        writeln!(out, "No matches found.")?;
        return Ok(());
    }

    ui::write_target_list(out, &targets)?;
    Ok(())
}
