//! Terminal presentation of search results
//!
//! Styling comes from `console`, which turns itself off when the output is
//! not a terminal.

use std::io::Write;

use console::Style;

use crate::domain::{Domain, Target};

fn name_style(domain: Domain) -> Style {
    match domain {
        Domain::Project => Style::new().cyan(),
        Domain::Version => Style::new().yellow(),
    }
}

/// Write one `- <dir name>` line per target
pub fn write_target_list(out: &mut dyn Write, targets: &[Target]) -> std::io::Result<()> {
    for target in targets {
        writeln!(
            out,
            "- {}",
            name_style(target.domain()).apply_to(target.name())
        )?;
    }
    Ok(())
}

/// Style a notice that asks the user to act
pub fn hint(message: &str) -> String {
    Style::new().bold().apply_to(message).to_string()
}
