//! Config command implementation

use crate::config::store;
use crate::error::Result;
use crate::launcher::SystemLauncher;

/// Open the configuration file, creating it with defaults when missing
pub fn run() -> Result<()> {
    let path = store::open(&SystemLauncher)?;
    println!("Opening config file: {}", path.display());
    Ok(())
}
