//! Version classifier

use std::path::Path;

use tracing::debug;

use crate::domain::Target;

/// Subdirectory every Studio Pro installation ships its executables in
pub const MODELER_DIR: &str = "modeler";

/// Classify `dir` as a Studio Pro version
pub fn classify(dir: &Path) -> Option<Target> {
    let modeler_dir = dir.join(MODELER_DIR);
    match std::fs::metadata(&modeler_dir) {
        Ok(metadata) if metadata.is_dir() => Some(Target::Version {
            root: dir.to_path_buf(),
            modeler_dir,
        }),
        Ok(_) => None,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                debug!("Cannot stat {}: {}", modeler_dir.display(), e);
            }
            None
        }
    }
}
