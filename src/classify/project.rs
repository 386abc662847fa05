//! Project classifier

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Target;

/// Extension of a Mendix project definition file
pub const PROJECT_FILE_EXTENSION: &str = "mpr";

fn is_project_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PROJECT_FILE_EXTENSION))
}

/// Find the single project file directly inside `dir`
///
/// Returns `Ok(None)` when there is no project file or more than one, since
/// neither identifies a project unambiguously.
pub fn find_project_file(dir: &Path) -> std::io::Result<Option<PathBuf>> {
    let mut found: Option<PathBuf> = None;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }

        let path = entry.path();
        if !is_project_file(&path) {
            continue;
        }

        if found.is_some() {
            debug!("Multiple project files in {}, skipping", dir.display());
            return Ok(None);
        }
        found = Some(path);
    }

    Ok(found)
}

/// Classify `dir` as a project
pub fn classify(dir: &Path) -> Option<Target> {
    match find_project_file(dir) {
        Ok(Some(project_file)) => Some(Target::Project {
            root: dir.to_path_buf(),
            project_file,
        }),
        Ok(None) => None,
        Err(e) => {
            debug!("Cannot read candidate project {}: {}", dir.display(), e);
            None
        }
    }
}
