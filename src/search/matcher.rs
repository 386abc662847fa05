//! Directory matcher
//!
//! Scans the immediate children of a search root and keeps the directories
//! whose normalized name contains every query token.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::normalize::{Query, normalize};
use crate::error::{self, Result};

/// A directory discovered directly under a search root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Absolute path of the directory
    pub path: PathBuf,
    /// Directory name as found on disk
    pub name: String,
    /// Normalized directory name used for matching
    pub normalized: String,
}

impl Candidate {
    fn new(path: PathBuf, name: String) -> Self {
        let normalized = normalize(&name);
        Self {
            path,
            name,
            normalized,
        }
    }
}

/// Search the immediate subdirectories of `root` for names matching `query`
///
/// Files are ignored even when their name would match. Results are sorted by
/// directory name so that "first N" selections are reproducible. No matches
/// is an empty result, not an error.
///
/// # Errors
///
/// Fails when `root` does not exist, is not a directory, or cannot be listed.
pub fn search_dir(root: &Path, query: &Query) -> Result<Vec<Candidate>> {
    let metadata = std::fs::metadata(root).map_err(|e| error::fs::from_stat_error(root, &e))?;
    if !metadata.is_dir() {
        return Err(error::fs::not_a_directory(root));
    }

    let root = dunce::canonicalize(root).map_err(|e| error::fs::read_failed(root, e))?;

    let mut matches = Vec::new();
    for entry in WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(error::fs::read_failed(&root, e)),
            Err(e) => {
                debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let candidate = Candidate::new(entry.into_path(), name);
        if query.matches(&candidate.normalized) {
            debug!("Candidate {} matches", candidate.name);
            matches.push(candidate);
        }
    }

    debug!(
        "Matched {} director{} under {} for {:?}",
        matches.len(),
        if matches.len() == 1 { "y" } else { "ies" },
        root.display(),
        query.tokens()
    );

    Ok(matches)
}
