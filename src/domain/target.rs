//! Resolved targets
//!
//! A target is a search match that passed its domain's marker check. The
//! marker found during classification is carried along, so acting on a
//! target never needs to probe the filesystem again.

use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the Studio Pro executable inside a version's `modeler` directory
#[cfg(windows)]
pub const STUDIO_PRO_EXECUTABLE: &str = "studiopro.exe";
#[cfg(not(windows))]
pub const STUDIO_PRO_EXECUTABLE: &str = "studiopro";

/// Classification category of a search root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Project,
    Version,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Project => write!(f, "project"),
            Domain::Version => write!(f, "version"),
        }
    }
}

/// A classified match, tagged with the marker that confirmed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A project directory holding exactly one project file at its root
    Project { root: PathBuf, project_file: PathBuf },
    /// A Studio Pro installation holding a `modeler` directory
    Version { root: PathBuf, modeler_dir: PathBuf },
}

impl Target {
    pub fn domain(&self) -> Domain {
        match self {
            Target::Project { .. } => Domain::Project,
            Target::Version { .. } => Domain::Version,
        }
    }

    /// Directory the target was found as
    pub fn root(&self) -> &Path {
        match self {
            Target::Project { root, .. } | Target::Version { root, .. } => root,
        }
    }

    /// Directory name shown in listings
    pub fn name(&self) -> String {
        self.root().file_name().map_or_else(
            || self.root().display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    /// Path handed to the launcher when the target is opened
    ///
    /// Projects open their project file; versions open the Studio Pro
    /// executable inside `modeler`.
    pub fn launch_path(&self) -> PathBuf {
        match self {
            Target::Project { project_file, .. } => project_file.clone(),
            Target::Version { modeler_dir, .. } => modeler_dir.join(STUDIO_PRO_EXECUTABLE),
        }
    }
}
