//! Configuration (.mendix-pvm.json) data structures
//!
//! The configuration names the two search roots: where Studio Pro versions
//! are installed and where projects live. It is loaded once per invocation
//! and passed by reference to everything that needs it.
//!
//! - [`store`]: locating, creating, loading and opening the file

pub mod store;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::{self, Result};

/// Search roots for versions and projects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing one subdirectory per installed Studio Pro version
    #[serde(rename = "VersionDirectory", default)]
    pub version_directory: PathBuf,

    /// Directory containing one subdirectory per project
    #[serde(rename = "ProjectDirectory", default)]
    pub project_directory: PathBuf,
}

impl Config {
    /// Build the default configuration for this platform
    ///
    /// Versions default to `%ProgramFiles%\Mendix` on Windows and are left
    /// unset elsewhere; projects default to `<home>/Mendix`.
    pub fn platform_default(home: &Path) -> Self {
        Self {
            version_directory: default_version_directory(),
            project_directory: home.join("Mendix"),
        }
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Serialize configuration to a pretty-printed JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Search root for a domain
    pub fn root(&self, domain: Domain) -> &Path {
        match domain {
            Domain::Project => &self.project_directory,
            Domain::Version => &self.version_directory,
        }
    }

    /// Check that both roots are set and are existing directories
    ///
    /// Every problem is collected so the user can fix them in one edit.
    pub fn validate(&self) -> Result<()> {
        let issues: Vec<String> = [
            ("versionDirectory", &self.version_directory),
            ("projectDirectory", &self.project_directory),
        ]
        .into_iter()
        .filter_map(|(key, dir)| root_issue(key, dir))
        .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(error::config::invalid(issues.join("; ")))
        }
    }
}

fn root_issue(key: &str, dir: &Path) -> Option<String> {
    if dir.as_os_str().to_string_lossy().trim().is_empty() {
        return Some(format!("{key} is not set"));
    }

    let why = match std::fs::metadata(dir) {
        Ok(metadata) if metadata.is_dir() => return None,
        Ok(_) => "is not a directory".to_string(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => "does not exist".to_string(),
        Err(e) => format!("cannot be accessed: {e}"),
    };
    Some(format!("{key} \"{}\" {why}", dir.display()))
}

#[cfg(windows)]
fn default_version_directory() -> PathBuf {
    std::env::var_os("ProgramFiles")
        .map(|program_files| PathBuf::from(program_files).join("Mendix"))
        .unwrap_or_default()
}

#[cfg(not(windows))]
fn default_version_directory() -> PathBuf {
    PathBuf::new()
}
