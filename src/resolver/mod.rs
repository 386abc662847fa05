//! Resolution of queries to classified targets
//!
//! This module handles:
//! - Choosing which domains to search from the `--project`/`--version` flags
//! - Scanning each domain's root and keeping candidates that pass its marker check
//! - Deciding how many of the resulting targets a command may act on ([`select`])

pub mod select;

use std::path::Path;

use tracing::debug;

use crate::classify;
use crate::config::Config;
use crate::domain::{Domain, Target};
use crate::error::Result;
use crate::search::{Query, search_dir};

pub use select::{BATCH_CAP, Selection, select};

/// Which domains a search covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Both,
    ProjectsOnly,
    VersionsOnly,
}

impl Scope {
    /// Derive the scope from the restriction flags
    ///
    /// Passing both flags is the same as passing neither.
    pub fn from_flags(project_only: bool, version_only: bool) -> Self {
        match (project_only, version_only) {
            (true, false) => Scope::ProjectsOnly,
            (false, true) => Scope::VersionsOnly,
            _ => Scope::Both,
        }
    }

    /// Domains to search, projects first
    pub fn domains(self) -> &'static [Domain] {
        match self {
            Scope::Both => &[Domain::Project, Domain::Version],
            Scope::ProjectsOnly => &[Domain::Project],
            Scope::VersionsOnly => &[Domain::Version],
        }
    }
}

/// Search one domain's root and keep the candidates carrying its marker
///
/// Candidates that cannot be classified are skipped; only a broken root fails.
pub fn search_domain(root: &Path, domain: Domain, query: &Query) -> Result<Vec<Target>> {
    let candidates = search_dir(root, query)?;
    let total = candidates.len();

    let targets: Vec<Target> = candidates
        .into_iter()
        .filter_map(|candidate| classify::classify(domain, &candidate.path))
        .collect();

    debug!(
        "{} of {} matching directories under {} are {}s",
        targets.len(),
        total,
        root.display(),
        domain
    );

    Ok(targets)
}

/// Search every domain in `scope`, projects before versions
///
/// Domains outside the scope are not scanned at all.
pub fn search_targets(config: &Config, scope: Scope, query: &Query) -> Result<Vec<Target>> {
    let mut targets = Vec::new();
    for &domain in scope.domains() {
        targets.extend(search_domain(config.root(domain), domain, query)?);
    }
    Ok(targets)
}
