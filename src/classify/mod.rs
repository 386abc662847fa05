//! Marker classification for search candidates
//!
//! Each domain confirms a candidate by probing for its marker:
//! - [`project`]: exactly one project file (`*.mpr`) at the directory root
//! - [`version`]: a `modeler` subdirectory
//!
//! Classifiers are read-only. A candidate that cannot be read is not a match;
//! the failure is logged and never aborts the surrounding scan.

pub mod project;
pub mod version;

use std::path::Path;

use crate::domain::{Domain, Target};

/// Classify `dir` as a target of `domain`, or `None` if its marker is missing
pub fn classify(domain: Domain, dir: &Path) -> Option<Target> {
    match domain {
        Domain::Project => project::classify(dir),
        Domain::Version => version::classify(dir),
    }
}
