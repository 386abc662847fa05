//! Project conversion through the Studio Pro `mx` tool
//!
//! - [`outcome`]: exit code interpretation

pub mod outcome;

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::classify::version::MODELER_DIR;
use crate::error::{self, PvmError, Result};

pub use outcome::ConversionOutcome;

/// Name of the conversion tool inside a version's `modeler` directory
#[cfg(windows)]
pub const MX_TOOL: &str = "mx.exe";
#[cfg(not(windows))]
pub const MX_TOOL: &str = "mx";

/// Something that converts a project in place to a Studio Pro version
pub trait Converter {
    /// Convert `project_root` with the tooling of `version_root`
    ///
    /// Returns the tool's exit code. Failing to start the tool, or the tool
    /// dying without an exit code, is an error rather than a magic code.
    fn convert(&self, version_root: &Path, project_root: &Path) -> Result<i32>;
}

/// Converter that runs `<version>/modeler/mx convert --in-place <project>`
///
/// Runs synchronously with the caller's standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct MxConverter;

impl MxConverter {
    pub fn tool_path(version_root: &Path) -> PathBuf {
        version_root.join(MODELER_DIR).join(MX_TOOL)
    }
}

impl Converter for MxConverter {
    fn convert(&self, version_root: &Path, project_root: &Path) -> Result<i32> {
        let tool = Self::tool_path(version_root);
        info!(
            "Running {} convert --in-place {}",
            tool.display(),
            project_root.display()
        );

        let status = Command::new(&tool)
            .args(["convert", "--in-place"])
            .arg(project_root)
            .status()
            .map_err(|e| error::convert::tool_launch_failed(&tool, e))?;

        status.code().ok_or_else(|| PvmError::ToolTerminated {
            tool: tool.display().to_string(),
        })
    }
}
