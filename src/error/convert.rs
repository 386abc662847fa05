//! Launch and conversion tool errors

use std::path::Path;

use super::PvmError;

/// Creates a launch failed error
pub fn launch_failed(path: &Path, reason: impl ToString) -> PvmError {
    PvmError::LaunchFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a tool launch failed error
pub fn tool_launch_failed(tool: &Path, reason: impl ToString) -> PvmError {
    PvmError::ToolLaunchFailed {
        tool: tool.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an unexpected exit code error
pub fn unexpected_exit_code(project: &Path, code: i32) -> PvmError {
    PvmError::UnexpectedExitCode {
        project: project.display().to_string(),
        code,
    }
}
