//! Search root and file system errors

use std::path::Path;

use super::PvmError;

/// Creates a root not found error
pub fn root_not_found(path: &Path) -> PvmError {
    PvmError::RootNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a not-a-directory error
pub fn not_a_directory(path: &Path) -> PvmError {
    PvmError::NotADirectory {
        path: path.display().to_string(),
    }
}

/// Creates a directory read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> PvmError {
    PvmError::DirectoryReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Map a failed `stat` of a search root to the matching error
pub fn from_stat_error(path: &Path, err: &std::io::Error) -> PvmError {
    if err.kind() == std::io::ErrorKind::NotFound {
        root_not_found(path)
    } else {
        read_failed(path, err)
    }
}
