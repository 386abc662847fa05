//! Configuration errors

use super::PvmError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> PvmError {
    PvmError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PvmError {
    PvmError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PvmError {
    PvmError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> PvmError {
    PvmError::ConfigWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
