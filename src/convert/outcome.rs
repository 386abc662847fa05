//! Conversion outcomes
//!
//! Maps the exit code of the Studio Pro conversion tool to what it means.

use std::fmt;

/// Result of converting one project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Exit code 0: conversion completed
    Success,
    /// Exit code 1: the tool failed internally
    InternalError,
    /// Exit code 2: the tool rejected its options
    OptionsError,
    /// Exit code 3: the tool ran but could not convert the project
    ConversionFailed,
    /// Exit code -1, or the tool could not be started at all
    ToolLaunchError,
    /// Any other exit code
    Unexpected(i32),
}

impl ConversionOutcome {
    pub fn from_exit_code(code: i32) -> Self {
        match code {
            0 => Self::Success,
            1 => Self::InternalError,
            2 => Self::OptionsError,
            3 => Self::ConversionFailed,
            -1 => Self::ToolLaunchError,
            other => Self::Unexpected(other),
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for ConversionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::InternalError => write!(f, "internal error"),
            Self::OptionsError => write!(f, "error with options"),
            Self::ConversionFailed => write!(f, "conversion failed"),
            Self::ToolLaunchError => write!(f, "conversion tool could not be started"),
            Self::Unexpected(code) => write!(f, "unexpected exit code {code}"),
        }
    }
}
