//! Command implementations for the mx CLI

pub mod completions;
pub mod config;
pub mod convert;
pub mod list;
pub mod open;
