//! Query matching against search roots
//!
//! - [`normalize`]: canonical form for query tokens and directory names
//! - [`matcher`]: one-level directory scan filtered by a [`Query`]

pub mod matcher;
pub mod normalize;

pub use matcher::{Candidate, search_dir};
pub use normalize::Query;
