//! Domain models for mendix-pvm
//!
//! Pure domain objects shared by the classifier, the resolver and the
//! command layer.

pub mod target;

pub use target::{Domain, Target};
