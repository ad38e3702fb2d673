//! Type-safe wrappers and enums for command-line options.

pub mod filters;
pub mod season;

pub use filters::{DatasetKind, Interpolation};
pub use season::Season;
