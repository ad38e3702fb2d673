//! Value types for CLI filter and dataset options.

use crate::pipeline::QuantileMethod;
use std::fmt;

/// Interpolation used for quantile cutoffs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Interpolation {
    /// Midpoint plotting positions (`n * q + 0.5`)
    #[default]
    Hazen,
    /// Dataframe-style positions (`(n - 1) * q`), as the upstream dashboards compute it
    Linear,
}

impl From<Interpolation> for QuantileMethod {
    fn from(value: Interpolation) -> Self {
        match value {
            Interpolation::Hazen => QuantileMethod::Hazen,
            Interpolation::Linear => QuantileMethod::Linear,
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Interpolation::Hazen => "hazen",
            Interpolation::Linear => "linear",
        };
        write!(f, "{}", s)
    }
}

/// Which prepared dataset a command works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DatasetKind {
    /// Torvik team results joined with four-factor stats
    Teams,
    /// Torvik player advanced stats
    Players,
    /// Sports-Reference school ratings
    Ratings,
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DatasetKind::Teams => "teams",
            DatasetKind::Players => "players",
            DatasetKind::Ratings => "ratings",
        };
        write!(f, "{}", s)
    }
}
