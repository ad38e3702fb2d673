//! Quantiles by linear interpolation between order statistics.

use crate::error::{Result, StatsError};
use serde::Serialize;

/// Where the interpolation places the sample points.
///
/// Both methods interpolate linearly between neighbouring sorted values; they
/// differ in the plotting position assigned to the `k`-th value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum QuantileMethod {
    /// Position `n * q + 0.5` (1-based). Places each sample at the midpoint
    /// of its probability step.
    #[default]
    Hazen,
    /// Position `(n - 1) * q` (0-based). Matches the default of most
    /// dataframe libraries, pandas `quantile` included. This is the cutoff
    /// the upstream dashboards apply for the conference-win filter, so select
    /// it to reproduce their team lists.
    Linear,
}

/// The `q`-quantile of `values`, or `None` when there are no values.
pub fn quantile(values: &[f64], q: f64, method: QuantileMethod) -> Result<Option<f64>> {
    if !(0.0..=1.0).contains(&q) {
        return Err(StatsError::InvalidQuantile { quantile: q });
    }
    if values.is_empty() {
        return Ok(None);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let last = (sorted.len() - 1) as f64;

    let position = match method {
        QuantileMethod::Linear => q * last,
        QuantileMethod::Hazen => (sorted.len() as f64 * q + 0.5 - 1.0).clamp(0.0, last),
    };

    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    Ok(Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight))
}
