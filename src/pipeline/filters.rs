//! Row filters. Each returns a new table; an empty result is not an error.

use super::quantile::{quantile, QuantileMethod};
use crate::{error::Result, table::Table};
use std::collections::HashSet;

/// Selection value meaning "do not filter this column".
pub const ALL: &str = "All";

fn keep_matching<S: AsRef<str>>(table: &Table, column: &str, values: &[S]) -> Result<Table> {
    let idx = table.require_column(column)?;
    let wanted: HashSet<&str> = values.iter().map(AsRef::as_ref).collect();
    Ok(table.retain_rows(|row| !row[idx].is_missing() && wanted.contains(row[idx].key().as_ref())))
}

/// Keep rows whose `column` is one of `allowed`.
///
/// If `allowed` contains [`ALL`], the table is returned unfiltered.
pub fn filter_by_membership<S: AsRef<str>>(
    table: &Table,
    column: &str,
    allowed: &[S],
) -> Result<Table> {
    table.require_column(column)?;
    if allowed.iter().any(|v| v.as_ref() == ALL) {
        return Ok(table.clone());
    }
    keep_matching(table, column, allowed)
}

/// Keep rows whose `column` equals one of the selected values.
///
/// Used for single-team and side-by-side comparisons. Unlike
/// [`filter_by_membership`], "All" is matched literally.
pub fn filter_by_identity<S: AsRef<str>>(
    table: &Table,
    column: &str,
    selected: &[S],
) -> Result<Table> {
    keep_matching(table, column, selected)
}

/// Keep rows whose numeric `column` is at least `threshold`.
pub fn filter_at_least(table: &Table, column: &str, threshold: f64) -> Result<Table> {
    let values = table.numeric_column(column)?;
    let mut rows = values.into_iter();
    Ok(table.retain_rows(|_| matches!(rows.next(), Some(Some(v)) if v >= threshold)))
}

/// Threshold for [`filter_by_quantile_with`], computed over every value of
/// `column` in `table`. `None` when the column holds no numbers.
pub fn quantile_threshold(
    table: &Table,
    column: &str,
    q: f64,
    method: QuantileMethod,
) -> Result<Option<f64>> {
    let values: Vec<f64> = table.numeric_column(column)?.into_iter().flatten().collect();
    quantile(&values, q, method)
}

/// Keep rows at or above the `q`-quantile of `column`, using the default
/// interpolation method.
pub fn filter_by_quantile(table: &Table, column: &str, q: f64) -> Result<Table> {
    filter_by_quantile_with(table, column, q, QuantileMethod::default())
}

/// Keep rows at or above the `q`-quantile of `column`.
///
/// The threshold is computed from `table` on every call.
pub fn filter_by_quantile_with(
    table: &Table,
    column: &str,
    q: f64,
    method: QuantileMethod,
) -> Result<Table> {
    match quantile_threshold(table, column, q, method)? {
        Some(threshold) => filter_at_least(table, column, threshold),
        None => Ok(table.empty_like()),
    }
}
