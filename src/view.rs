//! Output contract for display layers.
//!
//! A [`FilteredView`] carries the filtered table and the metric columns a
//! chart may use. The projections here produce plain data; drawing is left to
//! whoever consumes them.

use crate::{
    error::{Result, StatsError},
    table::Table,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredView {
    pub table: Table,
    pub metrics: Vec<String>,
}

/// One point of a 2-D scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Values of one metric for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub values: Vec<f64>,
}

/// Equal-width histogram bin, `[lower, upper)` except the last, which is closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl FilteredView {
    pub fn new(table: Table, metrics: Vec<String>) -> Self {
        Self { table, metrics }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn is_metric(&self, name: &str) -> bool {
        self.metrics.iter().any(|m| m == name)
    }

    fn text_column(&self, name: Option<&str>) -> Result<Option<Vec<Option<String>>>> {
        name.map(|column| {
            self.table.column(column).map(|cells| {
                cells
                    .map(|c| (!c.is_missing()).then(|| c.key().into_owned()))
                    .collect()
            })
        })
        .transpose()
    }

    /// Points for `x` against `y`. Rows missing either coordinate are skipped.
    pub fn scatter(
        &self,
        x: &str,
        y: &str,
        label: Option<&str>,
        color: Option<&str>,
    ) -> Result<Vec<ScatterPoint>> {
        let xs = self.table.numeric_column(x)?;
        let ys = self.table.numeric_column(y)?;
        let labels = self.text_column(label)?;
        let groups = self.text_column(color)?;

        Ok(xs
            .into_iter()
            .zip(ys)
            .enumerate()
            .filter_map(|(row, pair)| match pair {
                (Some(x), Some(y)) => Some(ScatterPoint {
                    x,
                    y,
                    label: labels.as_ref().and_then(|l| l[row].clone()),
                    group: groups.as_ref().and_then(|g| g[row].clone()),
                }),
                _ => None,
            })
            .collect())
    }

    /// Values of `column`, split by `group` in order of first appearance.
    pub fn distribution(&self, column: &str, group: Option<&str>) -> Result<Vec<Series>> {
        let values = self.table.numeric_column(column)?;
        let groups = self.text_column(group)?;

        let mut series: Vec<Series> = Vec::new();
        for (row, value) in values.into_iter().enumerate() {
            let Some(value) = value else { continue };
            let key = groups.as_ref().and_then(|g| g[row].clone());
            match series.iter_mut().find(|s| s.group == key) {
                Some(existing) => existing.values.push(value),
                None => series.push(Series {
                    group: key,
                    values: vec![value],
                }),
            }
        }
        Ok(series)
    }

    /// Like [`distribution`](Self::distribution), but only for declared metrics.
    pub fn metric_distribution(&self, metric: &str, group: Option<&str>) -> Result<Vec<Series>> {
        if !self.is_metric(metric) {
            return Err(StatsError::SchemaMismatch {
                column: metric.to_string(),
            });
        }
        self.distribution(metric, group)
    }
}

/// Upper bound on the bin count [`histogram`] will allocate.
pub const MAX_BINS: usize = 1000;

/// Split `values` into `bins` equal-width bins between their min and max.
///
/// Counts above [`MAX_BINS`] are clamped to it.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let bins = bins.min(MAX_BINS);

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![Bin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for v in values {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}
