//! The statistics filtering pipeline.
//!
//! A run has two stages:
//!
//! 1. [`StatsFilterPipeline::prepare`] normalizes a raw source table (rename,
//!    cast) and derives the rank tier column, if the dataset has one.
//! 2. [`StatsFilterPipeline::apply`] runs an ordered list of [`Filter`]s and
//!    returns a [`FilteredView`] for display.
//!
//! Filters are plain parameter values. Nothing is remembered between runs, and
//! the prepared source table is never modified by filtering.

pub mod filters;
pub mod normalize;
pub mod quantile;
pub mod rank;


pub use filters::{
    filter_at_least, filter_by_identity, filter_by_membership, filter_by_quantile,
    filter_by_quantile_with, quantile_threshold, ALL,
};
pub use normalize::{normalize, ColumnMap, ColumnType, TypeMap};
pub use quantile::{quantile, QuantileMethod};
pub use rank::{classify_rank, derive_rank_tier, RankPolicy, RankTier, RankTierRule};

use crate::{error::Result, table::Table, view::FilteredView};
use tracing::debug;

/// One user-selected filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Keep rows whose column is one of the allowed values ("All" disables it).
    Membership { column: String, allowed: Vec<String> },
    /// Keep rows whose column equals one of the selected values.
    Identity { column: String, values: Vec<String> },
    /// Keep rows at or above the quantile of the unfiltered source column.
    Quantile {
        column: String,
        quantile: f64,
        method: QuantileMethod,
    },
}

impl Filter {
    pub fn membership<I, S>(column: &str, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::Membership {
            column: column.to_string(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn identity<I, S>(column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::Identity {
            column: column.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn quantile(column: &str, quantile: f64, method: QuantileMethod) -> Self {
        Filter::Quantile {
            column: column.to_string(),
            quantile,
            method,
        }
    }

    /// Apply to `current`. Quantile thresholds are computed over `source`.
    fn apply(&self, source: &Table, current: &Table) -> Result<Table> {
        match self {
            Filter::Membership { column, allowed } => {
                filter_by_membership(current, column, allowed)
            }
            Filter::Identity { column, values } => filter_by_identity(current, column, values),
            Filter::Quantile {
                column,
                quantile,
                method,
            } => match quantile_threshold(source, column, *quantile, *method)? {
                Some(threshold) => {
                    debug!(%column, quantile, threshold, "quantile threshold");
                    filter_at_least(current, column, threshold)
                }
                None => {
                    current.require_column(column)?;
                    Ok(current.empty_like())
                }
            },
        }
    }
}

/// Normalization schema, derived columns and selectable metrics for one dataset.
#[derive(Debug, Clone)]
pub struct StatsFilterPipeline {
    column_map: ColumnMap,
    type_map: TypeMap,
    rank_tier: Option<RankTierRule>,
    metrics: Vec<String>,
}

impl StatsFilterPipeline {
    pub fn new(column_map: ColumnMap, type_map: TypeMap) -> Self {
        Self {
            column_map,
            type_map,
            rank_tier: None,
            metrics: Vec::new(),
        }
    }

    pub fn with_rank_tier(mut self, rule: RankTierRule) -> Self {
        self.rank_tier = Some(rule);
        self
    }

    /// Numeric columns the view may project.
    pub fn with_metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metrics = metrics.into_iter().map(Into::into).collect();
        self
    }

    pub fn column_map(&self) -> &ColumnMap {
        &self.column_map
    }

    pub fn rank_tier(&self) -> Option<&RankTierRule> {
        self.rank_tier.as_ref()
    }

    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    /// Normalize `raw` and add the derived tier column.
    pub fn prepare(&self, raw: &Table) -> Result<Table> {
        let table = normalize(raw, &self.column_map, &self.type_map)?;
        match &self.rank_tier {
            Some(rule) => derive_rank_tier(&table, rule),
            None => Ok(table),
        }
    }

    /// Run `filters` in order over a prepared `source` table.
    pub fn apply(&self, source: &Table, filters: &[Filter]) -> Result<FilteredView> {
        for metric in &self.metrics {
            source.require_column(metric)?;
        }

        let mut current = source.clone();
        for filter in filters {
            current = filter.apply(source, &current)?;
            debug!(?filter, rows = current.len(), "applied filter");
        }

        Ok(FilteredView::new(current, self.metrics.clone()))
    }

    /// [`prepare`](Self::prepare) followed by [`apply`](Self::apply).
    pub fn run(&self, raw: &Table, filters: &[Filter]) -> Result<FilteredView> {
        let source = self.prepare(raw)?;
        self.apply(&source, filters)
    }
}
