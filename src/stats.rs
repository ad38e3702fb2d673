//! Small aggregations over prepared tables.

use crate::{error::Result, table::Table};
use serde::Serialize;
use std::collections::HashMap;

/// Conferences treated as "top 10" when no ranking is computed.
pub const DEFAULT_TOP_CONFERENCES: &[&str] = &[
    "B12", "SEC", "B10", "BE", "P12", "ACC", "MWC", "Amer", "WCC", "A10",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConferenceRank {
    pub conference: String,
    pub mean_rank: f64,
    pub teams: usize,
}

/// Mean rank per conference, best (lowest) first. Rows with a blank
/// conference or rank are ignored.
pub fn conference_mean_rank(
    table: &Table,
    conference: &str,
    rank: &str,
) -> Result<Vec<ConferenceRank>> {
    let conf_idx = table.require_column(conference)?;
    let ranks = table.numeric_column(rank)?;

    let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
    for (row, value) in table.rows().iter().zip(ranks) {
        let (Some(value), false) = (value, row[conf_idx].is_missing()) else {
            continue;
        };
        let entry = sums.entry(row[conf_idx].key().into_owned()).or_default();
        entry.0 += value;
        entry.1 += 1;
    }

    let mut out: Vec<ConferenceRank> = sums
        .into_iter()
        .map(|(conference, (sum, teams))| ConferenceRank {
            conference,
            mean_rank: sum / teams as f64,
            teams,
        })
        .collect();
    out.sort_by(|a, b| {
        a.mean_rank
            .total_cmp(&b.mean_rank)
            .then_with(|| a.conference.cmp(&b.conference))
    });
    Ok(out)
}

/// Names of the `n` conferences with the best mean rank.
pub fn top_conferences(table: &Table, conference: &str, rank: &str, n: usize) -> Result<Vec<String>> {
    Ok(conference_mean_rank(table, conference, rank)?
        .into_iter()
        .take(n)
        .map(|c| c.conference)
        .collect())
}

/// Pearson correlation of `x` and `y` over rows where both are numeric.
///
/// `None` with fewer than two such rows or when either column is constant.
pub fn correlation(table: &Table, x: &str, y: &str) -> Result<Option<f64>> {
    let pairs: Vec<(f64, f64)> = table
        .numeric_column(x)?
        .into_iter()
        .zip(table.numeric_column(y)?)
        .filter_map(|(a, b)| Some((a?, b?)))
        .collect();
    if pairs.len() < 2 {
        return Ok(None);
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let (dx, dy) = (a - mean_x, b - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return Ok(None);
    }
    Ok(Some(cov / (var_x.sqrt() * var_y.sqrt())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::StatsError, table::Cell};

    fn teams() -> Table {
        let rows = [
            ("SEC", 2, 10.0, 20.0),
            ("SEC", 10, 8.0, 16.0),
            ("B12", 4, 6.0, 12.0),
            ("B12", 4, 4.0, 8.0),
            ("MWC", 120, 2.0, 4.0),
        ];
        Table::from_rows(
            ["conf", "rank", "x", "y"],
            rows.iter()
                .map(|(c, r, x, y)| {
                    vec![Cell::from(*c), Cell::Int(*r), Cell::Float(*x), Cell::Float(*y)]
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_conference_mean_rank_sorted_ascending() {
        let ranks = conference_mean_rank(&teams(), "conf", "rank").unwrap();
        let names: Vec<_> = ranks.iter().map(|r| r.conference.as_str()).collect();
        assert_eq!(names, ["B12", "SEC", "MWC"]);
        assert_eq!(ranks[1].mean_rank, 6.0);
        assert_eq!(ranks[1].teams, 2);
    }

    #[test]
    fn test_top_conferences_takes_best_n() {
        assert_eq!(
            top_conferences(&teams(), "conf", "rank", 2).unwrap(),
            vec!["B12".to_string(), "SEC".to_string()]
        );
    }

    #[test]
    fn test_correlation_of_linear_columns_is_one() {
        let r = correlation(&teams(), "x", "y").unwrap().unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_correlation_constant_column_is_none() {
        let constant = teams()
            .with_column("c", vec![Cell::Float(1.0); 5])
            .unwrap();
        assert_eq!(correlation(&constant, "x", "c").unwrap(), None);
    }

    #[test]
    fn test_unknown_column_is_schema_mismatch() {
        let err = conference_mean_rank(&teams(), "Conference", "rank").unwrap_err();
        assert!(matches!(err, StatsError::SchemaMismatch { .. }));
    }
}
