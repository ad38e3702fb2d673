//! Typed rows over prepared tables.

use crate::{
    datasets::torvik,
    error::{Result, StatsError},
    pipeline::{RankPolicy, RankTier},
    table::{Cell, Table},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// One team's season line from the Torvik team table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRecord {
    pub rank: i64,
    pub team: String,
    pub conference: String,
    pub wins: u32,
    pub losses: u32,
    pub adj_offense: f64,
    pub adj_defense: f64,
    pub strength_of_schedule: f64,
    pub conf_win_pct: f64,
}

impl TeamRecord {
    /// Tier of this team's rank. Computed on demand, never stored.
    pub fn rank_tier(&self, policy: RankPolicy) -> RankTier {
        policy.classify(Some(self.rank))
    }

    /// Read every row of a prepared team table.
    pub fn from_table(table: &Table) -> Result<Vec<Self>> {
        let idx = |name: &str| table.require_column(name);
        let rank = idx(torvik::RANK)?;
        let team = idx(torvik::TEAM)?;
        let conference = idx(torvik::CONFERENCE)?;
        let record = idx(torvik::RECORD)?;
        let adj_offense = idx(torvik::ADJ_OFFENSE)?;
        let adj_defense = idx(torvik::ADJ_DEFENSE)?;
        let sos = idx(torvik::STRENGTH_OF_SCHEDULE)?;
        let conf_win_pct = idx(torvik::CONF_WIN_PCT)?;

        table
            .rows()
            .iter()
            .map(|row| {
                let (wins, losses) = parse_record(&row[record])?;
                Ok(TeamRecord {
                    rank: int(torvik::RANK, &row[rank])?,
                    team: row[team].key().into_owned(),
                    conference: row[conference].key().into_owned(),
                    wins,
                    losses,
                    adj_offense: float(torvik::ADJ_OFFENSE, &row[adj_offense])?,
                    adj_defense: float(torvik::ADJ_DEFENSE, &row[adj_defense])?,
                    strength_of_schedule: float(torvik::STRENGTH_OF_SCHEDULE, &row[sos])?,
                    conf_win_pct: float(torvik::CONF_WIN_PCT, &row[conf_win_pct])?,
                })
            })
            .collect()
    }
}

/// One player's line; metrics keyed by canonical column name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub conference: String,
    pub metrics: BTreeMap<String, f64>,
}

impl PlayerRecord {
    /// Read every row of a prepared player table. Blank metric cells are
    /// left out of `metrics`.
    pub fn from_table(table: &Table, metrics: &[String]) -> Result<Vec<Self>> {
        let name = table.require_column(torvik::PLAYER_NAME)?;
        let team = table.require_column(torvik::TEAM)?;
        let conference = table.require_column(torvik::CONFERENCE)?;
        let metric_idx = metrics
            .iter()
            .map(|m| table.require_column(m).map(|i| (m.as_str(), i)))
            .collect::<Result<Vec<_>>>()?;

        table
            .rows()
            .iter()
            .map(|row| {
                let mut values = BTreeMap::new();
                for &(metric, i) in &metric_idx {
                    if row[i].is_missing() {
                        continue;
                    }
                    values.insert(metric.to_string(), float(metric, &row[i])?);
                }
                Ok(PlayerRecord {
                    name: row[name].key().into_owned(),
                    team: row[team].key().into_owned(),
                    conference: row[conference].key().into_owned(),
                    metrics: values,
                })
            })
            .collect()
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

fn coercion(column: &str, cell: &Cell, target: &str) -> StatsError {
    StatsError::TypeCoercion {
        column: column.to_string(),
        value: cell.to_string(),
        target: target.to_string(),
    }
}

fn int(column: &str, cell: &Cell) -> Result<i64> {
    match cell {
        Cell::Int(i) => Ok(*i),
        other => Err(coercion(column, other, "integer")),
    }
}

fn float(column: &str, cell: &Cell) -> Result<f64> {
    cell.as_f64().ok_or_else(|| coercion(column, cell, "float"))
}

/// Split a "W-L" record into wins and losses.
fn parse_record(cell: &Cell) -> Result<(u32, u32)> {
    let text = cell.key();
    text.trim()
        .split_once('-')
        .and_then(|(w, l)| Some((w.trim().parse().ok()?, l.trim().parse().ok()?)))
        .ok_or_else(|| coercion(torvik::RECORD, cell, "record"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_table() -> Table {
        Table::from_rows(
            [
                "rank", "team", "conf", "record", "adjoe", "adjde", "sos", "Conf Win%",
            ],
            vec![
                vec![
                    Cell::Int(1),
                    Cell::from("Houston"),
                    Cell::from("Amer"),
                    Cell::from("33-4"),
                    Cell::Float(117.6),
                    Cell::Float(87.1),
                    Cell::Float(5.9),
                    Cell::Float(0.889),
                ],
                vec![
                    Cell::Int(150),
                    Cell::from("Auburn"),
                    Cell::from("SEC"),
                    Cell::from("21-13"),
                    Cell::Float(110.0),
                    Cell::Float(95.0),
                    Cell::Float(8.0),
                    Cell::Float(0.5),
                ],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_team_records_from_table() {
        let teams = TeamRecord::from_table(&team_table()).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].team, "Houston");
        assert_eq!((teams[0].wins, teams[0].losses), (33, 4));
        assert_eq!(teams[1].conf_win_pct, 0.5);
    }

    #[test]
    fn test_team_rank_tier_follows_rank() {
        let mut team = TeamRecord::from_table(&team_table()).unwrap().remove(1);
        assert_eq!(team.rank_tier(RankPolicy::SeasonTiers), RankTier::Rank101To200);
        team.rank = 25;
        assert_eq!(team.rank_tier(RankPolicy::SeasonTiers), RankTier::Top25);
    }

    #[test]
    fn test_bad_record_is_type_coercion() {
        let table = team_table()
            .select(&["rank", "team", "conf", "adjoe", "adjde", "sos", "Conf Win%"])
            .unwrap()
            .with_column("record", vec![Cell::from("33"), Cell::from("21-13")])
            .unwrap();
        let err = TeamRecord::from_table(&table).unwrap_err();
        assert!(matches!(err, StatsError::TypeCoercion { column, .. } if column == "record"));
    }

    #[test]
    fn test_player_records_skip_blank_metrics() {
        let table = Table::from_rows(
            ["player_name", "team", "conf", "bpm", "pts"],
            vec![vec![
                Cell::from("Zach Edey"),
                Cell::from("Purdue"),
                Cell::from("B10"),
                Cell::Float(12.1),
                Cell::Missing,
            ]],
        )
        .unwrap();
        let metrics = vec!["bpm".to_string(), "pts".to_string()];

        let players = PlayerRecord::from_table(&table, &metrics).unwrap();
        assert_eq!(players[0].metric("bpm"), Some(12.1));
        assert_eq!(players[0].metric("pts"), None);
    }
}
