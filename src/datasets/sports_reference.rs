//! sports-reference.com men's school ratings.

use crate::{
    pipeline::{ColumnMap, ColumnType, RankPolicy, RankTierRule, StatsFilterPipeline, TypeMap},
    sources::html::{ArtifactRule, HtmlTableSpec},
};

pub const SCHOOL: &str = "School";
pub const CONFERENCE: &str = "Conference";
pub const AP_RANK: &str = "AP_rank";
pub const AP_RANK_TIER: &str = "AP_rank_desc";

/// Rating columns offered for distribution views.
pub const RATINGS_METRICS: &[&str] = &[
    "Points_per_game",
    "Opponent_points_per_game",
    "Margin_of_victory",
    "Strength_of_schedule",
    "Offensive_SRS",
    "Defensive_SRS",
    "SRS",
    "Adj_offensive_rating",
    "Adj_defensive_rating",
    "Adj_net_rating",
];

/// The ratings page repeats its header every twenty rows, both as a plain
/// `Rk` row and as a grouped "SRS" row.
pub fn ratings_table_spec() -> HtmlTableSpec {
    HtmlTableSpec::new(
        "table",
        vec![
            ArtifactRule::cell_equals("Rk", "Rk"),
            ArtifactRule::cell_equals("OSRS", "SRS"),
            ArtifactRule::RowClass("thead".to_string()),
        ],
    )
}

pub fn ratings_pipeline() -> StatsFilterPipeline {
    let map = ColumnMap::from_pairs(&[
        ("School", SCHOOL),
        ("Conf", CONFERENCE),
        ("AP Rank", AP_RANK),
        ("W", "Wins"),
        ("L", "Losses"),
        ("Pts", "Points_per_game"),
        ("Opp", "Opponent_points_per_game"),
        ("MOV", "Margin_of_victory"),
        ("SOS", "Strength_of_schedule"),
        ("OSRS", "Offensive_SRS"),
        ("DSRS", "Defensive_SRS"),
        ("SRS", "SRS"),
        ("ORtg", "Adj_offensive_rating"),
        ("DRtg", "Adj_defensive_rating"),
        ("NRtg", "Adj_net_rating"),
    ]);

    let types = TypeMap::new()
        .cast(AP_RANK, ColumnType::NullableInteger)
        .cast_all(&["Wins", "Losses"], ColumnType::Integer)
        .cast_all(RATINGS_METRICS, ColumnType::Float);

    StatsFilterPipeline::new(map, types)
        .with_rank_tier(RankTierRule::new(AP_RANK, AP_RANK_TIER, RankPolicy::Poll))
        .with_metrics(RATINGS_METRICS.iter().copied())
}
