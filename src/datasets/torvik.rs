//! barttorvik.com T-Rank exports.

use crate::{
    error::Result,
    pipeline::{ColumnMap, ColumnType, RankPolicy, RankTierRule, StatsFilterPipeline, TypeMap},
    table::Table,
};

pub const RANK: &str = "rank";
pub const TEAM: &str = "team";
pub const CONFERENCE: &str = "conf";
pub const RECORD: &str = "record";
pub const ADJ_OFFENSE: &str = "adjoe";
pub const ADJ_DEFENSE: &str = "adjde";
pub const STRENGTH_OF_SCHEDULE: &str = "sos";
pub const CONF_STRENGTH_OF_SCHEDULE: &str = "consos";
pub const CONF_WIN_PCT: &str = "Conf Win%";
pub const RANK_TIER: &str = "rank_desc";

/// Team name column in the four-factors export.
pub const FOUR_FACTORS_KEY: &str = "TeamName";

pub const PLAYER_NAME: &str = "player_name";

/// Columns of the team results export kept for display.
const TEAM_RESULT_COLUMNS: &[&str] = &[
    RANK,
    TEAM,
    CONFERENCE,
    RECORD,
    ADJ_OFFENSE,
    ADJ_DEFENSE,
    STRENGTH_OF_SCHEDULE,
    CONF_STRENGTH_OF_SCHEDULE,
    CONF_WIN_PCT,
    "Fun Rk, adjt",
];

/// Four-factor columns, offense then defense.
pub const FOUR_FACTOR_COLUMNS: &[&str] = &[
    "eFG%", "eFG% Def", "FTR", "FTR Def", "OR%", "DR%", "TO%", "TO% Def.", "3P%", "3pD%", "2p%",
    "2p%D", "ft%", "ft%D",
];

/// Team columns offered for scatter and distribution views.
pub const TEAM_METRICS: &[&str] = &[
    ADJ_OFFENSE,
    ADJ_DEFENSE,
    STRENGTH_OF_SCHEDULE,
    CONF_STRENGTH_OF_SCHEDULE,
    CONF_WIN_PCT,
    "eFG%",
    "eFG% Def",
    "FTR",
    "FTR Def",
    "OR%",
    "DR%",
    "TO%",
    "TO% Def.",
    "3P%",
    "3pD%",
    "2p%",
    "2p%D",
    "ft%",
    "ft%D",
];

/// Header of the player export, which is served without one.
pub const PLAYER_HEADER: &[&str] = &[
    "player_name",
    "team",
    "conf",
    "GP",
    "Min_per",
    "ORtg",
    "usg",
    "eFG",
    "TS_per",
    "ORB_per",
    "DRB_per",
    "AST_per",
    "TO_per",
    "FTM",
    "FTA",
    "FT_per",
    "twoPM",
    "twoPA",
    "twoP_per",
    "TPM",
    "TPA",
    "TP_per",
    "blk_per",
    "stl_per",
    "ftr",
    "yr",
    "ht",
    "num",
    "porpag",
    "adjoe",
    "pfr",
    "year",
    "pid",
    "type",
    "Rec Rank",
    " ast/tov",
    " rimmade",
    " rimmade+rimmiss",
    " midmade",
    " midmade+midmiss",
    " rimmade/(rimmade+rimmiss)",
    " midmade/(midmade+midmiss)",
    " dunksmade",
    " dunksmiss+dunksmade",
    " dunksmade/(dunksmade+dunksmiss)",
    " pick",
    " drtg",
    "adrtg",
    " dporpag",
    " stops",
    " bpm",
    " obpm",
    " dbpm",
    " gbpm",
    "mp",
    "ogbpm",
    "dgbpm",
    "oreb",
    "dreb",
    "treb",
    "ast",
    "stl",
    "blk",
    "pts",
];

/// Player columns kept for display that are not metrics.
const PLAYER_INFO_COLUMNS: &[&str] = &["player_name", "team", "conf", "yr", "ht"];

/// Player rate stats kept for display.
const PLAYER_RATE_COLUMNS: &[&str] = &["GP", "Min_per", "ORtg", "usg", "eFG", "TS_per"];

/// Player columns offered for distribution views.
pub const PLAYER_METRICS: &[&str] = &[
    "bpm", "obpm", "dbpm", "gbpm", "mp", "ogbpm", "dgbpm", "oreb", "dreb", "treb", "ast", "stl",
    "blk", "pts",
];

/// Join four-factor stats onto team results by team name.
///
/// Teams absent from the four-factors export keep blank four-factor cells.
pub fn combine_team_tables(results: &Table, four_factors: &Table) -> Result<Table> {
    results.left_join(four_factors, TEAM, FOUR_FACTORS_KEY)
}

/// Pipeline for the combined team table.
pub fn team_pipeline() -> StatsFilterPipeline {
    let columns: Vec<&str> = TEAM_RESULT_COLUMNS
        .iter()
        .chain(FOUR_FACTOR_COLUMNS)
        .copied()
        .collect();

    let types = TypeMap::new()
        .cast(RANK, ColumnType::Integer)
        .cast_all(
            &[
                ADJ_OFFENSE,
                ADJ_DEFENSE,
                STRENGTH_OF_SCHEDULE,
                CONF_STRENGTH_OF_SCHEDULE,
                CONF_WIN_PCT,
            ],
            ColumnType::Float,
        )
        .cast_all(FOUR_FACTOR_COLUMNS, ColumnType::NullableFloat);

    StatsFilterPipeline::new(ColumnMap::identity(&columns), types)
        .with_rank_tier(RankTierRule::new(RANK, RANK_TIER, RankPolicy::SeasonTiers))
        .with_metrics(TEAM_METRICS.iter().copied())
}

/// Pipeline for the player table. Leading spaces in source headers are
/// dropped from the canonical names.
pub fn player_pipeline() -> StatsFilterPipeline {
    let mut map = ColumnMap::new();
    for name in PLAYER_INFO_COLUMNS.iter().chain(PLAYER_RATE_COLUMNS) {
        map = map.rename(name, name);
    }
    for &metric in PLAYER_METRICS {
        let source = PLAYER_HEADER
            .iter()
            .find(|h| h.trim() == metric)
            .copied()
            .unwrap_or(metric);
        map = map.rename(source, metric);
    }

    let types = TypeMap::new()
        .cast_all(PLAYER_RATE_COLUMNS, ColumnType::NullableFloat)
        .cast_all(PLAYER_METRICS, ColumnType::NullableFloat);

    StatsFilterPipeline::new(map, types).with_metrics(PLAYER_METRICS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pipeline::Filter, sources::delimited::parse_csv, table::Cell};

    const TEAM_RESULTS: &str = "\
rank,team,conf,record,adjoe,oe Rank,adjde,de Rank,barthag,sos,consos,Conf Win%,\"Fun Rk, adjt\"
1,Houston,Amer,33-4,117.6,9,87.1,1,.9633,5.9,2.1,0.889,12
27,Kansas St.,B12,26-10,111.9,40,95.3,28,.8562,10.9,12.5,0.611,44
210,Air Force,MWC,14-18,104.0,230,103.2,183,.5214,2.7,4.3,0.278,98
";

    const FOUR_FACTORS: &str = "\
TeamName,eFG%,eFG% Def,FTR,FTR Def,OR%,DR%,TO%,TO% Def.,3P%,3pD%,2p%,2p%D,ft%,ft%D
Houston,50.9,42.6,33.1,29.8,38.1,25.9,15.6,22.1,33.5,28.8,51.4,42.2,69.9,72.1
Kansas St.,51.4,49.3,33.6,30.4,29.9,29.5,18.0,20.4,34.0,33.0,52.1,49.4,72.7,71.7
";

    fn teams() -> Table {
        let results = parse_csv(TEAM_RESULTS, None).unwrap();
        let factors = parse_csv(FOUR_FACTORS, None).unwrap();
        let combined = combine_team_tables(&results, &factors).unwrap();
        team_pipeline().prepare(&combined).unwrap()
    }

    #[test]
    fn test_team_pipeline_types_and_tiers() {
        let table = teams();
        assert_eq!(table.len(), 3);
        assert_eq!(table.cell(0, RANK), Some(&Cell::Int(1)));
        assert_eq!(table.cell(1, CONF_WIN_PCT), Some(&Cell::Float(0.611)));
        assert_eq!(table.cell(1, RANK_TIER), Some(&Cell::from("26–100")));
        assert_eq!(table.cell(2, RANK_TIER), Some(&Cell::from("201+")));
    }

    #[test]
    fn test_team_pipeline_drops_unselected_columns() {
        let table = teams();
        assert!(!table.has_column("barthag"));
        assert!(table.has_column("Fun Rk, adjt"));
    }

    #[test]
    fn test_team_without_four_factors_has_blank_factors() {
        let table = teams();
        assert_eq!(table.cell(0, "eFG%"), Some(&Cell::Float(50.9)));
        assert_eq!(table.cell(2, "eFG%"), Some(&Cell::Missing));
    }

    #[test]
    fn test_team_pipeline_conference_filter() {
        let view = team_pipeline()
            .apply(&teams(), &[Filter::membership(CONFERENCE, ["B12", "SEC"])])
            .unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.table.cell(0, TEAM), Some(&Cell::from("Kansas St.")));
    }

    #[test]
    fn test_player_pipeline_trims_metric_names() {
        let pipeline = player_pipeline();
        let pair = pipeline
            .column_map()
            .entries()
            .iter()
            .find(|(_, canonical)| canonical == "bpm")
            .unwrap();
        assert_eq!(pair.0, " bpm");
        assert_eq!(pipeline.metrics().len(), PLAYER_METRICS.len());
    }

    #[test]
    fn test_player_pipeline_prepares_fixed_header_export() {
        let mut fields = vec!["1"; PLAYER_HEADER.len()];
        fields[0] = "Zach Edey";
        fields[1] = "Purdue";
        fields[2] = "B10";
        fields[63] = "22.3";
        let raw = parse_csv(&fields.join(","), Some(PLAYER_HEADER)).unwrap();

        let table = player_pipeline().prepare(&raw).unwrap();
        assert_eq!(table.cell(0, PLAYER_NAME), Some(&Cell::from("Zach Edey")));
        assert_eq!(table.cell(0, "pts"), Some(&Cell::Float(22.3)));
    }
}
