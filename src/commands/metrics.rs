//! `metrics`: list chartable columns per dataset.

use super::common::print_json;
use crate::{
    cli::types::DatasetKind,
    datasets::{sports_reference, torvik},
    Result,
};

pub fn metrics_for(dataset: DatasetKind) -> &'static [&'static str] {
    match dataset {
        DatasetKind::Teams => torvik::TEAM_METRICS,
        DatasetKind::Players => torvik::PLAYER_METRICS,
        DatasetKind::Ratings => sports_reference::RATINGS_METRICS,
    }
}

pub fn handle_metrics(dataset: DatasetKind, as_json: bool) -> Result<()> {
    let metrics = metrics_for(dataset);
    if as_json {
        return print_json(metrics);
    }
    for metric in metrics {
        println!("{}", metric);
    }
    Ok(())
}
