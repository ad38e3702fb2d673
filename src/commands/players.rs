//! `players`: Torvik player advanced stats.

use super::{common::render_view, conference_filters};
use crate::{
    cli::{ConferenceFilters, ViewArgs},
    datasets::{
        torvik::{self, player_pipeline},
        Dataset,
    },
    pipeline::Filter,
    sources::SourceFetcher,
    view::FilteredView,
    Result, Season,
};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct PlayersParams {
    pub season: Season,
    pub filters: ConferenceFilters,
    pub players: Vec<String>,
    pub view: ViewArgs,
}

pub async fn player_view<F: SourceFetcher>(
    fetcher: &F,
    params: &PlayersParams,
) -> Result<FilteredView> {
    let raw = fetcher.fetch(Dataset::PlayerStats, params.season).await?;

    let mut filters = conference_filters(&params.filters, torvik::CONFERENCE, torvik::TEAM);
    if !params.players.is_empty() {
        filters.push(Filter::identity(
            torvik::PLAYER_NAME,
            params.players.iter().cloned(),
        ));
    }

    player_pipeline().run(&raw, &filters)
}

pub async fn handle_players<F: SourceFetcher>(fetcher: &F, params: PlayersParams) -> Result<()> {
    let view = player_view(fetcher, &params).await?;
    info!(season = %params.season, rows = view.len(), "player view ready");
    render_view(&view, &params.view, torvik::PLAYER_NAME, None)
}
