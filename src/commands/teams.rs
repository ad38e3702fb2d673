//! `teams`: Torvik team results joined with four-factor stats.

use super::{common::render_view, conference_filters};
use crate::{
    cli::{types::Interpolation, ConferenceFilters, ViewArgs},
    datasets::{
        torvik::{self, combine_team_tables, team_pipeline},
        Dataset,
    },
    pipeline::Filter,
    sources::SourceFetcher,
    stats::{top_conferences, DEFAULT_TOP_CONFERENCES},
    view::FilteredView,
    Result, Season,
};
use tracing::info;

/// Options for [`handle_teams`].
#[derive(Debug, Clone, Default)]
pub struct TeamsParams {
    pub season: Season,
    pub filters: ConferenceFilters,
    pub top_conferences: bool,
    pub top_conferences_by_rank: Option<usize>,
    pub conf_win_quantile: Option<f64>,
    pub interpolation: Interpolation,
    pub view: ViewArgs,
}

/// Fetch, prepare and filter the team table.
pub async fn team_view<F: SourceFetcher>(fetcher: &F, params: &TeamsParams) -> Result<FilteredView> {
    let results = fetcher.fetch(Dataset::TeamResults, params.season).await?;
    let four_factors = fetcher.fetch(Dataset::FourFactors, params.season).await?;
    let combined = combine_team_tables(&results, &four_factors)?;

    let pipeline = team_pipeline();
    let source = pipeline.prepare(&combined)?;

    let mut filters = Vec::new();
    if params.top_conferences {
        filters.push(Filter::membership(
            torvik::CONFERENCE,
            DEFAULT_TOP_CONFERENCES.iter().copied(),
        ));
    }
    if let Some(n) = params.top_conferences_by_rank {
        let top = top_conferences(&source, torvik::CONFERENCE, torvik::RANK, n)?;
        info!(?top, "top conferences by mean rank");
        filters.push(Filter::membership(torvik::CONFERENCE, top));
    }
    filters.extend(conference_filters(
        &params.filters,
        torvik::CONFERENCE,
        torvik::TEAM,
    ));
    if let Some(q) = params.conf_win_quantile {
        filters.push(Filter::quantile(
            torvik::CONF_WIN_PCT,
            q,
            params.interpolation.into(),
        ));
    }

    pipeline.apply(&source, &filters)
}

pub async fn handle_teams<F: SourceFetcher>(fetcher: &F, params: TeamsParams) -> Result<()> {
    let view = team_view(fetcher, &params).await?;
    info!(season = %params.season, rows = view.len(), "team view ready");
    render_view(&view, &params.view, torvik::TEAM, Some(torvik::RANK_TIER))
}
