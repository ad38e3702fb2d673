//! `ratings`: Sports-Reference school ratings.

use super::{common::render_view, conference_filters};
use crate::{
    cli::{ConferenceFilters, ViewArgs},
    datasets::{
        sports_reference::{self, ratings_pipeline},
        Dataset,
    },
    pipeline::{Filter, RankTier},
    sources::SourceFetcher,
    view::FilteredView,
    Result, Season,
};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct RatingsParams {
    pub season: Season,
    pub filters: ConferenceFilters,
    pub ranked_only: bool,
    pub view: ViewArgs,
}

pub async fn ratings_view<F: SourceFetcher>(
    fetcher: &F,
    params: &RatingsParams,
) -> Result<FilteredView> {
    let raw = fetcher.fetch(Dataset::Ratings, params.season).await?;

    let mut filters = Vec::new();
    if params.ranked_only {
        filters.push(Filter::membership(
            sports_reference::AP_RANK_TIER,
            [RankTier::Top25.label()],
        ));
    }
    filters.extend(conference_filters(
        &params.filters,
        sports_reference::CONFERENCE,
        sports_reference::SCHOOL,
    ));

    ratings_pipeline().run(&raw, &filters)
}

pub async fn handle_ratings<F: SourceFetcher>(fetcher: &F, params: RatingsParams) -> Result<()> {
    let view = ratings_view(fetcher, &params).await?;
    info!(season = %params.season, rows = view.len(), "ratings view ready");
    render_view(
        &view,
        &params.view,
        sports_reference::SCHOOL,
        Some(sports_reference::AP_RANK_TIER),
    )
}
