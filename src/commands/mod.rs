//! Command implementations for the cbb-stats CLI

pub mod common;
pub mod metrics;
pub mod players;
pub mod ratings;
pub mod teams;

use crate::{
    cli::{types::Season, ConferenceFilters, SourceArgs},
    datasets::SourceUrls,
    pipeline::Filter,
    sources::{DirectoryFetcher, Fetcher, HttpFetcher},
    Result, DATA_DIR_ENV_VAR, SEASON_ENV_VAR,
};
use std::{path::PathBuf, time::Duration};
use tracing::debug;

/// Season from the flag, then `CBB_STATS_SEASON`, then the current season.
///
/// An unparsable env value is an error rather than silently ignored.
pub fn resolve_season(season: Option<Season>) -> Result<Season> {
    if let Some(season) = season {
        return Ok(season);
    }
    match std::env::var(SEASON_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        _ => Ok(Season::current()),
    }
}

/// Data directory from the flag, then `CBB_STATS_DATA_DIR`.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Option<PathBuf> {
    data_dir.or_else(|| {
        std::env::var(DATA_DIR_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    })
}

/// Directory fetcher when a data directory is configured, HTTP otherwise.
pub fn build_fetcher(source: &SourceArgs) -> Result<Fetcher> {
    match resolve_data_dir(source.data_dir.clone()) {
        Some(dir) => {
            debug!(dir = %dir.display(), "reading datasets from directory");
            Ok(Fetcher::Directory(DirectoryFetcher::new(dir)))
        }
        None => Ok(Fetcher::Http(HttpFetcher::new(
            SourceUrls::default(),
            Duration::from_secs(source.timeout_secs),
        )?)),
    }
}

/// Membership and identity filters for the conference/team options.
pub(crate) fn conference_filters(
    filters: &ConferenceFilters,
    conference_column: &str,
    team_column: &str,
) -> Vec<Filter> {
    let mut out = Vec::new();
    if !filters.conferences.is_empty() {
        out.push(Filter::membership(
            conference_column,
            filters.conferences.iter().cloned(),
        ));
    }
    if !filters.teams.is_empty() {
        out.push(Filter::identity(team_column, filters.teams.iter().cloned()));
    }
    out
}

#[cfg(test)]
mod tests;
