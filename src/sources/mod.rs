//! Where raw tables come from.
//!
//! A [`SourceFetcher`] returns the body of one [`Dataset`] for a season;
//! [`SourceFetcher::fetch`] then parses it with the dataset's format, so the
//! pipeline always receives a raw table with artifact rows already removed.

pub mod delimited;
pub mod html;
pub mod http;

pub use http::HttpFetcher;

use crate::{
    cli::types::Season,
    datasets::Dataset,
    error::{Result, StatsError},
    table::Table,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supplies raw dataset bodies.
#[allow(async_fn_in_trait)]
pub trait SourceFetcher {
    /// Raw body of `dataset` for `season`.
    async fn fetch_text(&self, dataset: Dataset, season: Season) -> Result<String>;

    /// Fetch and parse `dataset` into a raw table.
    async fn fetch(&self, dataset: Dataset, season: Season) -> Result<Table> {
        let body = self.fetch_text(dataset, season).await?;
        let table = dataset.parse(&body)?;
        debug!(?dataset, %season, rows = table.len(), "parsed dataset");
        Ok(table)
    }
}

/// Reads previously downloaded datasets from a directory, one file per
/// dataset named by [`Dataset::file_name`].
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, dataset: Dataset, season: Season) -> PathBuf {
        self.root.join(dataset.file_name(season))
    }
}

impl SourceFetcher for DirectoryFetcher {
    async fn fetch_text(&self, dataset: Dataset, season: Season) -> Result<String> {
        let path = self.path_for(dataset, season);
        info!(path = %path.display(), "reading dataset");
        let body = tokio::fs::read_to_string(&path).await?;
        if body.trim().is_empty() {
            return Err(StatsError::NoData);
        }
        Ok(body)
    }
}

/// Fetcher chosen at runtime: the network, or a local data directory.
#[derive(Debug, Clone)]
pub enum Fetcher {
    Http(HttpFetcher),
    Directory(DirectoryFetcher),
}

impl SourceFetcher for Fetcher {
    async fn fetch_text(&self, dataset: Dataset, season: Season) -> Result<String> {
        match self {
            Fetcher::Http(fetcher) => fetcher.fetch_text(dataset, season).await,
            Fetcher::Directory(fetcher) => fetcher.fetch_text(dataset, season).await,
        }
    }
}
