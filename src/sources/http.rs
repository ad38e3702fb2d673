//! Fetching datasets over HTTP.

use super::SourceFetcher;
use crate::{
    cli::types::Season,
    datasets::{Dataset, SourceUrls},
    error::{Result, StatsError},
};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Downloads datasets from their upstream sites. Non-2xx responses are errors.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    urls: SourceUrls,
}

impl HttpFetcher {
    pub fn new(urls: SourceUrls, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, urls })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(SourceUrls::default(), DEFAULT_TIMEOUT)
    }

    pub fn urls(&self) -> &SourceUrls {
        &self.urls
    }
}

impl SourceFetcher for HttpFetcher {
    async fn fetch_text(&self, dataset: Dataset, season: Season) -> Result<String> {
        let url = dataset.url(season, &self.urls);
        info!(%url, "fetching dataset");

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        if body.trim().is_empty() {
            return Err(StatsError::NoData);
        }
        Ok(body)
    }
}
