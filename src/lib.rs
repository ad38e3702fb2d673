//! NCAA Men's Basketball Statistics Library
//!
//! Fetches team and player tables from barttorvik.com and sports-reference.com,
//! runs them through a [`StatsFilterPipeline`] and hands the result to a
//! display layer as a [`FilteredView`].
//!
//! ## Features
//!
//! - **Normalization**: rename source headers and cast columns to typed cells
//! - **Rank tiers**: season-rank buckets or poll ranked/unranked
//! - **Filters**: conference membership, team identity, quantile cutoffs
//! - **Views**: scatter points, grouped distributions and histograms
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cbb_stats::{
//!     datasets::{torvik, Dataset},
//!     pipeline::{Filter, QuantileMethod},
//!     sources::{HttpFetcher, SourceFetcher},
//!     Season,
//! };
//!
//! # async fn example() -> cbb_stats::Result<()> {
//! let fetcher = HttpFetcher::with_defaults()?;
//! let season = Season::new(2023);
//! let results = fetcher.fetch(Dataset::TeamResults, season).await?;
//! let factors = fetcher.fetch(Dataset::FourFactors, season).await?;
//! let raw = torvik::combine_team_tables(&results, &factors)?;
//!
//! let view = torvik::team_pipeline().run(
//!     &raw,
//!     &[
//!         Filter::membership(torvik::CONFERENCE, ["B12", "SEC"]),
//!         Filter::quantile(torvik::CONF_WIN_PCT, 0.75, QuantileMethod::default()),
//!     ],
//! )?;
//! println!("{} teams", view.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CBB_STATS_SEASON=2023
//! export CBB_STATS_DATA_DIR=~/cbb-data   # read downloaded files instead of fetching
//! ```

pub mod cli;
pub mod commands;
pub mod datasets;
pub mod error;
pub mod pipeline;
pub mod records;
pub mod sources;
pub mod stats;
pub mod table;
pub mod view;

// Re-export commonly used types
pub use cli::types::Season;
pub use error::{Result, StatsError};
pub use pipeline::{Filter, RankPolicy, RankTier, StatsFilterPipeline};
pub use table::{Cell, Table};
pub use view::FilteredView;

pub const SEASON_ENV_VAR: &str = "CBB_STATS_SEASON";
pub const DATA_DIR_ENV_VAR: &str = "CBB_STATS_DATA_DIR";
