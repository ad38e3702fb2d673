//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{DatasetKind, Interpolation, Season};

/// Where datasets are read from.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Season, named by the year it ends (or set `CBB_STATS_SEASON`).
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Read downloaded files from this directory instead of the network
    /// (or set `CBB_STATS_DATA_DIR`).
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// HTTP timeout in seconds.
    #[clap(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

/// How the filtered view is printed.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Scatter x column; requires `--y`.
    #[clap(long, requires = "y")]
    pub x: Option<String>,

    /// Scatter y column; requires `--x`.
    #[clap(long, requires = "x")]
    pub y: Option<String>,

    /// Histogram of one metric instead of the table.
    #[clap(long, value_name = "METRIC", conflicts_with = "x")]
    pub hist: Option<String>,

    /// Number of histogram bins, 1 to 1000.
    #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=1000))]
    pub bins: u16,

    /// Column to split scatter colors or histogram series by.
    #[clap(long)]
    pub group: Option<String>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

/// Conference and team filters shared by the team-level commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ConferenceFilters {
    /// Conference to keep (repeatable): `-c SEC -c B12`. "All" disables the filter.
    #[clap(long = "conference", short = 'c')]
    pub conferences: Vec<String>,

    /// Team to keep (repeatable); pass two for a head-to-head view.
    #[clap(long = "team", short = 't')]
    pub teams: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Torvik team results joined with four-factor stats.
    Teams {
        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        filters: ConferenceFilters,

        /// Keep only the ten major conferences.
        #[clap(long, conflicts_with = "top_conferences_by_rank")]
        top_conferences: bool,

        /// Keep only the N conferences with the best mean team rank.
        #[clap(long, value_name = "N")]
        top_conferences_by_rank: Option<usize>,

        /// Keep teams whose conference win percentage is at or above this
        /// quantile of all teams (0 to 1).
        #[clap(long, value_name = "Q")]
        conf_win_quantile: Option<f64>,

        /// Interpolation for `--conf-win-quantile`.
        #[clap(long, value_enum, default_value_t = Interpolation::default())]
        interpolation: Interpolation,

        #[clap(flatten)]
        view: ViewArgs,
    },

    /// Torvik player advanced stats.
    Players {
        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        filters: ConferenceFilters,

        /// Player to keep (repeatable).
        #[clap(long = "player", short = 'p')]
        players: Vec<String>,

        #[clap(flatten)]
        view: ViewArgs,
    },

    /// Sports-Reference school ratings.
    Ratings {
        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        filters: ConferenceFilters,

        /// Keep only teams in the AP top 25.
        #[clap(long)]
        ranked_only: bool,

        #[clap(flatten)]
        view: ViewArgs,
    },

    /// List the metric columns a dataset offers for charts.
    Metrics {
        #[clap(value_enum)]
        dataset: DatasetKind,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "cbb-stats",
    version,
    about = "NCAA men's basketball team and player statistics"
)]
pub struct Cbb {
    /// Log debug output to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
