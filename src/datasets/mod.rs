//! Upstream datasets: where they live and how their raw text is parsed.
//!
//! - [`torvik`]: barttorvik.com CSV exports (team results, four factors,
//!   player advanced stats).
//! - [`sports_reference`]: the sports-reference.com school ratings page.

pub mod sports_reference;
pub mod torvik;

use crate::{
    cli::types::Season,
    error::Result,
    sources::{
        delimited::parse_csv,
        html::{parse_html_table, HtmlTableSpec},
    },
    table::Table,
};

pub const DEFAULT_TORVIK_BASE_URL: &str = "http://barttorvik.com";
pub const DEFAULT_SPORTS_REFERENCE_BASE_URL: &str = "https://www.sports-reference.com";

/// Base URLs of the two upstream sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrls {
    pub torvik: String,
    pub sports_reference: String,
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self {
            torvik: DEFAULT_TORVIK_BASE_URL.to_string(),
            sports_reference: DEFAULT_SPORTS_REFERENCE_BASE_URL.to_string(),
        }
    }
}

/// How a dataset's body is turned into a raw table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    /// Delimited text; `header` is set for endpoints that send no header row.
    Csv {
        header: Option<&'static [&'static str]>,
    },
    Html(HtmlTableSpec),
}

/// One raw table published by an upstream source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Torvik season team results (rank, efficiency, record).
    TeamResults,
    /// Torvik four-factor team stats, keyed by `TeamName`.
    FourFactors,
    /// Torvik player advanced stats, sent without a header row.
    PlayerStats,
    /// Sports-Reference school ratings table.
    Ratings,
}

impl Dataset {
    pub fn url(self, season: Season, urls: &SourceUrls) -> String {
        let torvik = urls.torvik.trim_end_matches('/');
        match self {
            Dataset::TeamResults => format!("{}/{}_team_results.csv", torvik, season),
            Dataset::FourFactors => format!("{}/{}_fffinal.csv", torvik, season),
            Dataset::PlayerStats => format!("{}/getadvstats.php?year={}&csv=1", torvik, season),
            Dataset::Ratings => format!(
                "{}/cbb/seasons/men/{}-ratings.html",
                urls.sports_reference.trim_end_matches('/'),
                season
            ),
        }
    }

    /// File name used when reading the dataset from a local directory.
    pub fn file_name(self, season: Season) -> String {
        match self {
            Dataset::TeamResults => format!("{}_team_results.csv", season),
            Dataset::FourFactors => format!("{}_fffinal.csv", season),
            Dataset::PlayerStats => format!("{}_players.csv", season),
            Dataset::Ratings => format!("{}-ratings.html", season),
        }
    }

    pub fn format(self) -> SourceFormat {
        match self {
            Dataset::TeamResults | Dataset::FourFactors => SourceFormat::Csv { header: None },
            Dataset::PlayerStats => SourceFormat::Csv {
                header: Some(torvik::PLAYER_HEADER),
            },
            Dataset::Ratings => SourceFormat::Html(sports_reference::ratings_table_spec()),
        }
    }

    /// Parse a fetched body into a raw table, artifact rows removed.
    pub fn parse(self, body: &str) -> Result<Table> {
        match self.format() {
            SourceFormat::Csv { header } => parse_csv(body, header),
            SourceFormat::Html(spec) => parse_html_table(body, &spec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_urls() {
        let urls = SourceUrls::default();
        let season = Season::new(2023);
        assert_eq!(
            Dataset::TeamResults.url(season, &urls),
            "http://barttorvik.com/2023_team_results.csv"
        );
        assert_eq!(
            Dataset::FourFactors.url(season, &urls),
            "http://barttorvik.com/2023_fffinal.csv"
        );
        assert_eq!(
            Dataset::PlayerStats.url(season, &urls),
            "http://barttorvik.com/getadvstats.php?year=2023&csv=1"
        );
        assert_eq!(
            Dataset::Ratings.url(season, &urls),
            "https://www.sports-reference.com/cbb/seasons/men/2023-ratings.html"
        );
    }

    #[test]
    fn test_dataset_url_with_custom_base() {
        let urls = SourceUrls {
            torvik: "http://localhost:8080/".to_string(),
            ..SourceUrls::default()
        };
        assert_eq!(
            Dataset::TeamResults.url(Season::new(2024), &urls),
            "http://localhost:8080/2024_team_results.csv"
        );
    }

    #[test]
    fn test_dataset_file_names() {
        let season = Season::new(2023);
        assert_eq!(Dataset::PlayerStats.file_name(season), "2023_players.csv");
        assert_eq!(Dataset::Ratings.file_name(season), "2023-ratings.html");
    }

    #[test]
    fn test_player_stats_parse_uses_fixed_header() {
        let row = vec!["x"; torvik::PLAYER_HEADER.len()].join(",");
        let table = Dataset::PlayerStats.parse(&row).unwrap();
        assert_eq!(table.columns().len(), torvik::PLAYER_HEADER.len());
        assert_eq!(table.columns()[0], "player_name");
        assert_eq!(table.len(), 1);
    }
}
