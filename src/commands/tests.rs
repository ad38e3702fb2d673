//! Unit tests for command helpers

use super::*;

#[cfg(test)]
mod command_tests {
    use super::*;
    use crate::error::StatsError;

    #[test]
    fn test_resolve_season_from_option() {
        let season = resolve_season(Some(Season::new(2021))).unwrap();
        assert_eq!(season, Season::new(2021));
    }

    // Single test so the env var is not raced by a sibling test.
    #[test]
    fn test_resolve_season_from_env() {
        std::env::set_var(SEASON_ENV_VAR, "2019");
        assert_eq!(resolve_season(None).unwrap(), Season::new(2019));
        assert_eq!(
            resolve_season(Some(Season::new(2024))).unwrap(),
            Season::new(2024)
        );

        std::env::set_var(SEASON_ENV_VAR, "last year");
        assert!(matches!(
            resolve_season(None),
            Err(StatsError::InvalidSeason(_))
        ));

        std::env::remove_var(SEASON_ENV_VAR);
        assert_eq!(resolve_season(None).unwrap(), Season::current());
    }

    #[test]
    fn test_resolve_data_dir_prefers_flag() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/cbb")));
        assert_eq!(dir, Some(PathBuf::from("/tmp/cbb")));
    }

    #[test]
    fn test_build_fetcher_uses_directory_when_given() {
        let source = SourceArgs {
            season: None,
            data_dir: Some(PathBuf::from("/tmp/cbb")),
            timeout_secs: 5,
        };
        match build_fetcher(&source).unwrap() {
            Fetcher::Directory(fetcher) => {
                assert_eq!(fetcher.root(), std::path::Path::new("/tmp/cbb"))
            }
            other => panic!("expected directory fetcher, got {:?}", other),
        }
    }

    #[test]
    fn test_conference_filters_skip_empty_options() {
        let filters = ConferenceFilters::default();
        assert!(conference_filters(&filters, "conf", "team").is_empty());

        let filters = ConferenceFilters {
            conferences: vec!["SEC".into()],
            teams: vec!["Auburn".into(), "Alabama".into()],
        };
        assert_eq!(
            conference_filters(&filters, "conf", "team"),
            vec![
                Filter::membership("conf", ["SEC"]),
                Filter::identity("team", ["Auburn", "Alabama"]),
            ]
        );
    }
}
