//! Season type for college basketball data sources.

use crate::error::{Result, StatsError};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Month in which a new season's data starts to appear.
const SEASON_START_MONTH: u32 = 11;

/// A college basketball season, named by the calendar year in which it ends.
///
/// The 2022-23 season is `Season(2023)`. Both upstream sources key their
/// files and pages by this year.
///
/// # Examples
///
/// ```rust
/// use cbb_stats::Season;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2022, 12, 1).unwrap();
/// assert_eq!(Season::containing(date), Season::new(2023));
/// assert_eq!(Season::new(2023).to_string(), "2023");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The season in progress (or most recently finished) on `date`.
    ///
    /// Seasons start in November, so November and December belong to the
    /// following year's season.
    pub fn containing(date: NaiveDate) -> Self {
        let year = date.year() as u16;
        if date.month() >= SEASON_START_MONTH {
            Self(year + 1)
        } else {
            Self(year)
        }
    }

    /// The season containing today's local date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_rolls_over_in_november() {
        assert_eq!(Season::containing(date(2022, 10, 31)), Season(2022));
        assert_eq!(Season::containing(date(2022, 11, 1)), Season(2023));
        assert_eq!(Season::containing(date(2023, 3, 15)), Season(2023));
    }

    #[test]
    fn test_season_from_str() {
        assert_eq!("2024".parse::<Season>().unwrap(), Season(2024));
        assert_eq!(" 2024 ".parse::<Season>().unwrap(), Season(2024));
        assert!(matches!(
            "next".parse::<Season>(),
            Err(StatsError::InvalidSeason(_))
        ));
    }

    #[test]
    fn test_season_display() {
        assert_eq!(Season::new(2023).to_string(), "2023");
        assert_eq!(Season::new(2023).as_u16(), 2023);
    }
}
