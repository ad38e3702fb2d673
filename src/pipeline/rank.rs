//! Rank bucketing.
//!
//! Two ranking sources feed the dashboards and they bucket differently:
//!
//! - [`RankPolicy::SeasonTiers`] is used with a full season ranking where
//!   every team has a rank. It splits the field into four tiers with
//!   inclusive upper bounds at 25, 100 and 200.
//! - [`RankPolicy::Poll`] is used with a poll ranking where only ranked teams
//!   have a value. Any present rank is "Top 25"; an absent one is "Unranked".
//!
//! A dataset picks one policy through its [`RankTierRule`].

use crate::{
    error::{Result, StatsError},
    table::{Cell, Table},
};
use serde::Serialize;
use std::fmt;

/// Bucketing rule applied to a rank column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RankPolicy {
    SeasonTiers,
    Poll,
}

/// Discrete bucket derived from a rank.
///
/// Variants are ordered from best to worst so tiers sort naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RankTier {
    Top25,
    Rank26To100,
    Rank101To200,
    Rank201Plus,
    Unranked,
}

impl RankTier {
    pub fn label(&self) -> &'static str {
        match self {
            RankTier::Top25 => "Top 25",
            RankTier::Rank26To100 => "26–100",
            RankTier::Rank101To200 => "101–200",
            RankTier::Rank201Plus => "201+",
            RankTier::Unranked => "Unranked",
        }
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl RankPolicy {
    /// Bucket a rank. Total over every input: ranks below 1 count as
    /// "Top 25" and an absent rank is "Unranked" under both policies.
    pub fn classify(self, rank: Option<i64>) -> RankTier {
        match (self, rank) {
            (_, None) => RankTier::Unranked,
            (RankPolicy::Poll, Some(_)) => RankTier::Top25,
            (RankPolicy::SeasonTiers, Some(r)) if r <= 25 => RankTier::Top25,
            (RankPolicy::SeasonTiers, Some(r)) if r <= 100 => RankTier::Rank26To100,
            (RankPolicy::SeasonTiers, Some(r)) if r <= 200 => RankTier::Rank101To200,
            (RankPolicy::SeasonTiers, Some(_)) => RankTier::Rank201Plus,
        }
    }
}

/// Free-function form of [`RankPolicy::classify`].
pub fn classify_rank(policy: RankPolicy, rank: Option<i64>) -> RankTier {
    policy.classify(rank)
}

/// Where the tier column comes from and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTierRule {
    pub rank_column: String,
    pub tier_column: String,
    pub policy: RankPolicy,
}

impl RankTierRule {
    pub fn new(rank_column: &str, tier_column: &str, policy: RankPolicy) -> Self {
        Self {
            rank_column: rank_column.to_string(),
            tier_column: tier_column.to_string(),
            policy,
        }
    }
}

fn rank_value(column: &str, cell: &Cell) -> Result<Option<i64>> {
    let fail = |value: String| StatsError::TypeCoercion {
        column: column.to_string(),
        value,
        target: "integer".to_string(),
    };
    match cell {
        Cell::Missing => Ok(None),
        Cell::Int(i) => Ok(Some(*i)),
        Cell::Float(f) if f.fract() == 0.0 && f.is_finite() => Ok(Some(*f as i64)),
        Cell::Float(f) => Err(fail(f.to_string())),
        Cell::Text(s) => s.trim().parse::<i64>().map(Some).map_err(|_| fail(s.clone())),
    }
}

/// Append `rule.tier_column`, computed from `rule.rank_column` for every row.
pub fn derive_rank_tier(table: &Table, rule: &RankTierRule) -> Result<Table> {
    let tiers = table
        .column(&rule.rank_column)?
        .map(|cell| {
            rank_value(&rule.rank_column, cell)
                .map(|rank| Cell::Text(rule.policy.classify(rank).label().to_string()))
        })
        .collect::<Result<Vec<_>>>()?;
    table.with_column(&rule.tier_column, tiers)
}
