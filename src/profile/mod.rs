//! Summoner profile records shared by the fetcher, the formatter and the cache.

use serde::{Deserialize, Serialize};

pub mod fetcher;
pub mod format;

pub use fetcher::ProfileFetcher;
pub use format::format;

/// Canonical form of a summoner name: lowercase with all whitespace removed.
///
/// Used both for the upstream query and for the cache key, so two inputs that
/// only differ by case or spacing share one cache entry.
pub fn normalize(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummonerRecord {
    pub id: String,
    pub name: String,
    pub level: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionSeries {
    pub wins: u32,
    pub losses: u32,
    pub target: u32,
}

/// Ranked solo/duo standing of one summoner.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueStanding {
    pub tier: String,
    pub division_name: String,
    pub rank: String,
    pub league_points: i32,
    /// `None` when no ranked game has been played.
    pub win_rate: Option<f64>,
    pub promotion_series: Option<PromotionSeries>,
}

/// Percentage of games won, or `None` with zero games played.
pub fn win_rate(wins: u32, losses: u32) -> Option<f64> {
    let games = u64::from(wins) + u64::from(losses);
    (games > 0).then(|| 100.0 * f64::from(wins) / games as f64)
}

/// Result of a successful lookup. `standing` is `None` for unranked summoners.
#[derive(Debug, Clone, PartialEq)]
pub struct FullProfile {
    pub summoner: SummonerRecord,
    pub standing: Option<LeagueStanding>,
}

/// Flat form of a [`FullProfile`] stored in the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedProfile {
    pub id: String,
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub division_name: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub league_points: Option<i32>,
    #[serde(default)]
    pub win_rate: Option<f64>,
    #[serde(default)]
    pub promotion_series: Option<PromotionSeries>,
}

impl From<&FullProfile> for CachedProfile {
    fn from(profile: &FullProfile) -> Self {
        let standing = profile.standing.as_ref();

        Self {
            id: profile.summoner.id.clone(),
            name: profile.summoner.name.clone(),
            level: profile.summoner.level,
            tier: standing.map(|s| s.tier.clone()),
            division_name: standing.map(|s| s.division_name.clone()),
            rank: standing.map(|s| s.rank.clone()),
            league_points: standing.map(|s| s.league_points),
            win_rate: standing.and_then(|s| s.win_rate),
            promotion_series: standing.and_then(|s| s.promotion_series),
        }
    }
}

impl From<CachedProfile> for FullProfile {
    fn from(cached: CachedProfile) -> Self {
        let standing = match (cached.tier, cached.division_name, cached.rank) {
            (Some(tier), Some(division_name), Some(rank)) => Some(LeagueStanding {
                tier,
                division_name,
                rank,
                league_points: cached.league_points.unwrap_or_default(),
                win_rate: cached.win_rate,
                promotion_series: cached.promotion_series,
            }),
            _ => None,
        };

        Self {
            summoner: SummonerRecord {
                id: cached.id,
                name: cached.name,
                level: cached.level,
            },
            standing,
        }
    }
}
