use std::sync::Arc;

use tracing::{debug, instrument};

use super::{FullProfile, LeagueStanding, PromotionSeries, SummonerRecord, win_rate};
use crate::error::FetchError;
use crate::riot::{
    Platform, RiotClient,
    types::{LeagueListDto, SummonerDto},
};

/// Runs the two dependent Riot calls behind one profile lookup.
///
/// The summoner lookup has to succeed before the league lookup is attempted,
/// since the league endpoint is keyed by the summoner id. No retries.
#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    riot: Arc<RiotClient>,
}

impl ProfileFetcher {
    pub fn new(riot: Arc<RiotClient>) -> Self {
        Self { riot }
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self, name: &str, platform: Platform) -> Result<FullProfile, FetchError> {
        let summoner = self.lookup_summoner(name, platform).await?;
        let leagues = self.lookup_leagues(&summoner, platform).await?;
        let standing = extract_standing(&summoner.id, &leagues);

        debug!(
            summoner_id = %summoner.id,
            ranked = standing.is_some(),
            "Profile fetched"
        );

        Ok(FullProfile { summoner, standing })
    }

    /// First stage: name -> summoner record.
    async fn lookup_summoner(
        &self,
        name: &str,
        platform: Platform,
    ) -> Result<SummonerRecord, FetchError> {
        let dto: SummonerDto = self.riot.get_summoner_by_name(platform, name).await?;

        Ok(SummonerRecord {
            id: dto.id,
            name: dto.name,
            level: dto.summoner_level,
        })
    }

    /// Second stage: summoner id -> every league the summoner is placed in.
    async fn lookup_leagues(
        &self,
        summoner: &SummonerRecord,
        platform: Platform,
    ) -> Result<Vec<LeagueListDto>, FetchError> {
        Ok(self
            .riot
            .get_leagues_by_summoner(platform, &summoner.id)
            .await?)
    }
}

/// Pick the solo/duo standing of `summoner_id` out of its league lists.
///
/// No solo/duo league, or a solo/duo league that does not list the summoner,
/// means the summoner is unranked.
pub fn extract_standing(summoner_id: &str, leagues: &[LeagueListDto]) -> Option<LeagueStanding> {
    let league = leagues.iter().find(|league| league.is_solo_queue())?;
    let entry = league.entry_for(summoner_id)?;

    Some(LeagueStanding {
        tier: league.tier.clone(),
        division_name: league.name.clone().unwrap_or_else(|| league.tier.clone()),
        rank: entry
            .rank
            .clone()
            .or_else(|| league.rank.clone())
            .unwrap_or_default(),
        league_points: entry.league_points,
        win_rate: win_rate(entry.wins, entry.losses),
        promotion_series: entry.mini_series.as_ref().map(|series| PromotionSeries {
            wins: series.wins,
            losses: series.losses,
            target: series.target,
        }),
    })
}
