use crate::riot::client::RiotClient;
use crate::riot::region::Platform;
use crate::riot::types::{LeagueListDto, RiotApiResponse};

impl RiotClient {
    /// Get every league (one per queue) a summoner is placed in
    /// Uses platform routing (euw1, na1, kr, etc.)
    pub async fn get_leagues_by_summoner(
        &self,
        platform: Platform,
        summoner_id: &str,
    ) -> RiotApiResponse<Vec<LeagueListDto>> {
        let url = format!(
            "{}/lol/league/v3/leagues/by-summoner/{}",
            self.platform_url(platform),
            urlencoding::encode(summoner_id)
        );

        self.get(&url).await
    }
}
