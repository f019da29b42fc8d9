use crate::riot::client::RiotClient;
use crate::riot::region::Platform;
use crate::riot::types::{RiotApiResponse, SummonerDto};

impl RiotClient {
    /// Get summoner by name
    /// Uses platform routing (euw1, na1, kr, etc.)
    pub async fn get_summoner_by_name(
        &self,
        platform: Platform,
        name: &str,
    ) -> RiotApiResponse<SummonerDto> {
        let url = format!(
            "{}/lol/summoner/v3/summoners/by-name/{}",
            self.platform_url(platform),
            urlencoding::encode(name)
        );

        self.get(&url).await
    }
}
