use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Local request quota exhausted")]
    LocalRateLimit,
}

/// A call to Riot API can either result in a success with the success type or fail with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;

// ============================================================================
// Summoner
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: String,
    pub name: String,
    pub summoner_level: u32,
}

// ============================================================================
// League
// ============================================================================

pub const RANKED_SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

/// One league a summoner belongs to, with every player ranked in it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueListDto {
    pub queue_type: String,
    pub tier: String,
    /// Division name, e.g. "Nasus's Zealots".
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub entries: Vec<LeagueItemDto>,
}

impl LeagueListDto {
    pub fn is_solo_queue(&self) -> bool {
        self.queue_type == RANKED_SOLO_QUEUE
    }

    /// The entry belonging to the given summoner, if listed.
    pub fn entry_for(&self, summoner_id: &str) -> Option<&LeagueItemDto> {
        self.entries
            .iter()
            .find(|entry| entry.player_or_team_id == summoner_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueItemDto {
    pub player_or_team_id: String,
    #[serde(default)]
    pub rank: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub league_points: i32,
    #[serde(default)]
    pub mini_series: Option<MiniSeriesDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniSeriesDto {
    pub wins: u32,
    pub losses: u32,
    pub target: u32,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn league_list_decodes_with_mini_series() {
        let value = json!([{
            "queueType": "RANKED_SOLO_5x5",
            "tier": "GOLD",
            "name": "Nasus's Zealots",
            "rank": "I",
            "entries": [{
                "playerOrTeamId": "42",
                "playerOrTeamName": "Someone",
                "rank": "I",
                "wins": 10,
                "losses": 8,
                "leaguePoints": 100,
                "miniSeries": { "wins": 1, "losses": 0, "target": 3, "progress": "WNN" }
            }]
        }]);

        let leagues: Vec<LeagueListDto> = serde_json::from_value(value).unwrap();
        let entry = leagues[0].entry_for("42").unwrap();

        assert!(leagues[0].is_solo_queue());
        assert_eq!(entry.league_points, 100);
        assert_eq!(entry.mini_series.as_ref().unwrap().target, 3);
        assert!(leagues[0].entry_for("43").is_none());
    }

    #[test]
    fn league_list_tolerates_missing_optional_fields() {
        let value = json!({ "queueType": "RANKED_FLEX_SR", "tier": "SILVER" });

        let league: LeagueListDto = serde_json::from_value(value).unwrap();

        assert!(!league.is_solo_queue());
        assert!(league.entries.is_empty());
        assert!(league.name.is_none());
    }
}
