use super::FullProfile;

/// Render a profile as the chat reply.
pub fn format(profile: &FullProfile) -> String {
    let summoner = &profile.summoner;
    let intro = format!("{} is a level {} summoner.", summoner.name, summoner.level);

    let Some(standing) = &profile.standing else {
        return format!("{intro} Currently unranked in solo/duo queue.");
    };

    let mut message = match standing.win_rate {
        Some(win_rate) => format!(
            "{intro} Currently in {} ({} {}) with a win rate of {:.2}%",
            standing.division_name, standing.tier, standing.rank, win_rate
        ),
        None => format!(
            "{intro} Currently in {} ({} {}) with no ranked games played yet",
            standing.division_name, standing.tier, standing.rank
        ),
    };

    if let Some(series) = standing.promotion_series {
        message.push_str(&format!(
            ". {} is currently in promo, {}-{} out of {} games.",
            summoner.name, series.wins, series.losses, series.target
        ));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{LeagueStanding, PromotionSeries, SummonerRecord};

    fn faker(standing: Option<LeagueStanding>) -> FullProfile {
        FullProfile {
            summoner: SummonerRecord {
                id: "123".into(),
                name: "Faker".into(),
                level: 300,
            },
            standing,
        }
    }

    fn challenger(win_rate: Option<f64>) -> LeagueStanding {
        LeagueStanding {
            tier: "CHALLENGER".into(),
            division_name: "Ahri's Legends".into(),
            rank: "I".into(),
            league_points: 1200,
            win_rate,
            promotion_series: None,
        }
    }

    #[test]
    fn ranked_profile_shows_win_rate_with_two_decimals() {
        let profile = faker(Some(challenger(Some(100.0 * 100.0 / 120.0))));

        assert_eq!(
            format(&profile),
            "Faker is a level 300 summoner. Currently in Ahri's Legends (CHALLENGER I) with a win rate of 83.33%"
        );
    }

    #[test]
    fn promotion_series_is_appended() {
        let mut standing = challenger(Some(50.0));
        standing.promotion_series = Some(PromotionSeries {
            wins: 2,
            losses: 1,
            target: 5,
        });

        assert_eq!(
            format(&faker(Some(standing))),
            "Faker is a level 300 summoner. Currently in Ahri's Legends (CHALLENGER I) with a win rate of 50.00%. Faker is currently in promo, 2-1 out of 5 games."
        );
    }

    #[test]
    fn no_games_played_omits_win_rate_clause() {
        let message = format(&faker(Some(challenger(None))));

        assert!(!message.contains('%'));
        assert!(!message.contains("NaN"));
        assert!(message.ends_with("with no ranked games played yet"));
    }

    #[test]
    fn unranked_profile_says_so() {
        assert_eq!(
            format(&faker(None)),
            "Faker is a level 300 summoner. Currently unranked in solo/duo queue."
        );
    }
}
