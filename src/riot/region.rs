use std::str::FromStr;

use crate::error::InputError;

/// Platform routing values for Riot API (Summoner, League)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    BR1,
    LA1,
    LA2,
    NA1,
    JP1,
    KR,
    EUN1,
    EUW1,
    ME1,
    RU,
    TR1,
    OC1,
    PH2,
    SG2,
    TH2,
    TW2,
    VN2,
}

/// User-facing region codes, in the order they are listed back to users.
const REGION_TABLE: [(&str, Platform); 17] = [
    ("br", Platform::BR1),
    ("lan", Platform::LA1),
    ("las", Platform::LA2),
    ("na", Platform::NA1),
    ("jp", Platform::JP1),
    ("kr", Platform::KR),
    ("eune", Platform::EUN1),
    ("euw", Platform::EUW1),
    ("me", Platform::ME1),
    ("ru", Platform::RU),
    ("tr", Platform::TR1),
    ("oce", Platform::OC1),
    ("ph", Platform::PH2),
    ("sg", Platform::SG2),
    ("th", Platform::TH2),
    ("tw", Platform::TW2),
    ("vn", Platform::VN2),
];

/// Case-insensitive lookup of a user-facing region code.
pub fn resolve(code: &str) -> Option<Platform> {
    let code = code.trim();
    REGION_TABLE
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, platform)| *platform)
}

/// Every accepted region code, in table order.
pub fn valid_codes() -> Vec<&'static str> {
    REGION_TABLE.iter().map(|(code, _)| *code).collect()
}

impl Platform {
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BR1 => "br1",
            Self::LA1 => "la1",
            Self::LA2 => "la2",
            Self::NA1 => "na1",
            Self::JP1 => "jp1",
            Self::KR => "kr",
            Self::EUN1 => "eun1",
            Self::EUW1 => "euw1",
            Self::ME1 => "me1",
            Self::RU => "ru",
            Self::TR1 => "tr1",
            Self::OC1 => "oc1",
            Self::PH2 => "ph2",
            Self::SG2 => "sg2",
            Self::TH2 => "th2",
            Self::TW2 => "tw2",
            Self::VN2 => "vn2",
        }
    }

    /// The short code users type after the `:`.
    pub fn code(&self) -> &'static str {
        REGION_TABLE
            .iter()
            .find(|(_, platform)| platform == self)
            .map(|(code, _)| *code)
            .unwrap_or_else(|| self.as_str())
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BR1 => "Brazil",
            Self::LA1 => "Latin America North",
            Self::LA2 => "Latin America South",
            Self::NA1 => "North America",
            Self::JP1 => "Japan",
            Self::KR => "Korea",
            Self::EUN1 => "EU Nordic & East",
            Self::EUW1 => "EU West",
            Self::ME1 => "Middle East",
            Self::RU => "Russia",
            Self::TR1 => "Turkey",
            Self::OC1 => "Oceania",
            Self::PH2 => "Philippines",
            Self::SG2 => "Singapore",
            Self::TH2 => "Thailand",
            Self::TW2 => "Taiwan",
            Self::VN2 => "Vietnam",
        }
    }
}

impl FromStr for Platform {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s).ok_or_else(|| InputError::InvalidRegion(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(resolve("kr"), Some(Platform::KR));
        assert_eq!(resolve("KR"), Some(Platform::KR));
        assert_eq!(resolve("EuW"), Some(Platform::EUW1));
        assert_eq!(resolve(" eune "), Some(Platform::EUN1));
    }

    #[test]
    fn resolve_rejects_unknown_codes() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("euw1"), None);
        assert_eq!(resolve("mars"), None);
        assert!(matches!(
            "mars".parse::<Platform>(),
            Err(InputError::InvalidRegion(code)) if code == "mars"
        ));
    }

    #[test]
    fn every_code_round_trips_through_its_platform() {
        for code in valid_codes() {
            let platform = resolve(code).unwrap();
            assert_eq!(platform.code(), code);
        }
    }

    #[test]
    fn base_url_uses_platform_host() {
        assert_eq!(Platform::KR.base_url(), "https://kr.api.riotgames.com");
        assert_eq!(Platform::EUW1.base_url(), "https://euw1.api.riotgames.com");
    }
}
