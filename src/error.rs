use reqwest::StatusCode;
use thiserror::Error;

use crate::riot::{region, types::RiotApiError};

/// Errors that can stop the bot from starting or keep it from running.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Discord error: {0}")]
    Discord(Box<serenity::Error>),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}

/// A malformed `!lolprofile` invocation.
///
/// The display text of each variant is sent back to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please tell me who to look up, e.g. `!lolprofile Faker:kr`.")]
    MissingArgument,

    #[error("Missing info! Use the format `name:region`, e.g. `Faker:kr`.")]
    MissingInfo,

    #[error(
        "Invalid region `{0}`. Valid regions are: {valid}.",
        valid = region::valid_codes().join(", ")
    )]
    InvalidRegion(String),
}

/// Failure of the summoner or league lookup.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("summoner not found")]
    NotFound,

    #[error("rate limited")]
    RateLimited,

    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl FetchError {
    pub const NOT_FOUND_MESSAGE: &'static str = "Summoner not found.";
    pub const RATE_LIMITED_MESSAGE: &'static str =
        "The League of Legends API is busy right now, please try again later.";
    pub const UPSTREAM_MESSAGE: &'static str =
        "Something went wrong while looking up that summoner, please try again.";

    /// Reply text shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound => Self::NOT_FOUND_MESSAGE,
            Self::RateLimited => Self::RATE_LIMITED_MESSAGE,
            Self::Upstream(_) => Self::UPSTREAM_MESSAGE,
        }
    }
}

impl From<RiotApiError> for FetchError {
    fn from(err: RiotApiError) -> Self {
        match err {
            RiotApiError::Status(StatusCode::NOT_FOUND) => Self::NotFound,
            RiotApiError::Status(StatusCode::TOO_MANY_REQUESTS) | RiotApiError::LocalRateLimit => {
                Self::RateLimited
            }
            other => Self::Upstream(other.to_string()),
        }
    }
}

/// Cache store failures. Never shown to users.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache store unavailable: {0}")]
    Unavailable(String),

    #[error("cached value could not be decoded: {0}")]
    Corrupt(#[from] serde_json::Error),
}
