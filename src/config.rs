use std::num::NonZeroU32;
use std::time::Duration;

use clap::Parser;

use crate::error::AppError;

const DEFAULT_CACHE_TTL_SECS: u64 = 600;
const DEFAULT_RIOT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RIOT_RATE_LIMIT_PER_SECOND: u32 = 20;

/// Command line flags, each falling back to an environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "lolprofile")]
#[command(about = "Discord bot answering `!lolprofile name:region` with a summoner's ranked profile")]
#[command(version)]
pub struct Args {
    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub discord_token: Option<String>,

    /// Riot API key
    #[arg(long = "riot-key", env = "RIOT_API_KEY", hide_env_values = true)]
    pub riot_api_key: Option<String>,

    /// Redis connection URL; profiles are cached in memory when absent
    #[arg(long, env = "REDIS_URL")]
    pub redis_url: Option<String>,

    /// Character that starts a command
    #[arg(long = "prefix", env = "COMMAND_PREFIX", default_value_t = '!')]
    pub command_prefix: char,

    /// How long a looked up profile is served from the cache
    #[arg(long, env = "CACHE_TTL_SECS", default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_ttl_secs: u64,

    /// Timeout applied to every Riot API request
    #[arg(long, env = "RIOT_TIMEOUT_SECS", default_value_t = DEFAULT_RIOT_TIMEOUT_SECS)]
    pub riot_timeout_secs: u64,

    /// Riot API requests allowed per second before lookups are refused locally
    #[arg(long, env = "RIOT_RATE_LIMIT_PER_SECOND", default_value_t = DEFAULT_RIOT_RATE_LIMIT_PER_SECOND)]
    pub riot_rate_limit_per_second: u32,

    /// Send Riot API requests to this host instead of the regional ones
    #[arg(long, env = "RIOT_BASE_URL")]
    pub riot_base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub riot_api_key: String,
    pub redis_url: Option<String>,
    pub command_prefix: char,
    pub cache_ttl: Duration,
    pub riot_timeout: Duration,
    pub riot_rate_limit_per_second: NonZeroU32,
    pub riot_base_url: Option<String>,
}

impl Config {
    /// Parse the process arguments and environment.
    ///
    /// `.env` is expected to be loaded already.
    pub fn load() -> Result<Self, AppError> {
        Self::try_from(Args::parse())
    }
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let discord_token = non_empty(args.discord_token)
            .ok_or_else(|| AppError::Config("DISCORD_TOKEN must be set".into()))?;

        let riot_api_key = non_empty(args.riot_api_key)
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let riot_rate_limit_per_second = NonZeroU32::new(args.riot_rate_limit_per_second)
            .ok_or_else(|| AppError::Config("RIOT_RATE_LIMIT_PER_SECOND must not be 0".into()))?;

        if args.cache_ttl_secs == 0 {
            return Err(AppError::Config("CACHE_TTL_SECS must not be 0".into()));
        }

        if args.command_prefix.is_whitespace() {
            return Err(AppError::Config(
                "COMMAND_PREFIX must not be whitespace".into(),
            ));
        }

        Ok(Self {
            discord_token,
            riot_api_key,
            redis_url: non_empty(args.redis_url),
            command_prefix: args.command_prefix,
            cache_ttl: Duration::from_secs(args.cache_ttl_secs),
            riot_timeout: Duration::from_secs(args.riot_timeout_secs),
            riot_rate_limit_per_second,
            riot_base_url: non_empty(args.riot_base_url),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            discord_token: Some("discord".into()),
            riot_api_key: Some("RGAPI-test".into()),
            redis_url: None,
            command_prefix: '!',
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            riot_timeout_secs: DEFAULT_RIOT_TIMEOUT_SECS,
            riot_rate_limit_per_second: DEFAULT_RIOT_RATE_LIMIT_PER_SECOND,
            riot_base_url: None,
        }
    }

    #[test]
    fn flags_are_parsed() {
        let args = Args::try_parse_from([
            "lolprofile",
            "--discord-token",
            "discord",
            "--riot-key",
            "RGAPI-test",
            "--prefix",
            "?",
            "--cache-ttl-secs",
            "60",
        ])
        .unwrap();

        let config = Config::try_from(args).unwrap();

        assert_eq!(config.discord_token, "discord");
        assert_eq!(config.riot_api_key, "RGAPI-test");
        assert_eq!(config.command_prefix, '?');
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn defaults_match_ten_minute_cache() {
        let config = Config::try_from(args()).unwrap();

        assert_eq!(config.cache_ttl, Duration::from_secs(600));
        assert_eq!(config.riot_timeout, Duration::from_secs(10));
        assert_eq!(config.riot_rate_limit_per_second.get(), 20);
        assert!(config.redis_url.is_none());
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let mut no_discord = args();
        no_discord.discord_token = None;
        assert!(matches!(
            Config::try_from(no_discord),
            Err(AppError::Config(msg)) if msg.contains("DISCORD_TOKEN")
        ));

        let mut blank_riot = args();
        blank_riot.riot_api_key = Some("   ".into());
        assert!(matches!(
            Config::try_from(blank_riot),
            Err(AppError::Config(msg)) if msg.contains("RIOT_API_KEY")
        ));
    }

    #[test]
    fn zero_rate_limit_is_rejected() {
        let mut args = args();
        args.riot_rate_limit_per_second = 0;

        assert!(matches!(Config::try_from(args), Err(AppError::Config(_))));
    }

    #[test]
    fn zero_cache_ttl_is_rejected() {
        let mut args = args();
        args.cache_ttl_secs = 0;

        assert!(matches!(
            Config::try_from(args),
            Err(AppError::Config(msg)) if msg.contains("CACHE_TTL_SECS")
        ));
    }
}
