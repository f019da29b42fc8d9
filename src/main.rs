use std::process::ExitCode;
use std::sync::Arc;

use lolprofile::{
    cache::{CacheGateway, CacheStore, MemoryStore, RedisStore},
    config::Config,
    discord::{self, Data},
    error::AppError,
    handler::ProfileHandler,
    logging,
    profile::ProfileFetcher,
    riot::RiotClient,
};
use tracing::{error, info, warn};

/// Missing or invalid configuration.
const EXIT_CONFIG: u8 = 255;
/// The Discord connection was lost.
const EXIT_DISCONNECTED: u8 = 254;

#[tokio::main]
async fn main() -> ExitCode {
    // Loaded first so LOG_DIR and RUST_LOG can come from `.env` as well.
    dotenvy::dotenv().ok();
    logging::init();

    info!("🐙 Starting...");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let mut client = match build_client(&config).await {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Startup failed: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    info!("🌐 [DISCORD] connecting to gateway");
    match client.start().await {
        Ok(()) => error!("❌ [DISCORD] disconnected"),
        Err(e) => error!("❌ [DISCORD] disconnected: {e}"),
    }

    ExitCode::from(EXIT_DISCONNECTED)
}

async fn build_client(config: &Config) -> Result<poise::serenity_prelude::Client, AppError> {
    let mut riot = RiotClient::new(
        config.riot_api_key.clone(),
        config.riot_timeout,
        config.riot_rate_limit_per_second,
    )
    .map_err(|e| AppError::Config(format!("could not build HTTP client: {e}")))?;
    if let Some(base_url) = &config.riot_base_url {
        riot = riot.with_base_url(base_url.clone());
    }

    let store = cache_store(config).await;
    let handler = ProfileHandler::new(
        ProfileFetcher::new(Arc::new(riot)),
        CacheGateway::new(store, config.cache_ttl),
        config.command_prefix,
    );

    discord::build_client(&config.discord_token, Data { handler }).await
}

async fn cache_store(config: &Config) -> Arc<dyn CacheStore> {
    let Some(url) = &config.redis_url else {
        info!("📦 No REDIS_URL set, caching profiles in memory");
        return Arc::new(MemoryStore::new());
    };

    match RedisStore::connect(url).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(error = %e, "📦 Redis unreachable, caching profiles in memory instead");
            Arc::new(MemoryStore::new())
        }
    }
}
