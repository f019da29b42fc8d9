use std::time::Duration;

use async_trait::async_trait;
use fred::clients::Pool;
use fred::prelude::*;
use fred::types::{Builder, Expiration};
use tracing::info;

use super::CacheStore;
use crate::error::CacheError;

const POOL_SIZE: usize = 2;

/// Redis backed store; expiry is enforced by Redis itself.
pub struct RedisStore {
    pool: Pool,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> Result<Self, CacheError> {
        let config = Config::from_url(redis_url).map_err(unavailable)?;

        let pool = Builder::from_config(config)
            .with_connection_config(|cfg| {
                cfg.connection_timeout = Duration::from_secs(5);
                cfg.internal_command_timeout = Duration::from_secs(2);
                cfg.max_command_attempts = 1;
            })
            .set_policy(ReconnectPolicy::new_exponential(0, 100, 5_000, 2))
            .build_pool(POOL_SIZE)
            .map_err(unavailable)?;

        pool.init().await.map_err(unavailable)?;
        info!("📦 Connected to Redis");

        Ok(Self { pool })
    }

    /// Redis refuses a zero expiry, so anything shorter than a millisecond
    /// becomes one.
    fn expiration(ttl: Duration) -> Expiration {
        if ttl < Duration::from_secs(1) {
            Expiration::PX(i64::try_from(ttl.as_millis().max(1)).unwrap_or(i64::MAX))
        } else {
            Expiration::EX(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX))
        }
    }
}

fn unavailable(err: impl std::fmt::Display) -> CacheError {
    CacheError::Unavailable(err.to_string())
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.pool
            .get::<Option<String>, _>(key)
            .await
            .map_err(unavailable)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        self.pool
            .set::<(), _, _>(key, value, Some(Self::expiration(ttl)), None, false)
            .await
            .map_err(unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_second_ttl_uses_milliseconds() {
        assert!(matches!(
            RedisStore::expiration(Duration::from_millis(250)),
            Expiration::PX(250)
        ));
        assert!(matches!(
            RedisStore::expiration(Duration::from_secs(600)),
            Expiration::EX(600)
        ));
    }

    #[test]
    fn zero_ttl_never_produces_zero_expiry() {
        assert!(matches!(
            RedisStore::expiration(Duration::ZERO),
            Expiration::PX(1)
        ));
        assert!(matches!(
            RedisStore::expiration(Duration::from_secs(u64::MAX)),
            Expiration::EX(i64::MAX)
        ));
    }

    #[tokio::test]
    #[ignore = "Redis instance required"]
    async fn set_then_get_round_trips() {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into());
        let store = RedisStore::connect(&url).await.unwrap();

        store
            .set("profile:test:euw", "value", Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(
            store.get("profile:test:euw").await.unwrap(),
            Some("value".to_string())
        );
    }
}
