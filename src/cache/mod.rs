//! Time-boxed storage of looked up profiles.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::CacheError;
use crate::profile::CachedProfile;
use crate::riot::Platform;

mod memory;
mod redis;

pub use memory::MemoryStore;
pub use redis::RedisStore;

/// A key-value store with per-key expiry.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
}

/// `profile:{normalized name}:{region code}`
pub fn cache_key(normalized_name: &str, platform: Platform) -> String {
    format!("profile:{}:{}", normalized_name, platform.code())
}

/// Typed access to the injected [`CacheStore`].
///
/// Store failures never reach the caller: a failed read is a miss and a
/// failed write is dropped, both logged.
#[derive(Clone)]
pub struct CacheGateway {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl CacheGateway {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub async fn get(&self, key: &str) -> Option<CachedProfile> {
        match self.try_get(key).await {
            Ok(hit) => hit,
            Err(e) => {
                warn!(key, error = %e, "Cache read failed, treating as miss");
                None
            }
        }
    }

    pub async fn set(&self, key: &str, profile: &CachedProfile) {
        match self.try_set(key, profile).await {
            Ok(()) => debug!(key, ttl_secs = self.ttl.as_secs(), "Profile cached"),
            Err(e) => warn!(key, error = %e, "Cache write failed, skipping"),
        }
    }

    async fn try_get(&self, key: &str) -> Result<Option<CachedProfile>, CacheError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn try_set(&self, key: &str, profile: &CachedProfile) -> Result<(), CacheError> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(key, &raw, self.ttl).await
    }
}

impl std::fmt::Debug for CacheGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheGateway")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
