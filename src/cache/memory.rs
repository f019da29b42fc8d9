use std::{
    num::NonZeroUsize,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use super::CacheStore;
use crate::error::CacheError;

/// Profiles kept in process before the least recently used one is evicted.
const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(1_000).unwrap();

/// In-process store used when no Redis instance is configured.
///
/// Bounded: once full, inserting a new key evicts the least recently used one,
/// whether or not it has expired yet.
#[derive(Debug)]
pub struct MemoryStore {
    entries: RwLock<LruCache<String, Entry>>,
}

#[derive(Debug)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        let lookup = entries
            .get(key)
            .map(|entry| (entry.expires_at > now).then(|| entry.value.clone()));

        match lookup {
            Some(Some(value)) => Ok(Some(value)),
            Some(None) => {
                entries.pop(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.put(key.to_string(), entry);

        Ok(())
    }
}
