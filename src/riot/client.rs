use std::{fmt, num::NonZeroU32, time::Duration};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::region::Platform;
use super::types::{RiotApiError, RiotApiResponse};

pub struct RiotClient {
    client: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    /// Riot API Key
    key: String,
    /// Replaces the per-platform host when set.
    base_url: Option<String>,
}

impl RiotClient {
    pub fn new(
        key: String,
        timeout: Duration,
        rate_limit_per_second: NonZeroU32,
    ) -> Result<Self, reqwest::Error> {
        let quota = Quota::per_second(rate_limit_per_second).allow_burst(rate_limit_per_second);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            limiter: RateLimiter::direct(quota),
            key,
            base_url: None,
        })
    }

    /// Send every request to `base_url` instead of the Riot platform hosts.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    pub(super) fn platform_url(&self, platform: Platform) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => platform.base_url(),
        }
    }

    /// GET `url` and decode a JSON body. Anything other than a 200 is an error.
    pub(super) async fn get<T: DeserializeOwned>(&self, url: &str) -> RiotApiResponse<T> {
        if self.limiter.check().is_err() {
            tracing::warn!("[RIOT::CLIENT] local quota exhausted, skipping request");
            return Err(RiotApiError::LocalRateLimit);
        }

        tracing::trace!("[RIOT::CLIENT] GET {}", url);

        let res = self
            .client
            .get(url)
            .query(&[("api_key", self.key.as_str())])
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => Err(RiotApiError::Status(status)),
        }
    }
}

impl fmt::Debug for RiotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiotClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
