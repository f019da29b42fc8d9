//! Per-message orchestration of the `!lolprofile` command.

use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use tracing::{debug, error, info, instrument, warn};

use crate::cache::{CacheGateway, cache_key};
use crate::command::{self, Command, ProfileQuery};
use crate::error::FetchError;
use crate::profile::{CachedProfile, FullProfile, ProfileFetcher, format};

/// An incoming chat message, stripped of everything the handler does not need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author_id: u64,
    pub channel_id: u64,
    pub text: String,
}

/// Where replies go.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_reply(&self, channel_id: u64, message: &str) -> serenity::Result<()>;
}

/// Outcome of one command: the text to send back, plus the profile to cache
/// once the reply is out when it was freshly fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    write_back: Option<(String, CachedProfile)>,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            write_back: None,
        }
    }
}

/// Holds no per-message state, so concurrent messages can share one handler.
#[derive(Debug, Clone)]
pub struct ProfileHandler {
    fetcher: ProfileFetcher,
    cache: CacheGateway,
    prefix: char,
}

impl ProfileHandler {
    pub fn new(fetcher: ProfileFetcher, cache: CacheGateway, prefix: char) -> Self {
        Self {
            fetcher,
            cache,
            prefix,
        }
    }

    /// Handle one chat message, sending at most one reply.
    #[instrument(
        skip(self, message, sink),
        fields(channel_id = message.channel_id, author_id = message.author_id)
    )]
    pub async fn handle_message(&self, message: &ChatMessage, sink: &dyn ReplySink) {
        let Some(reply) = self.respond(&message.text).await else {
            return;
        };

        if let Err(e) = sink.send_reply(message.channel_id, &reply.text).await {
            error!(error = %e, "🎮 ❌ Failed to send reply");
        }

        if let Some((key, profile)) = reply.write_back {
            self.cache.set(&key, &profile).await;
        }
    }

    /// Compute the reply for `text`, or `None` when the message is not for us.
    pub async fn respond(&self, text: &str) -> Option<Reply> {
        let Command::Profile { argument } = command::parse(text, self.prefix)?;
        info!(argument, "🛠️ [CMD] !{} invoked", command::PROFILE_VERB);

        let query = match ProfileQuery::parse(argument) {
            Ok(query) => query,
            Err(e) => {
                debug!(error = ?e, "Rejected command input");
                return Some(Reply::text(e.to_string()));
            }
        };

        let key = cache_key(&query.name, query.platform);
        if let Some(cached) = self.cache.get(&key).await {
            debug!(key = %key, "Cache hit");
            return Some(Reply::text(format(&FullProfile::from(cached))));
        }
        debug!(key = %key, "Cache miss");

        match self.fetcher.fetch(&query.name, query.platform).await {
            Ok(profile) => Some(Reply {
                text: format(&profile),
                write_back: Some((key, CachedProfile::from(&profile))),
            }),
            Err(e) => {
                log_fetch_error(&query, &e);
                Some(Reply::text(e.user_message()))
            }
        }
    }
}

fn log_fetch_error(query: &ProfileQuery, err: &FetchError) {
    let region = query.platform.display_name();
    match err {
        FetchError::NotFound => {
            debug!(name = %query.raw_name, region, "Summoner not found")
        }
        FetchError::RateLimited => {
            warn!(name = %query.raw_name, region, "🛰️ Riot API rate limit hit")
        }
        FetchError::Upstream(reason) => {
            error!(name = %query.raw_name, region, reason = %reason, "🛰️ ❌ Riot API lookup failed")
        }
    }
}
