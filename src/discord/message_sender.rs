//! Discord implementation of the reply seam used by the command handler.

use std::sync::Arc;

use async_trait::async_trait;
use poise::serenity_prelude::{self as serenity, ChannelId};

use crate::handler::ReplySink;

#[async_trait]
impl ReplySink for Arc<serenity::Http> {
    async fn send_reply(&self, channel_id: u64, message: &str) -> serenity::Result<()> {
        ChannelId::new(channel_id)
            .say(self, message)
            .await
            .map(|_| ())
    }
}
