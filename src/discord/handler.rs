use poise::serenity_prelude as serenity;
use tracing::{debug, info};

use super::bot::Data;
use crate::error::AppError;
use crate::handler::ChatMessage;

pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, AppError>,
    data: &Data,
) -> Result<(), AppError> {
    match event {
        serenity::FullEvent::Ready { data_about_bot, .. } => {
            info!(
                "🤖 [DISCORD] connected as {} ({})",
                data_about_bot.user.name, data_about_bot.user.id
            );
            ctx.set_activity(Some(serenity::ActivityData::playing("League of Legends")));
        }
        serenity::FullEvent::Message { new_message } => {
            if new_message.author.bot {
                debug!(author_id = %new_message.author.id, "Ignoring bot message");
                return Ok(());
            }

            let message = ChatMessage {
                author_id: new_message.author.id.get(),
                channel_id: new_message.channel_id.get(),
                text: new_message.content.clone(),
            };
            data.handler.handle_message(&message, &ctx.http).await;
        }
        _ => {}
    }

    Ok(())
}
