use poise::serenity_prelude as serenity;
use tracing::error;

use super::handler::event_handler;
use crate::error::AppError;
use crate::handler::ProfileHandler;

/// Shared data accessible in every event
#[derive(Debug)]
pub struct Data {
    pub handler: ProfileHandler,
}

fn create_framework(data: Data) -> poise::Framework<Data, AppError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            on_error: |error| {
                Box::pin(async move {
                    handle_error(error).await;
                })
            },
            ..Default::default()
        })
        .setup(|_ctx, _ready, _framework| Box::pin(async move { Ok(data) }))
        .build()
}

/// Build the gateway client. Message content is needed to read prefix commands.
pub async fn build_client(token: &str, data: Data) -> Result<serenity::Client, AppError> {
    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let client = serenity::ClientBuilder::new(token, intents)
        .framework(create_framework(data))
        .await?;

    Ok(client)
}

async fn handle_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!(
                error = %error,
                event = event.snake_case_name(),
                "🎮 ❌ Event handling failed"
            );
        }
        other => {
            error!(error = ?other, "🎮 ❌ Unhandled framework error");
        }
    }
}
