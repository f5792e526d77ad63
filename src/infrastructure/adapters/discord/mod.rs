//! Discord adapter
//!
//! Connection, reconnects and scheduling belong to serenity; this adapter
//! only forwards the ready and message events to the log.

use async_trait::async_trait;
use serenity::client::{Client, Context, EventHandler};
use serenity::gateway::GatewayError;
use serenity::model::channel::Message as DiscordMessage;
use serenity::model::gateway::{GatewayIntents, Ready};

use crate::application::errors::BotError;
use crate::application::services::MessageService;
use crate::domain::entities::{Message, User};
use crate::domain::traits::{Bot, BotInfo};

/// Discord bot adapter
pub struct DiscordAdapter {
    token: String,
    info: BotInfo,
}

impl DiscordAdapter {
    pub fn new(token: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            info: BotInfo {
                name: name.into(),
                platform: "discord".to_string(),
            },
        }
    }

    /// Default intents plus message content, so message text is delivered
    pub fn intents() -> GatewayIntents {
        GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT
    }
}

/// Serenity event handler
struct Handler {
    events: MessageService,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        self.events.on_ready(&ready.user.name);
    }

    async fn message(&self, _ctx: Context, msg: DiscordMessage) {
        self.events.on_message(&to_message(&msg));
    }
}

fn to_message(msg: &DiscordMessage) -> Message {
    let mut author = User::new(msg.author.id.to_string()).with_username(msg.author.name.clone());
    if msg.author.bot {
        author = author.as_bot();
    }

    Message::from_text(msg.channel_id.to_string(), msg.content.clone())
        .with_id(msg.id.to_string())
        .with_sender(author)
        .with_platform("discord")
}

fn map_error(e: serenity::Error) -> BotError {
    match e {
        serenity::Error::Gateway(GatewayError::InvalidAuthentication) => {
            BotError::Auth("Discord rejected the bot token".to_string())
        }
        other => BotError::Network(other.to_string()),
    }
}

#[async_trait]
impl Bot for DiscordAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Connecting to Discord as {}", self.info.name);

        let handler = Handler {
            events: MessageService::new("discord"),
        };
        let mut client = Client::builder(&self.token, Self::intents())
            .event_handler(handler)
            .await
            .map_err(map_error)?;

        client.start().await.map_err(map_error)
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
