//! Live Discord gateway feed
//!
//! Connects to the Discord gateway through serenity and forwards every
//! accepted message to a [`Dispatcher`].

use async_trait::async_trait;
use keyword_notifier::{Dispatcher, DomainError, IncomingMessage};
use serenity::client::{Client, Context, EventHandler};
use serenity::model::channel::Message as SerenityMessage;
use serenity::model::gateway::{GatewayIntents, Ready};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::DiscordConfig;

/// Discord gateway connection feeding a dispatcher
pub struct DiscordGateway {
    config: DiscordConfig,
    dispatcher: Arc<Dispatcher>,
}

impl DiscordGateway {
    pub fn new(config: DiscordConfig) -> Self {
        Self {
            config,
            dispatcher: Arc::new(Dispatcher::new()),
        }
    }

    /// Event source that watchers subscribe to
    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }

    /// Run the gateway until `shutdown` resolves or the connection fails
    pub async fn run<F>(&self, shutdown: F) -> Result<(), DomainError>
    where
        F: Future<Output = ()> + Send,
    {
        let intents = GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT;

        let handler = GatewayHandler {
            config: self.config.clone(),
            dispatcher: Arc::clone(&self.dispatcher),
        };

        let mut client = Client::builder(&self.config.token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| DomainError::ExternalService(format!("Discord client error: {}", e)))?;

        let shard_manager = Arc::clone(&client.shard_manager);

        tokio::select! {
            result = client.start() => {
                result.map_err(|e| DomainError::ExternalService(format!("Discord gateway error: {}", e)))
            }
            _ = shutdown => {
                info!("Shutting down Discord gateway");
                shard_manager.shutdown_all().await;
                Ok(())
            }
        }
    }
}

/// serenity event handler forwarding messages to the dispatcher
struct GatewayHandler {
    config: DiscordConfig,
    dispatcher: Arc<Dispatcher>,
}

impl GatewayHandler {
    /// Convert serenity Message to domain message
    fn convert_message(msg: &SerenityMessage) -> IncomingMessage {
        IncomingMessage {
            id: Some(msg.id.to_string()),
            content: Some(msg.content.clone()),
            guild_id: msg.guild_id.map(|g| g.to_string()),
            channel_id: Some(msg.channel_id.to_string()),
            author_name: Some(msg.author.name.clone()),
        }
    }
}

#[async_trait]
impl EventHandler for GatewayHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, guilds = ready.guilds.len(), "Connected to Discord gateway");
    }

    async fn message(&self, _ctx: Context, msg: SerenityMessage) {
        let is_dm = msg.guild_id.is_none();
        if !self.config.accepts(msg.author.bot, is_dm) {
            debug!(message_id = %msg.id, "Skipping Discord message");
            return;
        }

        self.dispatcher.dispatch(&Self::convert_message(&msg));
    }
}
