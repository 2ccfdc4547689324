use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use memebot::command_handler::CommandHandler;
use memebot::config::Config;

struct Handler {
    command_handler: Arc<CommandHandler>,
}

impl Handler {
    fn new(command_handler: CommandHandler) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        if let Err(e) = self.command_handler.handle_message(&ctx, &msg).await {
            error!("Error handling message: {}", e);
            if let Err(why) = msg
                .channel_id
                .say(&ctx.http, "Sorry, I encountered an error processing your message.")
                .await
            {
                error!("Failed to send error message: {}", why);
            }
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected and ready!", ready.user.name);
        info!("Connected to {} guilds", ready.guilds.len());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting meme bot...");
    info!("Macro server: {}", config.macro_server);
    info!("Image host: {}", config.image_host);

    let handler = Handler::new(CommandHandler::new(&config));

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {}", e);
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {:?}", why);
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
