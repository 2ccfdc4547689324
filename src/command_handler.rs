use crate::aliases::{AddOutcome, AliasStore};
use crate::commands::{CommandParser, MemeCommand};
use crate::config::Config;
use crate::macro_client::{MacroClient, RenderOutcome};
use anyhow::Result;
use log::{error, info};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;
use tokio::sync::RwLock;

const UNKNOWN_MEME_REPLY: &str = "Sorry, I don't know that meme.";
const MACRO_FAILURE_REPLY: &str = "Something went wrong. Is the macro server up?";

/// Routes incoming chat messages to the meme commands.
#[derive(Clone)]
pub struct CommandHandler {
    parser: Arc<CommandParser>,
    aliases: Arc<RwLock<AliasStore>>,
    macro_client: MacroClient,
}

impl CommandHandler {
    pub fn new(config: &Config) -> Self {
        CommandHandler {
            parser: Arc::new(CommandParser::new()),
            aliases: Arc::new(RwLock::new(AliasStore::new())),
            macro_client: MacroClient::new(
                config.macro_server.clone(),
                config.image_host.clone(),
            ),
        }
    }

    pub async fn handle_message(&self, ctx: &Context, msg: &Message) -> Result<()> {
        match self.parser.parse(&msg.content) {
            MemeCommand::Help => self.handle_help(ctx, msg).await,
            MemeCommand::Add { alias, template_id } => {
                self.handle_add(ctx, msg, &alias, &template_id).await
            }
            MemeCommand::Render {
                reference,
                top,
                bottom,
            } => self.handle_render(ctx, msg, &reference, &top, &bottom).await,
            MemeCommand::Unrecognized => Ok(()),
        }
    }

    async fn handle_help(&self, ctx: &Context, msg: &Message) -> Result<()> {
        let text = {
            let store = self.aliases.read().await;
            help_text(&store)
        };

        msg.channel_id.say(&ctx.http, text).await?;
        Ok(())
    }

    async fn handle_add(
        &self,
        ctx: &Context,
        msg: &Message,
        alias: &str,
        template_id: &str,
    ) -> Result<()> {
        let reply = {
            let mut store = self.aliases.write().await;
            match store.add(alias, template_id) {
                AddOutcome::Added => {
                    info!("Alias '{}' registered for template {}", alias, template_id);
                    format!("{} added as {}", template_id, alias)
                }
                AddOutcome::AlreadyKnown => format!("I already know {}", alias),
            }
        };

        msg.channel_id.say(&ctx.http, reply).await?;
        Ok(())
    }

    async fn handle_render(
        &self,
        ctx: &Context,
        msg: &Message,
        reference: &str,
        top: &str,
        bottom: &str,
    ) -> Result<()> {
        let template_id = {
            let store = self.aliases.read().await;
            resolve_template(&store, &self.parser, reference)
        };

        let Some(template_id) = template_id else {
            msg.channel_id.say(&ctx.http, UNKNOWN_MEME_REPLY).await?;
            return Ok(());
        };

        let reply = match self.macro_client.render(&template_id, top, bottom).await {
            Ok(RenderOutcome::Image(token)) => self.macro_client.image_url(&token),
            Ok(RenderOutcome::Empty) => {
                error!("Macro server returned an empty body for template {}", template_id);
                MACRO_FAILURE_REPLY.to_string()
            }
            Err(e) => {
                error!("Macro request failed for template {}: {}", template_id, e);
                MACRO_FAILURE_REPLY.to_string()
            }
        };

        msg.channel_id.say(&ctx.http, reply).await?;
        Ok(())
    }
}

/// Resolve a render reference to a template id: known alias first, then a
/// literal well-formed template id. Anything else is unknown and must not
/// reach the macro server.
fn resolve_template(store: &AliasStore, parser: &CommandParser, reference: &str) -> Option<String> {
    if let Some(id) = store.lookup(reference) {
        return Some(id.to_string());
    }

    if parser.is_template_id(reference) {
        return Some(reference.to_string());
    }

    None
}

/// The help listing: one announcement line, then one line per alias in
/// store order.
fn help_text(store: &AliasStore) -> String {
    let mut text =
        String::from("Available memes ('meme <name> \"<top caption>\" \"<bottom caption>\"'):\n");

    for entry in store.entries() {
        text.push_str(&format!("{}: {}\n", entry.name, entry.description));
    }

    text
}
