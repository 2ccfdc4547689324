use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Historical upstream endpoints; overridable through the environment.
pub const DEFAULT_MACRO_SERVER: &str = "http://macro.uncod.in";
pub const DEFAULT_IMAGE_HOST: &str = "http://img.uncod.in";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub discord_token: String,
    pub macro_server: String,
    pub image_host: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            discord_token: env::var("DISCORD_TOKEN")
                .map_err(|_| anyhow::anyhow!("DISCORD_TOKEN environment variable not set"))?,
            macro_server: env::var("MACRO_SERVER")
                .unwrap_or_else(|_| DEFAULT_MACRO_SERVER.to_string()),
            image_host: env::var("IMAGE_HOST").unwrap_or_else(|_| DEFAULT_IMAGE_HOST.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
