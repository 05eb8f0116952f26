use std::{env, time::Duration};

use anyhow::Result;
use log::info;

pub const DEFAULT_SERVER_DOMAIN: &str = "0.0.0.0:3000";
pub const DEFAULT_DISCORD_API_URL: &str = "https://canary.discord.com";
pub const DEFAULT_LANYARD_API_URL: &str = "https://api.lanyard.rest";
pub const DEFAULT_DISCORD_CDN_URL: &str = "https://cdn.discordapp.com";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_LEETCODE_URL: &str = "https://leetcode.com";
pub const DEFAULT_USERNAME: &str = "rishabnotfound";
pub const DEFAULT_PRESENCE_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_DISCORD_TIMEOUT_MS: u64 = 10000;

#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub api_url: String,
    pub lanyard_url: String,
    pub cdn_url: String,
    pub bot_token: String,
    pub presence_timeout: Duration,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub api_url: String,
    pub username: String,
    pub token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LeetcodeConfig {
    pub base_url: String,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_domain: String,
    pub discord: DiscordConfig,
    pub github: GithubConfig,
    pub leetcode: LeetcodeConfig,
}

impl AppConfig {
    /// Reads the configuration from the process environment. `.env` files are
    /// expected to be loaded by the caller beforehand.
    pub fn from_env() -> Result<Self> {
        let presence_timeout = millis_or("PRESENCE_TIMEOUT_MS", DEFAULT_PRESENCE_TIMEOUT_MS)?;
        let request_timeout = millis_or("DISCORD_TIMEOUT_MS", DEFAULT_DISCORD_TIMEOUT_MS)?;

        let bot_token = env::var("DISCORD_BOT_TOKEN").unwrap_or_else(|_| {
            info!("DISCORD_BOT_TOKEN not set, profile requests will be unauthenticated");
            String::new()
        });

        Ok(Self {
            server_domain: var_or("SERVER_DOMAIN", DEFAULT_SERVER_DOMAIN),
            discord: DiscordConfig {
                api_url: var_or("DISCORD_API_URL", DEFAULT_DISCORD_API_URL),
                lanyard_url: var_or("LANYARD_API_URL", DEFAULT_LANYARD_API_URL),
                cdn_url: var_or("DISCORD_CDN_URL", DEFAULT_DISCORD_CDN_URL),
                bot_token,
                presence_timeout,
                request_timeout,
            },
            github: GithubConfig {
                api_url: var_or("GITHUB_API_URL", DEFAULT_GITHUB_API_URL),
                username: var_or("GITHUB_USERNAME", DEFAULT_USERNAME),
                token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            },
            leetcode: LeetcodeConfig {
                base_url: var_or("LEETCODE_URL", DEFAULT_LEETCODE_URL),
                username: var_or("LEETCODE_USERNAME", DEFAULT_USERNAME),
            },
        })
    }
}

impl DiscordConfig {
    pub fn new(api_url: &str, lanyard_url: &str, bot_token: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            lanyard_url: lanyard_url.trim_end_matches('/').to_string(),
            cdn_url: DEFAULT_DISCORD_CDN_URL.to_string(),
            bot_token: bot_token.to_string(),
            presence_timeout: Duration::from_millis(DEFAULT_PRESENCE_TIMEOUT_MS),
            request_timeout: Duration::from_millis(DEFAULT_DISCORD_TIMEOUT_MS),
        }
    }
}

fn millis_or(key: &str, default: u64) -> Result<Duration> {
    let millis = match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("{} is not a valid number: {}", key, e))?,
        Err(_) => default,
    };

    Ok(Duration::from_millis(millis))
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| default.to_string())
}
