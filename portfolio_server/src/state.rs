use anyhow::Result;
use portfolio_core::{
    discord::client::DiscordClient, github::client::GithubClient, helpers::config::AppConfig,
    leetcode::client::LeetcodeClient,
};
use reqwest::Client;

const USER_AGENT: &str = concat!("portfolio-server/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct ServerState {
    discord: DiscordClient,
    github: GithubClient,
    leetcode: LeetcodeClient,
}

impl From<(DiscordClient, GithubClient, LeetcodeClient)> for ServerState {
    fn from(clients: (DiscordClient, GithubClient, LeetcodeClient)) -> Self {
        let (discord, github, leetcode) = clients;
        Self {
            discord,
            github,
            leetcode,
        }
    }
}

impl ServerState {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self::from((
            DiscordClient::new(http.clone(), config.discord.clone()),
            GithubClient::new(http.clone(), config.github.clone()),
            LeetcodeClient::new(http, config.leetcode.clone()),
        )))
    }

    pub fn discord(&self) -> &DiscordClient {
        &self.discord
    }

    pub fn github(&self) -> &GithubClient {
        &self.github
    }

    pub fn leetcode(&self) -> &LeetcodeClient {
        &self.leetcode
    }
}
