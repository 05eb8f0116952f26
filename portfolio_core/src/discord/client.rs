use log::{debug, warn};
use reqwest::{header::AUTHORIZATION, Client};
use serde_json::Value;

use super::{
    dto::{DiscordUser, LanyardDiscordUser, LanyardResponse, NormalizedProfile, Presence},
    error::ProfileError,
    normalize::{normalize_profile, CdnUrls},
    snowflake::Snowflake,
};
use crate::helpers::config::DiscordConfig;

/// Presence snapshot together with the identity fields it mirrors.
#[derive(Debug, Clone)]
pub struct LiveSnapshot {
    pub presence: Presence,
    pub identity: Option<LanyardDiscordUser>,
}

#[derive(Debug, Clone)]
pub struct DiscordClient {
    http: Client,
    config: DiscordConfig,
    cdn: CdnUrls,
}

impl DiscordClient {
    pub fn new(http: Client, config: DiscordConfig) -> Self {
        let cdn = CdnUrls::new(&config.cdn_url);
        Self { http, config, cdn }
    }

    /// Validates `id`, fetches both sources concurrently and merges them.
    pub async fn profile(&self, id: &str) -> Result<NormalizedProfile, ProfileError> {
        let snowflake = Snowflake::parse(id)?;

        let (user, live) = tokio::join!(self.fetch_user(&snowflake), self.fetch_presence(&snowflake));
        let user = user?;

        let (presence, identity) = match live {
            Some(snapshot) => (Some(snapshot.presence), snapshot.identity),
            None => (None, None),
        };

        Ok(normalize_profile(
            user,
            presence,
            identity,
            &snowflake,
            &self.cdn,
        ))
    }

    pub async fn fetch_user(&self, id: &Snowflake) -> Result<DiscordUser, ProfileError> {
        let response = self
            .http
            .get(format!("{}/api/v10/users/{}", self.config.api_url, id))
            .header(AUTHORIZATION, format!("Bot {}", self.config.bot_token))
            .timeout(self.config.request_timeout)
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() || body.get("message").is_some() {
            warn!("Discord API rejected user {}: {} {}", id, status, body);
            return Err(ProfileError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_value(body)?)
    }

    /// Any failure here means "no presence" and is never propagated.
    pub async fn fetch_presence(&self, id: &Snowflake) -> Option<LiveSnapshot> {
        match self.try_fetch_presence(id).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!("Could not fetch presence for {}: {}", id, e);
                None
            }
        }
    }

    async fn try_fetch_presence(&self, id: &Snowflake) -> Result<Option<LiveSnapshot>, ProfileError> {
        let response = self
            .http
            .get(format!("{}/v1/users/{}", self.config.lanyard_url, id))
            .timeout(self.config.presence_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            debug!("Lanyard returned {} for {}", response.status(), id);
            return Ok(None);
        }

        let envelope: LanyardResponse = response.json().await?;

        let data = match envelope.data {
            Some(data) if envelope.success => data,
            _ => return Ok(None),
        };

        let identity = data.discord_user.clone();

        Ok(Some(LiveSnapshot {
            presence: Presence::from(data),
            identity,
        }))
    }
}
