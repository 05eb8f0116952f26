use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// User record returned by `GET /api/v10/users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    #[serde(default)]
    pub username: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
    pub banner: Option<String>,
    pub banner_color: Option<String>,
    pub accent_color: Option<u32>,
    pub avatar_decoration_data: Option<AvatarDecorationData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_flags: u64,
    pub premium_type: Option<u64>,
    pub clan: Option<GuildTag>,
    pub primary_guild: Option<GuildTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarDecorationData {
    pub asset: String,
    pub sku_id: Option<String>,
}

/// Clan or primary guild tag. Unknown upstream fields are carried through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildTag {
    pub identity_guild_id: Option<String>,
    pub identity_enabled: Option<bool>,
    pub tag: Option<String>,
    pub badge: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope of `GET /v1/users/{id}` on Lanyard.
#[derive(Debug, Deserialize)]
pub struct LanyardResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<LanyardData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanyardData {
    pub discord_status: PresenceStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<Activity>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_on_discord_web: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_on_discord_desktop: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_on_discord_mobile: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_on_discord_embedded: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub listening_to_spotify: bool,
    pub spotify: Option<Spotify>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kv: Map<String, Value>,
    pub discord_user: Option<LanyardDiscordUser>,
}

/// The identity fields Lanyard mirrors from the gateway.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanyardDiscordUser {
    pub clan: Option<GuildTag>,
    pub primary_guild: Option<GuildTag>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Idle,
    Dnd,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Playing,
    Streaming,
    Listening,
    Watching,
    Custom,
    Competing,
}

impl ActivityType {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Playing),
            1 => Some(Self::Streaming),
            2 => Some(Self::Listening),
            3 => Some(Self::Watching),
            4 => Some(Self::Custom),
            5 => Some(Self::Competing),
            _ => None,
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Playing => "Playing",
            Self::Streaming => "Streaming",
            Self::Listening => "Listening",
            Self::Watching => "Watching",
            Self::Custom => "Custom",
            Self::Competing => "Competing",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub state: Option<String>,
    pub details: Option<String>,
    pub application_id: Option<String>,
    pub timestamps: Option<ActivityTimestamps>,
    pub assets: Option<ActivityAssets>,
    pub created_at: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Activity {
    pub fn activity_type(&self) -> Option<ActivityType> {
        ActivityType::from_code(self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTimestamps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityAssets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spotify {
    pub track_id: Option<String>,
    pub timestamps: Option<ActivityTimestamps>,
    pub album: Option<String>,
    pub album_art_url: Option<String>,
    pub artist: Option<String>,
    pub song: Option<String>,
}

/// Live presence as returned to the caller, activities already deduplicated.
#[derive(Debug, Clone, Serialize)]
pub struct Presence {
    pub discord_status: PresenceStatus,
    pub activities: Vec<Activity>,
    pub active_on_discord_web: bool,
    pub active_on_discord_desktop: bool,
    pub active_on_discord_mobile: bool,
    pub active_on_discord_embedded: bool,
    pub listening_to_spotify: bool,
    pub spotify: Option<Spotify>,
    pub kv: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AvatarLink {
    pub id: Option<String>,
    pub link: Option<String>,
    pub is_animated: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BannerLink {
    pub id: Option<String>,
    pub link: Option<String>,
    pub is_animated: bool,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DecorationLink {
    pub id: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedTag {
    #[serde(flatten)]
    pub tag: GuildTag,
    pub badge_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NormalizedProfile {
    pub id: String,
    #[serde(serialize_with = "serialize_millis")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub avatar: AvatarLink,
    pub banner: BannerLink,
    pub avatar_decoration: Option<DecorationLink>,
    pub badges: Vec<String>,
    pub premium_type: String,
    pub accent_color: Option<u32>,
    pub global_name: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub clan: Option<ResolvedTag>,
    #[schema(value_type = Option<Object>)]
    pub primary_guild: Option<ResolvedTag>,
    #[schema(value_type = Option<Object>)]
    pub presence: Option<Presence>,
}

fn serialize_millis<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
