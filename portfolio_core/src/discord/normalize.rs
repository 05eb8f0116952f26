use super::{
    dto::{
        AvatarLink, BannerLink, DecorationLink, DiscordUser, GuildTag, LanyardDiscordUser,
        NormalizedProfile, Presence, ResolvedTag,
    },
    flags::{decode_badges, premium_label},
    snowflake::Snowflake,
};

const ANIMATED_PREFIX: &str = "a_";
const BANNER_SIZE: u32 = 480;

/// Builds CDN links for Discord assets.
#[derive(Debug, Clone)]
pub struct CdnUrls {
    base: String,
}

impl CdnUrls {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn avatar(&self, user_id: &str, avatar: &str) -> String {
        format!("{}/avatars/{}/{}", self.base, user_id, avatar)
    }

    pub fn banner(&self, user_id: &str, banner: &str) -> String {
        format!(
            "{}/banners/{}/{}?size={}",
            self.base, user_id, banner, BANNER_SIZE
        )
    }

    pub fn avatar_decoration(&self, asset: &str) -> String {
        format!("{}/avatar-decoration-presets/{}.png", self.base, asset)
    }

    pub fn clan_badge(&self, guild_id: &str, badge: &str) -> String {
        format!("{}/clan-badges/{}/{}.png", self.base, guild_id, badge)
    }
}

pub fn is_animated(asset: Option<&str>) -> bool {
    asset.is_some_and(|hash| hash.starts_with(ANIMATED_PREFIX))
}

/// Merges the static profile record with the live presence snapshot.
///
/// `fallback_id` is the identifier the profile was requested with; it is used
/// for the creation date if the returned record's id does not parse.
pub fn normalize_profile(
    user: DiscordUser,
    presence: Option<Presence>,
    live_identity: Option<LanyardDiscordUser>,
    fallback_id: &Snowflake,
    cdn: &CdnUrls,
) -> NormalizedProfile {
    let created_at = Snowflake::parse(&user.id)
        .map(|snowflake| snowflake.created_at())
        .unwrap_or_else(|_| fallback_id.created_at());

    let avatar = AvatarLink {
        link: user.avatar.as_deref().map(|a| cdn.avatar(&user.id, a)),
        is_animated: is_animated(user.avatar.as_deref()),
        id: user.avatar,
    };

    let banner = BannerLink {
        link: user.banner.as_deref().map(|b| cdn.banner(&user.id, b)),
        is_animated: is_animated(user.banner.as_deref()),
        id: user.banner,
        color: user.banner_color,
    };

    let avatar_decoration = user.avatar_decoration_data.map(|data| DecorationLink {
        link: cdn.avatar_decoration(&data.asset),
        id: data.asset,
    });

    let live_identity = live_identity.unwrap_or_default();
    let clan = resolve_tag(live_identity.clan, user.clan, cdn);
    let primary_guild = resolve_tag(live_identity.primary_guild, user.primary_guild, cdn);

    NormalizedProfile {
        created_at,
        username: user.username,
        avatar,
        banner,
        avatar_decoration,
        badges: decode_badges(user.public_flags),
        premium_type: premium_label(user.premium_type).to_string(),
        accent_color: user.accent_color,
        global_name: user.global_name,
        clan,
        primary_guild,
        presence,
        id: user.id,
    }
}

/// The live record wins whenever it is present.
pub fn resolve_tag(
    live: Option<GuildTag>,
    stored: Option<GuildTag>,
    cdn: &CdnUrls,
) -> Option<ResolvedTag> {
    let tag = live.or(stored)?;

    let badge_link = match (&tag.identity_guild_id, &tag.badge) {
        (Some(guild_id), Some(badge)) => Some(cdn.clan_badge(guild_id, badge)),
        _ => None,
    };

    Some(ResolvedTag { tag, badge_link })
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map};

    use super::*;

    const CDN: &str = "https://cdn.discordapp.com";

    fn user(value: serde_json::Value) -> DiscordUser {
        serde_json::from_value(value).unwrap()
    }

    fn tag(text: &str) -> GuildTag {
        GuildTag {
            identity_guild_id: Some("1100000000000000000".to_string()),
            identity_enabled: Some(true),
            tag: Some(text.to_string()),
            badge: Some("badgehash".to_string()),
            extra: Map::new(),
        }
    }

    fn fallback() -> Snowflake {
        Snowflake::parse("123456789012345678").unwrap()
    }

    #[test]
    fn test_live_tag_takes_precedence() {
        let cdn = CdnUrls::new(CDN);
        let resolved = resolve_tag(Some(tag("S")), Some(tag("P")), &cdn).unwrap();

        assert_eq!(resolved.tag.tag.as_deref(), Some("S"));
        assert_eq!(
            resolved.badge_link.as_deref(),
            Some("https://cdn.discordapp.com/clan-badges/1100000000000000000/badgehash.png")
        );
    }

    #[test]
    fn test_stored_tag_used_when_live_missing() {
        let cdn = CdnUrls::new(CDN);
        let resolved = resolve_tag(None, Some(tag("P")), &cdn).unwrap();
        assert_eq!(resolved.tag.tag.as_deref(), Some("P"));

        assert!(resolve_tag(None, None, &cdn).is_none());
    }

    #[test]
    fn test_tag_without_badge_has_no_link() {
        let cdn = CdnUrls::new(CDN);
        let mut live = tag("S");
        live.badge = None;

        let resolved = resolve_tag(Some(live), Some(tag("P")), &cdn).unwrap();
        assert_eq!(resolved.tag.tag.as_deref(), Some("S"));
        assert!(resolved.badge_link.is_none());
    }

    #[test]
    fn test_disabled_tag_keeps_null_fields() {
        let cdn = CdnUrls::new(CDN);
        let stored: GuildTag = serde_json::from_value(json!({
            "identity_guild_id": null,
            "identity_enabled": false,
            "tag": null,
            "badge": null
        }))
        .unwrap();

        let resolved = resolve_tag(None, Some(stored), &cdn).unwrap();
        assert_eq!(
            serde_json::to_value(&resolved).unwrap(),
            json!({
                "identity_guild_id": null,
                "identity_enabled": false,
                "tag": null,
                "badge": null,
                "badge_link": null
            })
        );
    }

    #[test]
    fn test_normalize_profile_links() {
        let cdn = CdnUrls::new(CDN);
        let profile = normalize_profile(
            user(json!({
                "id": "123456789012345678",
                "username": "someone",
                "global_name": "Someone",
                "avatar": "a_animated",
                "banner": "bannerhash",
                "banner_color": "#112233",
                "accent_color": 1122867,
                "avatar_decoration_data": {"asset": "a_deco", "sku_id": "1"},
                "public_flags": 64,
                "premium_type": 1
            })),
            None,
            None,
            &fallback(),
            &cdn,
        );

        assert_eq!(
            profile.avatar.link.as_deref(),
            Some("https://cdn.discordapp.com/avatars/123456789012345678/a_animated")
        );
        assert!(profile.avatar.is_animated);
        assert_eq!(
            profile.banner.link.as_deref(),
            Some("https://cdn.discordapp.com/banners/123456789012345678/bannerhash?size=480")
        );
        assert!(!profile.banner.is_animated);
        assert_eq!(profile.banner.color.as_deref(), Some("#112233"));

        let decoration = profile.avatar_decoration.unwrap();
        assert_eq!(decoration.id, "a_deco");
        assert_eq!(
            decoration.link,
            "https://cdn.discordapp.com/avatar-decoration-presets/a_deco.png"
        );
        assert_eq!(profile.badges, vec!["HOUSE_BRAVERY"]);
        assert_eq!(profile.premium_type, "Nitro Classic");
        assert!(profile.clan.is_none());
        assert!(profile.primary_guild.is_none());
    }

    #[test]
    fn test_normalize_profile_serialized_shape() {
        let cdn = CdnUrls::new(CDN);
        let live = LanyardDiscordUser {
            clan: None,
            primary_guild: Some(tag("S")),
        };
        let profile = normalize_profile(
            user(json!({
                "id": "175928847299117063",
                "username": "someone",
                "avatar": null,
                "banner": null,
                "clan": {"tag": "P", "identity_guild_id": "9", "badge": null},
                "primary_guild": {"tag": "P", "identity_guild_id": "9", "badge": "b"}
            })),
            None,
            Some(live),
            &fallback(),
            &cdn,
        );

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["created_at"], json!("2016-04-30T11:18:25.796Z"));
        assert_eq!(
            value["avatar"],
            json!({"id": null, "link": null, "is_animated": false})
        );
        assert_eq!(value["avatar_decoration"], json!(null));
        assert_eq!(value["badges"], json!([]));
        assert_eq!(value["premium_type"], json!("None"));
        assert_eq!(value["clan"]["tag"], json!("P"));
        assert_eq!(value["clan"]["badge_link"], json!(null));
        assert_eq!(value["primary_guild"]["tag"], json!("S"));
        assert_eq!(value["presence"], json!(null));
    }

    #[test]
    fn test_unparseable_record_id_falls_back() {
        let cdn = CdnUrls::new(CDN);
        let profile = normalize_profile(
            user(json!({"id": "not-a-snowflake", "username": "x"})),
            None,
            None,
            &fallback(),
            &cdn,
        );

        assert_eq!(profile.created_at, fallback().created_at());
    }
}
