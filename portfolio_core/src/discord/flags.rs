//! Hand-maintained tables mirroring Discord's public user flags and premium
//! tiers. Discord adds values over time; update these tables when it does.

pub struct UserFlag {
    pub name: &'static str,
    pub bit: u64,
}

pub const USER_FLAGS: &[UserFlag] = &[
    UserFlag { name: "DISCORD_EMPLOYEE", bit: 1 << 0 },
    UserFlag { name: "PARTNERED_SERVER_OWNER", bit: 1 << 1 },
    UserFlag { name: "HYPESQUAD_EVENTS", bit: 1 << 2 },
    UserFlag { name: "BUGHUNTER_LEVEL_1", bit: 1 << 3 },
    UserFlag { name: "HOUSE_BRAVERY", bit: 1 << 6 },
    UserFlag { name: "HOUSE_BRILLIANCE", bit: 1 << 7 },
    UserFlag { name: "HOUSE_BALANCE", bit: 1 << 8 },
    UserFlag { name: "EARLY_SUPPORTER", bit: 1 << 9 },
    UserFlag { name: "TEAM_USER", bit: 1 << 10 },
    UserFlag { name: "BUGHUNTER_LEVEL_2", bit: 1 << 14 },
    UserFlag { name: "VERIFIED_BOT", bit: 1 << 16 },
    UserFlag { name: "EARLY_VERIFIED_BOT_DEVELOPER", bit: 1 << 17 },
    UserFlag { name: "DISCORD_CERTIFIED_MODERATOR", bit: 1 << 18 },
    UserFlag { name: "BOT_HTTP_INTERACTIONS", bit: 1 << 19 },
    UserFlag { name: "SPAMMER", bit: 1 << 20 },
    UserFlag { name: "ACTIVE_DEVELOPER", bit: 1 << 22 },
    UserFlag { name: "QUARANTINED", bit: 1 << 44 },
];

pub const PREMIUM_TYPES: &[(u64, &str)] = &[
    (0, "None"),
    (1, "Nitro Classic"),
    (2, "Nitro"),
    (3, "Nitro Basic"),
];

pub const PREMIUM_NONE: &str = "None";

/// Badge names set in `public_flags`, in table order.
pub fn decode_badges(public_flags: u64) -> Vec<String> {
    USER_FLAGS
        .iter()
        .filter(|flag| public_flags & flag.bit != 0)
        .map(|flag| flag.name.to_string())
        .collect()
}

pub fn premium_label(premium_type: Option<u64>) -> &'static str {
    premium_type
        .and_then(|code| {
            PREMIUM_TYPES
                .iter()
                .find(|(tier, _)| *tier == code)
                .map(|(_, label)| *label)
        })
        .unwrap_or(PREMIUM_NONE)
}
