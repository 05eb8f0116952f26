use std::collections::HashMap;

use log::debug;

use super::dto::{Activity, LanyardData, Presence};

/// Keeps one activity per `(name, type)` pair.
///
/// The first occurrence of a pair fixes its position in the output. A later
/// entry for the same pair replaces the kept one in place when its
/// `created_at` is strictly greater; otherwise it is dropped.
pub fn dedup_activities(activities: Vec<Activity>) -> Vec<Activity> {
    let mut unique: Vec<Activity> = Vec::with_capacity(activities.len());
    let mut seen: HashMap<(String, u8), usize> = HashMap::new();

    for activity in activities {
        let key = (activity.name.clone(), activity.kind);

        match seen.get(&key).copied() {
            None => {
                seen.insert(key, unique.len());
                unique.push(activity);
            }
            Some(index) => {
                if is_newer(&activity, &unique[index]) {
                    debug!(
                        "Replacing {} activity {} ({}) with newer entry {}",
                        kind_label(&activity),
                        activity.name,
                        unique[index].id,
                        activity.id
                    );
                    unique[index] = activity;
                }
            }
        }
    }

    unique
}

fn kind_label(activity: &Activity) -> String {
    match activity.activity_type() {
        Some(kind) => kind.to_string(),
        None => format!("type {}", activity.kind),
    }
}

fn is_newer(candidate: &Activity, kept: &Activity) -> bool {
    match (candidate.created_at, kept.created_at) {
        (Some(candidate), Some(kept)) => candidate > kept,
        _ => false,
    }
}

impl From<LanyardData> for Presence {
    fn from(data: LanyardData) -> Self {
        Self {
            discord_status: data.discord_status,
            activities: dedup_activities(data.activities),
            active_on_discord_web: data.active_on_discord_web,
            active_on_discord_desktop: data.active_on_discord_desktop,
            active_on_discord_mobile: data.active_on_discord_mobile,
            active_on_discord_embedded: data.active_on_discord_embedded,
            listening_to_spotify: data.listening_to_spotify,
            spotify: data.spotify,
            kv: data.kv,
        }
    }
}
