use crate::{discord_profile, github, info, leetcode};
use portfolio_core::{
    discord::dto::{AvatarLink, BannerLink, DecorationLink, NormalizedProfile},
    github::dto::{RepoDetails, RepoSummary, UserStats},
    leetcode::dto::LeetcodeProfile,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        info::handler::info,
        discord_profile::handler::discord_profile,
        github::handler::top_repos,
        github::handler::user_stats,
        github::handler::all_repos,
        leetcode::handler::leetcode_profile,
    ),
    components(schemas(
        info::dto::Info,
        NormalizedProfile,
        AvatarLink,
        BannerLink,
        DecorationLink,
        RepoSummary,
        RepoDetails,
        UserStats,
        LeetcodeProfile
    ))
)]
pub struct ApiDoc;
