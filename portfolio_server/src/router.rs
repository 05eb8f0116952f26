use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    discord_profile::handler::discord_profile,
    docs::{dto::ApiDoc, handler::api_docs},
    github::handler::{all_repos, top_repos, user_stats},
    info::handler::info,
    leetcode::handler::leetcode_profile,
    state::ServerState,
};

pub fn router(state: Arc<ServerState>) -> Router {
    let doc = ApiDoc::openapi();

    let api_router = Router::new()
        .route("/discord_profile/{id}", get(discord_profile))
        .route("/github", get(top_repos))
        .route("/github/user", get(user_stats))
        .route("/github/all-repos", get(all_repos))
        .route("/leetcode_profile", get(leetcode_profile));

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .nest("/api", api_router)
        .route("/", get(info))
        .route("/docs", get(api_docs))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
