use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use log::error;
use portfolio_core::github::dto::{RepoDetails, RepoSummary, UserStats};
use serde_json::json;

use crate::{error::ErrorServer, state::ServerState};

fn github_error(message: &str) -> ErrorServer {
    ErrorServer::with_body(
        StatusCode::INTERNAL_SERVER_ERROR.into(),
        json!({ "error": message }),
    )
}

#[utoipa::path(
    get,
    path = "/api/github",
    description = "Most starred repositories",
    responses(
        (status = 200, description = "Success", body = [RepoSummary]),
        (status = 500, description = "Failed to fetch GitHub data"),
    )
)]
pub async fn top_repos(
    State(server_state): State<Arc<ServerState>>,
) -> Result<Json<Vec<RepoSummary>>, ErrorServer> {
    let repos = server_state.github().top_repos().await.map_err(|e| {
        error!("Error fetching GitHub data: {}", e);
        github_error("Failed to fetch GitHub data")
    })?;

    Ok(Json(repos))
}

#[utoipa::path(
    get,
    path = "/api/github/user",
    description = "Follower and repository counts",
    responses(
        (status = 200, description = "Success", body = UserStats),
        (status = 500, description = "Failed to fetch GitHub user data"),
    )
)]
pub async fn user_stats(
    State(server_state): State<Arc<ServerState>>,
) -> Result<Json<UserStats>, ErrorServer> {
    let stats = server_state.github().user_stats().await.map_err(|e| {
        error!("Error fetching GitHub user data: {}", e);
        github_error("Failed to fetch GitHub user data")
    })?;

    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/github/all-repos",
    description = "Repositories with commit counts and README images",
    responses(
        (status = 200, description = "Success", body = [RepoDetails]),
        (status = 500, description = "Failed to fetch GitHub data"),
    )
)]
pub async fn all_repos(
    State(server_state): State<Arc<ServerState>>,
) -> Result<Json<Vec<RepoDetails>>, ErrorServer> {
    let repos = server_state.github().all_repos().await.map_err(|e| {
        error!("Error fetching GitHub data: {}", e);
        github_error("Failed to fetch GitHub data")
    })?;

    Ok(Json(repos))
}
