use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use log::error;
use portfolio_core::leetcode::dto::LeetcodeProfile;
use serde_json::json;

use crate::{error::ErrorServer, state::ServerState};

#[utoipa::path(
    get,
    path = "/api/leetcode_profile",
    description = "LeetCode profile summary",
    responses(
        (status = 200, description = "Success", body = LeetcodeProfile),
        (status = 500, description = "Failed to fetch LeetCode profile"),
    )
)]
pub async fn leetcode_profile(
    State(server_state): State<Arc<ServerState>>,
) -> Result<Json<LeetcodeProfile>, ErrorServer> {
    let profile = server_state.leetcode().profile().await.map_err(|e| {
        error!("Error fetching LeetCode profile: {}", e);
        ErrorServer::with_body(
            StatusCode::INTERNAL_SERVER_ERROR.into(),
            json!({
                "error": "Failed to fetch LeetCode profile",
                "ranking": 0,
                "totalSolved": 0,
                "reputation": 0,
            }),
        )
    })?;

    Ok(Json(profile))
}
