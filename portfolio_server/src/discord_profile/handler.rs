use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use log::{debug, error};
use portfolio_core::discord::{dto::NormalizedProfile, error::ProfileError};

use crate::{error::ErrorServer, state::ServerState};

#[utoipa::path(
    get,
    path = "/api/discord_profile/{id}",
    params(("id" = String, Path, description = "Discord user snowflake")),
    description = "Discord profile merged with live Lanyard presence",
    responses(
        (status = 200, description = "Success", body = NormalizedProfile),
        (status = 400, description = "Value is not a valid Discord snowflake"),
        (status = 500, description = "Failed to fetch Discord profile"),
    )
)]
pub async fn discord_profile(
    State(server_state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<Json<NormalizedProfile>, ErrorServer> {
    let profile = server_state.discord().profile(&id).await.map_err(|e| {
        match &e {
            ProfileError::InvalidSnowflake => debug!("Rejected profile id {:?}", id),
            ProfileError::Upstream { status, .. } => {
                debug!("Passing through Discord error {} for {}", status, id)
            }
            _ => error!("Error fetching Discord profile: {}", e),
        }
        ErrorServer::from(e)
    })?;

    Ok(Json(profile))
}
