use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_core::discord::error::{INVALID_SNOWFLAKE_MESSAGE, ProfileError};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToResponse;

pub const PROFILE_FAILURE_MESSAGE: &str = "Failed to fetch Discord profile";

#[derive(Debug, Serialize, ToResponse)]
pub struct ErrorServer {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub status: u16,
    /// Replaces the `{ message, error }` document when set.
    #[serde(skip)]
    pub body: Option<Value>,
}

impl ErrorServer {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            message: message.to_string(),
            error: None,
            status: status.into(),
            body: None,
        }
    }

    pub fn with_body(status: u16, body: Value) -> Self {
        Self {
            message: body.to_string(),
            error: None,
            status,
            body: Some(body),
        }
    }
}

impl std::fmt::Display for ErrorServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ErrorServer {
    fn into_response(mut self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.body.take() {
            Some(body) => (status, Json(body)).into_response(),
            None => (status, Json(self)).into_response(),
        }
    }
}

impl From<ProfileError> for ErrorServer {
    fn from(error: ProfileError) -> Self {
        match error {
            ProfileError::InvalidSnowflake => {
                ErrorServer::new(StatusCode::BAD_REQUEST, INVALID_SNOWFLAKE_MESSAGE)
            }
            ProfileError::Upstream { status, body } => ErrorServer::with_body(status, body),
            other => ErrorServer {
                message: PROFILE_FAILURE_MESSAGE.to_string(),
                error: Some(other.to_string()),
                status: StatusCode::INTERNAL_SERVER_ERROR.into(),
                body: None,
            },
        }
    }
}
