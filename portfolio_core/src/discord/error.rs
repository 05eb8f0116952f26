use serde_json::Value;
use thiserror::Error;

pub const INVALID_SNOWFLAKE_MESSAGE: &str = "Value is not a valid Discord snowflake";

/// Failures of the profile pipeline. An unavailable presence source is not an
/// error: it surfaces as an absent presence snapshot.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("{}", INVALID_SNOWFLAKE_MESSAGE)]
    InvalidSnowflake,

    /// The profile source answered with an error document. Status and body are
    /// kept verbatim so they can be replayed to the caller.
    #[error("Discord API returned {status}: {body}")]
    Upstream { status: u16, body: Value },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
