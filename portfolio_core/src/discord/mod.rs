pub mod client;
pub mod dto;
pub mod error;
pub mod flags;
pub mod normalize;
pub mod presence;
pub mod snowflake;
