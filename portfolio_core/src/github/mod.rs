pub mod client;
pub mod dto;
