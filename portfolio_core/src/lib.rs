pub mod discord;
pub mod github;
pub mod helpers;
pub mod leetcode;
