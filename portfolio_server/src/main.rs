mod discord_profile;
mod docs;
mod error;
mod github;
mod info;
mod leetcode;
mod router;
mod state;

use std::sync::Arc;

use dotenvy::dotenv;
use log::info;
use portfolio_core::helpers::config::AppConfig;
use router::router;
use state::ServerState;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let state = Arc::new(ServerState::from_config(&config)?);

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.server_domain).await?;
    info!("Listening on {}", config.server_domain);

    axum::serve(listener, app).await?;

    Ok(())
}
