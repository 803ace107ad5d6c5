use anyhow::{Context, Result};
use dotenv::dotenv;
use storefront::{config::Config, handler::AppRouter, state::AppState, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("storefront");

    let config = Config::init().context("Failed to load configuration")?;

    let state = AppState::new(&config.database_url)
        .await
        .context("Failed to create AppState")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Server stopped");

    Ok(())
}
