use anyhow::Context;
use crypto_screener::settings;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let settings = settings::load_settings().context("Failed to load settings")?;
    crypto_screener::init_tracing(&settings);

    if !settings.is_production() {
        debug!("Running in {} environment", settings.environment);
    }

    let app = crypto_screener::setup_router(&settings)?;
    let listener = TcpListener::bind(format!("0.0.0.0:{}", settings.port)).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }

    Ok(())
}
