use std::sync::Arc;

use anyhow::Context;
use apis::setup_routes;
use axum::Router;
use external_services::{
    coingecko::CoinGeckoService, reddit::RedditService, DiscussionProvider, MarketDataProvider,
};
use services::{
    discussion_service::DiscussionService, market_service::MarketService,
    sentiment_service::SentimentService,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

pub mod apis;
pub mod external_services;
pub mod models;
pub mod services;
pub mod settings;
pub mod utils;

#[cfg(test)]
mod test_support;

pub struct AppState {
    pub market_service: Arc<MarketService>,
    pub discussion_service: Arc<DiscussionService>,
}

impl AppState {
    pub fn new(
        market_data: Arc<dyn MarketDataProvider>,
        discussions: Arc<dyn DiscussionProvider>,
    ) -> Self {
        let sentiment_service = Arc::new(SentimentService::default());
        Self {
            market_service: Arc::new(MarketService::new(market_data)),
            discussion_service: Arc::new(DiscussionService::new(discussions, sentiment_service)),
        }
    }
}

pub fn setup_services(settings: &settings::Settings) -> anyhow::Result<AppState> {
    let coingecko = CoinGeckoService::new(&settings.coingecko_api_key, &settings.coingecko_base_url)
        .context("Failed to build CoinGecko client")?;
    let reddit = RedditService::new(
        settings.reddit_client_id.clone(),
        settings.reddit_client_secret.clone(),
        &settings.reddit_user_agent,
    )
    .context("Failed to build Reddit client")?
    .with_endpoints(&settings.reddit_token_url, &settings.reddit_api_url);

    Ok(AppState::new(Arc::new(coingecko), Arc::new(reddit)))
}

pub fn build_router(state: AppState) -> Router {
    setup_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

pub fn setup_router(settings: &settings::Settings) -> anyhow::Result<Router> {
    let state = setup_services(settings)?;
    Ok(build_router(state))
}

pub fn init_tracing(settings: &settings::Settings) {
    let level = if settings.is_production() {
        "info"
    } else {
        "debug"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_ansi(!settings.is_production())
        .init();
}
