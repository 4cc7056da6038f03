use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use tracing::debug;

use crate::{
    models::filters::FilterCriteria,
    services::discussion_service::DiscussionSummary,
    utils::errors::AppError,
    AppState,
};

use super::{
    api_models::{
        chart::ChartSpec,
        query::{ChartQuery, SentimentQuery},
        views::{FilterFormView, MarketRowView, PostView, SentimentBreakdownView, TrendingCoinView},
    },
    templates::{render, ChartsPage, DashboardPage, ScreenerPage, SentimentPage, TimeframeOption},
};

pub(super) async fn dashboard(
    State(app_state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let (trending, movers) = tokio::join!(
        app_state.market_service.fetch_trending(),
        app_state.market_service.fetch_gainers_losers()
    );
    let trending = trending.into_inner();
    let (gainers, losers) = movers.into_inner();

    render(DashboardPage {
        trending: trending.iter().map(TrendingCoinView::from).collect(),
        gainers: gainers.iter().map(MarketRowView::from).collect(),
        losers: losers.iter().map(MarketRowView::from).collect(),
    })
}

pub(super) async fn screener(
    State(app_state): State<Arc<AppState>>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Html<String>, AppError> {
    let coins = app_state
        .market_service
        .fetch_screener(Some(&criteria))
        .await
        .into_inner();

    render(ScreenerPage {
        coins: coins.iter().map(MarketRowView::from).collect(),
        filters: FilterFormView::from(&criteria),
    })
}

pub(super) async fn sentiment(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<SentimentQuery>,
) -> Result<Html<String>, AppError> {
    let coin = query.coin.trim();
    let summary = if coin.is_empty() {
        DiscussionSummary::default()
    } else {
        app_state.discussion_service.aggregate_default(coin).await
    };
    if !summary.failed_sources.is_empty() {
        debug!("Skipped sources for {:?}: {:?}", coin, summary.failed_sources);
    }

    render(SentimentPage {
        coin_query: query.coin.clone(),
        posts: summary.display_posts().iter().map(PostView::from).collect(),
        breakdown: SentimentBreakdownView::from(&summary.tally),
    })
}

pub(super) async fn charts(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> Result<Html<String>, AppError> {
    let points = app_state
        .market_service
        .fetch_history(&query.coin, query.timeframe)
        .await
        .into_inner();

    render(ChartsPage {
        chart_json: ChartSpec::price_line(&points, query.timeframe).to_script_json()?,
        has_data: !points.is_empty(),
        timeframes: TimeframeOption::choices(query.timeframe),
        selected_coin: query.coin,
    })
}
