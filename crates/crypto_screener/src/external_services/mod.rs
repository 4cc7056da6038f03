pub mod coingecko;
pub mod reddit;

use async_trait::async_trait;

use crate::{
    models::markets::MarketRecord,
    utils::{errors::AppError, time::TimePeriod},
};

use coingecko::{
    market_chart::{ChartInterval, MarketChart},
    trending::TrendingItem,
};

/// Transport to the price/market API. Implementations decode responses and
/// report every failure; they apply no business rules.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn trending(&self) -> Result<Vec<TrendingItem>, AppError>;

    async fn markets(
        &self,
        per_page: u32,
        price_change_percentage: &str,
    ) -> Result<Vec<MarketRecord>, AppError>;

    async fn market_chart(
        &self,
        coin_id: &str,
        days: u32,
        interval: ChartInterval,
    ) -> Result<MarketChart, AppError>;
}

/// A post as returned by a community source, before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePost {
    pub title: String,
    pub url: String,
    pub upvotes: i64,
    pub created_utc: f64,
}

#[async_trait]
pub trait DiscussionProvider: Send + Sync {
    async fn search(
        &self,
        source: &str,
        query: &str,
        limit: u32,
        window: TimePeriod,
    ) -> Result<Vec<SourcePost>, AppError>;
}
