use std::{cmp::Ordering, sync::Arc};

use tracing::debug;

use crate::{
    external_services::{coingecko::market_chart::ChartInterval, MarketDataProvider},
    models::{
        filters::FilterCriteria,
        markets::{MarketRecord, PricePoint, TrendingCoin},
    },
    utils::{errors::AppError, time::from_epoch_millis, upstream::Upstream},
};

use super::filter_service;

pub const TRENDING_LIMIT: usize = 10;
pub const MOVERS_PAGE_SIZE: u32 = 100;
pub const MOVERS_LIMIT: usize = 10;
pub const SCREENER_PAGE_SIZE: u32 = 250;
pub const SEARCH_RESULT_LIMIT: usize = 10;

const MOVERS_CHANGE_WINDOWS: &str = "24h";
const SCREENER_CHANGE_WINDOWS: &str = "24h,7d,30d";

pub type GainersLosers = (Vec<MarketRecord>, Vec<MarketRecord>);

/// Read-only market views. Every operation degrades to an empty value when the
/// provider fails; the failure itself is only logged.
pub struct MarketService {
    provider: Arc<dyn MarketDataProvider>,
}

impl MarketService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch_trending(&self) -> Upstream<Vec<TrendingCoin>> {
        let result = self.provider.trending().await.map(|items| {
            items
                .into_iter()
                .take(TRENDING_LIMIT)
                .map(TrendingCoin::from)
                .collect()
        });
        Upstream::from_result("fetching trending coins", result)
    }

    pub async fn fetch_gainers_losers(&self) -> Upstream<GainersLosers> {
        let result = self
            .provider
            .markets(MOVERS_PAGE_SIZE, MOVERS_CHANGE_WINDOWS)
            .await
            .map(|records| split_gainers_losers(records, MOVERS_LIMIT));
        Upstream::from_result("fetching gainers/losers", result)
    }

    pub async fn fetch_screener(
        &self,
        criteria: Option<&FilterCriteria>,
    ) -> Upstream<Vec<MarketRecord>> {
        let result = self
            .provider
            .markets(SCREENER_PAGE_SIZE, SCREENER_CHANGE_WINDOWS)
            .await
            .map(|records| match criteria {
                Some(criteria) => {
                    let total = records.len();
                    let filtered = filter_service::apply(records, criteria);
                    debug!("Screener kept {} of {} records", filtered.len(), total);
                    filtered
                }
                None => records,
            });
        Upstream::from_result("in coin screener", result)
    }

    pub async fn fetch_history(&self, coin_id: &str, days: u32) -> Upstream<Vec<PricePoint>> {
        let result = self
            .provider
            .market_chart(coin_id, days, ChartInterval::for_days(days))
            .await
            .and_then(|chart| to_price_points(&chart.prices));
        Upstream::from_result("fetching historical data", result)
    }

    /// Screener listing narrowed to `query`, capped for the JSON endpoint.
    pub async fn search_coins(&self, query: &str) -> Upstream<Vec<MarketRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Upstream::Available(vec![]);
        }
        self.fetch_screener(Some(&FilterCriteria::with_search(query)))
            .await
            .map(|mut coins| {
                coins.truncate(SEARCH_RESULT_LIMIT);
                coins
            })
    }
}

/// Sorts by 24h change, best first, and returns the first and last `limit`
/// records. With fewer than `2 * limit` records the two slices overlap.
pub fn split_gainers_losers(mut records: Vec<MarketRecord>, limit: usize) -> GainersLosers {
    records.sort_by(|a, b| {
        b.change_24h_or_zero()
            .partial_cmp(&a.change_24h_or_zero())
            .unwrap_or(Ordering::Equal)
    });

    let gainers = records.iter().take(limit).cloned().collect();
    let losers = records[records.len().saturating_sub(limit)..].to_vec();

    (gainers, losers)
}

pub fn to_price_points(prices: &[[f64; 2]]) -> Result<Vec<PricePoint>, AppError> {
    prices
        .iter()
        .map(|[millis, price]| {
            Ok(PricePoint {
                timestamp: from_epoch_millis(*millis as i64)?,
                price: *price,
            })
        })
        .collect()
}
