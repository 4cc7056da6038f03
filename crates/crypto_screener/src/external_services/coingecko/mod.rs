pub mod market_chart;
pub mod markets;
pub mod trending;

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{models::markets::MarketRecord, utils::errors::AppError};

use super::MarketDataProvider;
use market_chart::{ChartInterval, MarketChart, MarketChartQuery};
use markets::MarketsQuery;
use trending::{TrendingItem, TrendingResponse};

pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

pub struct CoinGeckoService {
    client: Client,
    base_url: String,
}

impl CoinGeckoService {
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();
        let api_key = header::HeaderValue::from_str(api_key).map_err(|e| {
            AppError::InvalidConfiguration(format!("COINGECKO_API_KEY is not a valid header: {}", e))
        })?;
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        Q: Serialize + Debug + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching {} with query: {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("CoinGecko error {} on {}: {}", status, path, body);
            return Err(AppError::UpstreamStatus {
                service: "coingecko",
                status: status.as_u16(),
            });
        }

        let json_str = response.text().await?;
        serde_json::from_str(&json_str).map_err(|e| {
            debug!("Error decoding {}: {}", path, e);
            AppError::from(e)
        })
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoService {
    async fn trending(&self) -> Result<Vec<TrendingItem>, AppError> {
        let no_query: [(&str, &str); 0] = [];
        let response: TrendingResponse = self.get_json("/search/trending", &no_query).await?;
        Ok(response.coins.into_iter().map(|entry| entry.item).collect())
    }

    async fn markets(
        &self,
        per_page: u32,
        price_change_percentage: &str,
    ) -> Result<Vec<MarketRecord>, AppError> {
        let query = MarketsQuery::by_market_cap(per_page, price_change_percentage);
        self.get_json("/coins/markets", &query).await
    }

    async fn market_chart(
        &self,
        coin_id: &str,
        days: u32,
        interval: ChartInterval,
    ) -> Result<MarketChart, AppError> {
        if !is_valid_coin_id(coin_id) {
            return Err(AppError::BadRequest(format!("invalid coin id: {:?}", coin_id)));
        }
        let query = MarketChartQuery {
            vs_currency: "usd",
            days,
            interval,
        };
        self.get_json(&format!("/coins/{}/market_chart", coin_id), &query)
            .await
    }
}

fn is_valid_coin_id(coin_id: &str) -> bool {
    !coin_id.is_empty()
        && !coin_id.starts_with('.')
        && coin_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
