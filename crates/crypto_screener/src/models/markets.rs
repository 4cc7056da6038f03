use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Snapshot of a coin as listed by `/coins/markets`.
///
/// Every numeric field can come back as `null` for thinly traded coins.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default, PartialEq)]
pub struct MarketRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_30d_in_currency: Option<f64>,
}

impl MarketRecord {
    pub fn market_cap_or_zero(&self) -> f64 {
        self.market_cap.unwrap_or_default()
    }

    pub fn total_volume_or_zero(&self) -> f64 {
        self.total_volume.unwrap_or_default()
    }

    pub fn change_24h_or_zero(&self) -> f64 {
        self.price_change_percentage_24h.unwrap_or_default()
    }

    /// Case-insensitive substring match on name or symbol. `needle` must
    /// already be lower-case.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendingCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}
