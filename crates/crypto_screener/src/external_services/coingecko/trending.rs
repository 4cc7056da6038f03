use serde::Deserialize;

use crate::models::markets::TrendingCoin;

#[derive(Debug, Deserialize)]
pub struct TrendingResponse {
    pub coins: Vec<TrendingEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingEntry {
    pub item: TrendingItem,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TrendingItem {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: String,
}

impl From<TrendingItem> for TrendingCoin {
    fn from(item: TrendingItem) -> Self {
        TrendingCoin {
            id: item.id,
            name: item.name,
            symbol: item.symbol.to_uppercase(),
            market_cap_rank: item.market_cap_rank,
            thumb: item.thumb,
        }
    }
}
