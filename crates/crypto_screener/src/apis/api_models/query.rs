use serde::Deserialize;
use utoipa::IntoParams;

fn default_coin_query() -> String {
    "BTC".to_string()
}

fn default_chart_coin() -> String {
    "bitcoin".to_string()
}

fn default_timeframe() -> u32 {
    30
}

#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct SearchCoinsQuery {
    /// Case-insensitive fragment of a coin name or symbol
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct SentimentQuery {
    /// Searched verbatim in each community; an empty value skips the search.
    #[serde(default = "default_coin_query")]
    pub coin: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    #[serde(default = "default_chart_coin")]
    pub coin: String,
    /// Days of history
    #[serde(default = "default_timeframe")]
    pub timeframe: u32,
}
