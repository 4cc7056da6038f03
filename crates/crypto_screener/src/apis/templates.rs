use askama::Template;
use axum::response::Html;

use crate::utils::errors::AppError;

use super::api_models::views::{
    FilterFormView, MarketRowView, PostView, SentimentBreakdownView, TrendingCoinView,
};

pub const TIMEFRAME_CHOICES: [(u32, &str); 5] = [
    (1, "24 hours"),
    (7, "7 days"),
    (30, "30 days"),
    (90, "90 days"),
    (365, "1 year"),
];

#[derive(Template)]
#[template(path = "index.html")]
pub struct DashboardPage {
    pub trending: Vec<TrendingCoinView>,
    pub gainers: Vec<MarketRowView>,
    pub losers: Vec<MarketRowView>,
}

#[derive(Template)]
#[template(path = "screener.html")]
pub struct ScreenerPage {
    pub coins: Vec<MarketRowView>,
    pub filters: FilterFormView,
}

#[derive(Template)]
#[template(path = "sentiment.html")]
pub struct SentimentPage {
    pub coin_query: String,
    pub posts: Vec<PostView>,
    pub breakdown: SentimentBreakdownView,
}

pub struct TimeframeOption {
    pub days: u32,
    pub label: String,
    pub selected: bool,
}

impl TimeframeOption {
    /// Preset choices, plus the requested one when it is not a preset.
    pub fn choices(selected: u32) -> Vec<TimeframeOption> {
        let mut options: Vec<TimeframeOption> = TIMEFRAME_CHOICES
            .iter()
            .map(|(days, label)| TimeframeOption {
                days: *days,
                label: label.to_string(),
                selected: *days == selected,
            })
            .collect();
        if !options.iter().any(|o| o.selected) {
            options.push(TimeframeOption {
                days: selected,
                label: format!("{} days", selected),
                selected: true,
            });
        }
        options
    }
}

#[derive(Template)]
#[template(path = "charts.html")]
pub struct ChartsPage {
    pub chart_json: String,
    pub selected_coin: String,
    pub timeframes: Vec<TimeframeOption>,
    pub has_data: bool,
}

pub fn render<T: Template>(page: T) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}
