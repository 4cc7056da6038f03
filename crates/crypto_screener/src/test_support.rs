//! In-memory stand-ins for the external services, plus a local HTTP
//! responder for driving the real clients.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

use crate::{
    external_services::{
        coingecko::{
            market_chart::{ChartInterval, MarketChart},
            trending::TrendingItem,
        },
        DiscussionProvider, MarketDataProvider, SourcePost,
    },
    models::markets::MarketRecord,
    services::sentiment_service::PolarityEstimator,
    utils::{errors::AppError, time::TimePeriod},
};

pub fn market_record(
    id: &str,
    name: &str,
    symbol: &str,
    market_cap: Option<f64>,
    total_volume: Option<f64>,
    change_24h: Option<f64>,
) -> MarketRecord {
    MarketRecord {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        market_cap,
        total_volume,
        price_change_percentage_24h: change_24h,
        current_price: Some(1.0),
        ..Default::default()
    }
}

pub fn source_post(title: &str, upvotes: i64) -> SourcePost {
    SourcePost {
        title: title.to_string(),
        url: format!("https://reddit.example/{}", upvotes),
        upvotes,
        created_utc: 1_700_000_000.0,
    }
}

#[derive(Default)]
pub struct FakeMarketData {
    trending: Vec<TrendingItem>,
    markets: Vec<MarketRecord>,
    chart: MarketChart,
    fail: bool,
    chart_requests: Mutex<Vec<(String, u32, ChartInterval)>>,
}

impl FakeMarketData {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn with_trending(count: usize) -> Self {
        let trending = (0..count)
            .map(|i| TrendingItem {
                id: format!("trend-{}", i),
                name: format!("Trend {}", i),
                symbol: format!("t{}", i),
                market_cap_rank: Some(i as u32 + 1),
                thumb: format!("https://assets.example/{}.png", i),
            })
            .collect();
        Self {
            trending,
            ..Default::default()
        }
    }

    pub fn with_markets(markets: Vec<MarketRecord>) -> Self {
        Self {
            markets,
            ..Default::default()
        }
    }

    pub fn with_chart(prices: Vec<[f64; 2]>) -> Self {
        Self {
            chart: MarketChart { prices },
            ..Default::default()
        }
    }

    pub fn chart_requests(&self) -> Vec<(String, u32, ChartInterval)> {
        self.chart_requests.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail {
            Err(AppError::UpstreamStatus {
                service: "fake",
                status: 503,
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MarketDataProvider for FakeMarketData {
    async fn trending(&self) -> Result<Vec<TrendingItem>, AppError> {
        self.check()?;
        Ok(self.trending.clone())
    }

    async fn markets(
        &self,
        per_page: u32,
        _price_change_percentage: &str,
    ) -> Result<Vec<MarketRecord>, AppError> {
        self.check()?;
        Ok(self.markets.iter().take(per_page as usize).cloned().collect())
    }

    async fn market_chart(
        &self,
        coin_id: &str,
        days: u32,
        interval: ChartInterval,
    ) -> Result<MarketChart, AppError> {
        self.chart_requests
            .lock()
            .unwrap()
            .push((coin_id.to_string(), days, interval));
        self.check()?;
        Ok(self.chart.clone())
    }
}

/// Every source answers with the same posts, regardless of the limit asked.
#[derive(Default)]
pub struct FakeDiscussions {
    posts: Vec<SourcePost>,
    failing_source: Option<String>,
    searched: Mutex<Vec<String>>,
    window: Mutex<Option<TimePeriod>>,
}

impl FakeDiscussions {
    pub fn uniform(per_source: usize) -> Self {
        Self::from_posts(
            (0..per_source)
                .map(|i| source_post(&format!("Post {}", i), i as i64))
                .collect(),
        )
    }

    pub fn from_posts(posts: Vec<SourcePost>) -> Self {
        Self {
            posts,
            ..Default::default()
        }
    }

    pub fn failing_on(mut self, source: &str) -> Self {
        self.failing_source = Some(source.to_string());
        self
    }

    pub fn searched_sources(&self) -> Vec<String> {
        self.searched.lock().unwrap().clone()
    }

    pub fn requested_window(&self) -> Option<TimePeriod> {
        *self.window.lock().unwrap()
    }
}

#[async_trait]
impl DiscussionProvider for FakeDiscussions {
    async fn search(
        &self,
        source: &str,
        _query: &str,
        _limit: u32,
        window: TimePeriod,
    ) -> Result<Vec<SourcePost>, AppError> {
        self.searched.lock().unwrap().push(source.to_string());
        *self.window.lock().unwrap() = Some(window);
        if self.failing_source.as_deref() == Some(source) {
            return Err(AppError::UpstreamStatus {
                service: "fake",
                status: 500,
            });
        }
        Ok(self.posts.clone())
    }
}

pub struct FixedPolarity(pub f64);

impl PolarityEstimator for FixedPolarity {
    fn polarity(&self, _text: &str) -> Result<f64, AppError> {
        Ok(self.0)
    }
}

pub struct FailingPolarity;

impl PolarityEstimator for FailingPolarity {
    fn polarity(&self, _text: &str) -> Result<f64, AppError> {
        Err(AppError::SentimentError("unavailable".to_string()))
    }
}

/// `(path prefix, status, body)`; the first matching prefix answers.
pub type CannedRoute = (&'static str, u16, &'static str);

/// Serves canned responses on `127.0.0.1` and returns the base URL. Unmatched
/// paths answer 404 with an empty body.
pub async fn canned_server(routes: Vec<CannedRoute>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 16 * 1024];
                let read = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..read]);
                let path = request.split_whitespace().nth(1).unwrap_or("/");

                let (status, body) = routes
                    .iter()
                    .find(|(prefix, _, _)| path.starts_with(prefix))
                    .map(|(_, status, body)| (*status, *body))
                    .unwrap_or((404, ""));
                let response = format!(
                    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}
