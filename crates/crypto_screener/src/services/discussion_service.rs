use std::sync::Arc;

use tracing::{debug, error};

use crate::{
    external_services::DiscussionProvider,
    models::discussions::{DiscussionPost, SentimentTally},
    utils::time::{from_epoch_seconds, TimePeriod},
};

use super::sentiment_service::SentimentService;

/// Searched in this order; later sources are skipped once the cap is hit.
pub const DISCUSSION_SOURCES: [&str; 5] = [
    "CryptoCurrency",
    "Bitcoin",
    "Ethereum",
    "Solana",
    "CryptoMoonShots",
];
pub const PER_SOURCE_LIMIT: u32 = 3;
pub const TOTAL_POST_CAP: usize = 15;
pub const DISPLAY_LIMIT: usize = 10;
pub const SEARCH_WINDOW: TimePeriod = TimePeriod::Week;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscussionSummary {
    pub posts: Vec<DiscussionPost>,
    pub tally: SentimentTally,
    /// Sources whose search failed and were skipped.
    pub failed_sources: Vec<String>,
}

impl DiscussionSummary {
    pub fn display_posts(&self) -> &[DiscussionPost] {
        &self.posts[..self.posts.len().min(DISPLAY_LIMIT)]
    }
}

pub struct DiscussionService {
    provider: Arc<dyn DiscussionProvider>,
    sentiment_service: Arc<SentimentService>,
    sources: Vec<String>,
}

impl DiscussionService {
    pub fn new(
        provider: Arc<dyn DiscussionProvider>,
        sentiment_service: Arc<SentimentService>,
    ) -> Self {
        Self::with_sources(
            provider,
            sentiment_service,
            DISCUSSION_SOURCES.iter().map(|s| s.to_string()).collect(),
        )
    }

    pub fn with_sources(
        provider: Arc<dyn DiscussionProvider>,
        sentiment_service: Arc<SentimentService>,
        sources: Vec<String>,
    ) -> Self {
        Self {
            provider,
            sentiment_service,
            sources,
        }
    }

    pub async fn aggregate_default(&self, query: &str) -> DiscussionSummary {
        self.aggregate(query, PER_SOURCE_LIMIT, TOTAL_POST_CAP).await
    }

    /// Searches each source in order, scoring post titles as they arrive.
    /// Collection stops as soon as `total_cap` posts are held, even in the
    /// middle of a source. A failing source is logged and skipped.
    pub async fn aggregate(
        &self,
        query: &str,
        per_source_limit: u32,
        total_cap: usize,
    ) -> DiscussionSummary {
        let mut summary = DiscussionSummary::default();
        if total_cap == 0 {
            return summary;
        }

        'sources: for source in &self.sources {
            let found = match self
                .provider
                .search(source, query, per_source_limit, SEARCH_WINDOW)
                .await
            {
                Ok(found) => found,
                Err(e) => {
                    error!("Error fetching from r/{}: {}", source, e);
                    summary.failed_sources.push(source.clone());
                    continue;
                }
            };
            debug!("r/{} returned {} posts for {:?}", source, found.len(), query);

            for post in found.into_iter().take(per_source_limit as usize) {
                let timestamp = match from_epoch_seconds(post.created_utc) {
                    Ok(timestamp) => timestamp,
                    Err(e) => {
                        error!("Error fetching from r/{}: {}", source, e);
                        summary.failed_sources.push(source.clone());
                        continue 'sources;
                    }
                };

                let sentiment = self.sentiment_service.classify(&post.title);
                summary.tally.record(sentiment);
                summary.posts.push(DiscussionPost {
                    title: post.title,
                    url: post.url,
                    upvotes: post.upvotes,
                    timestamp,
                    source: source.clone(),
                    sentiment,
                });

                if summary.posts.len() >= total_cap {
                    break 'sources;
                }
            }
        }

        summary
    }
}
