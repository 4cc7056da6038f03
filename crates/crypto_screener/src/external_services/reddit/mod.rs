pub mod access_token;
pub mod search;

use async_trait::async_trait;
use reqwest::Client;

use crate::utils::{errors::AppError, time::TimePeriod};

use super::{DiscussionProvider, SourcePost};

pub const REDDIT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
pub const REDDIT_OAUTH_URL: &str = "https://oauth.reddit.com";

/// Application-only Reddit client. A token is requested per search so that
/// no credential state outlives a request.
pub struct RedditService {
    client: Client,
    client_id: String,
    client_secret: String,
    token_url: String,
    api_url: String,
}

impl RedditService {
    pub fn new(client_id: String, client_secret: String, user_agent: &str) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            client_id,
            client_secret,
            token_url: REDDIT_TOKEN_URL.to_string(),
            api_url: REDDIT_OAUTH_URL.to_string(),
        })
    }

    pub fn with_endpoints(mut self, token_url: &str, api_url: &str) -> Self {
        self.token_url = token_url.to_string();
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl DiscussionProvider for RedditService {
    async fn search(
        &self,
        source: &str,
        query: &str,
        limit: u32,
        window: TimePeriod,
    ) -> Result<Vec<SourcePost>, AppError> {
        let token = self.get_access_token().await?;
        let listing = self
            .search_subreddit(&token, source, query, limit, window)
            .await?;

        Ok(listing.into_posts())
    }
}
