use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    external_services::SourcePost,
    utils::{errors::AppError, time::TimePeriod},
};

use super::RedditService;

#[derive(Serialize, Debug)]
pub struct SubredditSearchQuery<'a> {
    pub q: &'a str,
    pub restrict_sr: bool,
    pub sort: &'a str,
    pub t: TimePeriod,
    pub limit: u32,
    pub raw_json: u8,
}

#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
pub struct ListingChild {
    pub data: RedditPost,
}

#[derive(Debug, Deserialize)]
pub struct RedditPost {
    pub title: String,
    pub url: String,
    pub score: i64,
    pub created_utc: f64,
}

impl Listing {
    pub fn into_posts(self) -> Vec<SourcePost> {
        self.data
            .children
            .into_iter()
            .map(|child| SourcePost {
                title: child.data.title,
                url: child.data.url,
                upvotes: child.data.score,
                created_utc: child.data.created_utc,
            })
            .collect()
    }
}

impl RedditService {
    pub async fn search_subreddit(
        &self,
        token: &str,
        subreddit: &str,
        query: &str,
        limit: u32,
        window: TimePeriod,
    ) -> Result<Listing, AppError> {
        let search = SubredditSearchQuery {
            q: query,
            restrict_sr: true,
            sort: "relevance",
            t: window,
            limit,
            raw_json: 1,
        };
        debug!("Searching r/{} with {:?}", subreddit, search);

        let response = self
            .client
            .get(format!("{}/r/{}/search", self.api_url, subreddit))
            .bearer_auth(token)
            .query(&search)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Reddit search on r/{} failed with {}", subreddit, status);
            return Err(AppError::UpstreamStatus {
                service: "reddit",
                status: status.as_u16(),
            });
        }

        let json_str = response.text().await?;
        let listing: Listing = serde_json::from_str(&json_str)?;

        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external_services::reddit::test_client::reddit_for;

    #[tokio::test]
    async fn error_status_becomes_upstream_status() {
        let reddit = reddit_for(vec![("/r/Solana/search", 503, "")]).await;
        let result = reddit
            .search_subreddit("token", "Solana", "SOL", 3, TimePeriod::Week)
            .await;

        assert!(matches!(
            result,
            Err(AppError::UpstreamStatus {
                service: "reddit",
                status: 503
            })
        ));
    }

    #[tokio::test]
    async fn garbage_listing_is_a_decode_error() {
        let reddit = reddit_for(vec![("/r/Solana/search", 200, "<html>maintenance</html>")]).await;
        let result = reddit
            .search_subreddit("token", "Solana", "SOL", 3, TimePeriod::Week)
            .await;

        assert!(matches!(result, Err(AppError::DecodeError(_))));
    }

    #[test]
    fn listing_maps_to_source_posts() {
        let body = r#"{
            "kind": "Listing",
            "data": {
                "after": null,
                "children": [
                    {"kind": "t3", "data": {"title": "BTC to the moon", "url": "https://reddit.com/r/Bitcoin/1",
                                            "score": 420, "created_utc": 1700000000.0, "num_comments": 12}},
                    {"kind": "t3", "data": {"title": "Is this a scam?", "url": "https://reddit.com/r/Bitcoin/2",
                                            "score": -3, "created_utc": 1700000100.0}}
                ]
            }
        }"#;
        let listing: Listing = serde_json::from_str(body).unwrap();
        let posts = listing.into_posts();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].upvotes, 420);
        assert_eq!(posts[1].title, "Is this a scam?");
        assert_eq!(posts[1].created_utc, 1_700_000_100.0);
    }

    #[test]
    fn query_restricts_to_subreddit_and_window() {
        let query = SubredditSearchQuery {
            q: "BTC",
            restrict_sr: true,
            sort: "relevance",
            t: TimePeriod::Week,
            limit: 3,
            raw_json: 1,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["t"], "week");
        assert_eq!(json["restrict_sr"], true);
        assert_eq!(json["limit"], 3);
    }
}
