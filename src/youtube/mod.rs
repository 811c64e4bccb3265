//! YouTube Data API v3 client.
//!
//! One endpoint, one page: `search.list` over the configured channel's
//! most recent uploads. No retries, no pagination, no caching.

use crate::config::Config;
use crate::error::SelectionError;
use crate::models::search::SearchListResponse;
use reqwest::Client;
use std::time::Duration;

const BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Fixed page size: the upstream maximum for `search.list`.
const PAGE_SIZE: &str = "50";

/// Search client scoped to one channel.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// HTTP client for API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Channel whose uploads are searched.
    channel_id: String,
    /// Base URL for the YouTube Data API.
    base_url: String,
}

impl YouTubeClient {
    /// Build a client for the configured channel.
    pub fn new(config: &Config) -> Result<Self, SelectionError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(YouTubeClient {
            client,
            api_key: config.api_key.clone(),
            channel_id: config.channel_id.clone(),
            base_url: BASE_URL.to_string(),
        })
    }

    /// Fetch the channel's 50 most recent uploads, newest first.
    ///
    /// The body is decoded without gating on the transport status: quota
    /// and key failures arrive as a JSON `error` object next to a non-2xx
    /// status, and the caller handles that branch from the decoded body.
    pub async fn search_recent_uploads(&self) -> Result<SearchListResponse, SelectionError> {
        let url = format!("{}/search", self.base_url);
        let params = [
            ("key", self.api_key.as_str()),
            ("channelId", self.channel_id.as_str()),
            ("part", "snippet,id"),
            ("order", "date"),
            ("maxResults", PAGE_SIZE),
            ("type", "video"),
        ];

        tracing::info!("calling YouTube search.list");
        let response = self.client.get(&url).query(&params).send().await?;
        let body: SearchListResponse = response.json().await?;
        tracing::info!(items = body.items.len(), "YouTube response received");

        Ok(body)
    }
}
