//! Recent ocean and climate headlines.

use crate::{FloatChatError, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Caller-facing text when the lookup fails for any reason.
pub const NEWS_UNAVAILABLE: &str = "Sorry, I couldn't fetch news right now.";

/// Caller-facing text when the search matches nothing.
pub const NO_NEWS_FOUND: &str = "No recent news found.";

/// Configuration for the article-search endpoint.
#[derive(Clone, Debug)]
pub struct NewsConfig {
    pub base_url: String,
    pub api_key: String,
    /// Fixed search expression; the user's text never reaches the API.
    pub query: String,
    pub page_size: u32,
    pub timeout: Duration,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2/everything".to_string(),
            api_key: String::new(),
            query: "ocean OR climate".to_string(),
            page_size: 3,
            timeout: Duration::from_secs(5),
        }
    }
}

impl NewsConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: String,
    source: NewsSource,
}

#[derive(Debug, Deserialize)]
struct NewsSource {
    name: String,
}

/// Client for the article-search endpoint.
pub struct NewsClient {
    client: reqwest::Client,
    config: NewsConfig,
}

impl NewsClient {
    pub fn new(config: NewsConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FloatChatError::Config(format!("HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Bulleted list of the newest headlines, the no-news text when the
    /// search comes back empty, or the apology string on any failure.
    pub async fn latest_headlines(&self) -> String {
        match self.fetch().await {
            Ok(articles) if articles.is_empty() => NO_NEWS_FOUND.to_string(),
            Ok(articles) => {
                let bullets = articles
                    .iter()
                    .take(self.config.page_size as usize)
                    .map(|a| format!("- {} ({})", a.title, a.source.name))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("Here are some recent news headlines:\n{bullets}")
            }
            Err(e) => {
                debug!("News lookup failed: {e}");
                NEWS_UNAVAILABLE.to_string()
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Article>> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("q", self.config.query.clone()),
                ("sortBy", "publishedAt".to_string()),
                ("pageSize", self.config.page_size.to_string()),
                ("apiKey", self.config.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: NewsResponse = response.json().await?;
        Ok(body.articles)
    }
}
