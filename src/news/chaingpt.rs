use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::{NewsItem, NewsProvider};
use crate::config::ChainGptConfig;

/// ChainGPT AI News feed, filtered to one token.
pub struct ChainGptNewsClient {
    http_client: reqwest::Client,
    news_url: String,
    api_key: String,
    token_id: u32,
    limit: u32,
}

impl ChainGptNewsClient {
    pub fn new(config: &ChainGptConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http_client,
            news_url: config.news_url.clone(),
            api_key: config.api_key.clone(),
            token_id: config.news_token_id,
            limit: config.news_limit,
        }
    }

    fn parse_items(body: &Value) -> Result<Vec<NewsItem>> {
        let rows = match body.get("data").and_then(Value::as_array) {
            Some(rows) => rows,
            None => {
                error!("Unexpected AI News response structure: {}", body);
                anyhow::bail!("AI News API returned unexpected response structure");
            }
        };

        let field = |row: &Value, key: &str| {
            row.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Ok(rows
            .iter()
            .map(|row| NewsItem::new(field(row, "title"), field(row, "description")))
            .collect())
    }
}

#[async_trait]
impl NewsProvider for ChainGptNewsClient {
    async fn get_items(&self) -> Result<Vec<NewsItem>> {
        info!("📰 Fetching news for token {} from ChainGPT", self.token_id);

        let response = self
            .http_client
            .get(&self.news_url)
            .bearer_auth(&self.api_key)
            .query(&[
                ("tokenId", self.token_id.to_string()),
                ("limit", self.limit.to_string()),
                ("sortBy", "createdAt".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("AI News API returned status {}", response.status());
        }

        let body: Value = response.json().await?;
        debug!("Raw AI News response: {}", body);

        let items = Self::parse_items(&body)?;
        if items.is_empty() {
            warn!("⚠️ No news items returned for token {}", self.token_id);
        } else {
            info!("Fetched {} news items", items.len());
        }
        Ok(items)
    }
}
