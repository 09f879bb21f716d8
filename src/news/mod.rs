pub mod chaingpt;

pub use chaingpt::ChainGptNewsClient;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Stand-in used when the feed has nothing for `asset`, so the model is
    /// still asked and can answer NEUTRAL.
    pub fn placeholder(asset: &str) -> Self {
        Self::new(
            format!("No recent {} news available", asset),
            format!("The AI News feed returned no results for {}.", asset),
        )
    }
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Latest items, newest first. An empty list is a valid answer.
    async fn get_items(&self) -> Result<Vec<NewsItem>>;
}
