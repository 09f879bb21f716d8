use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::engine::OracleEngine;
use crate::error::{ExecutionError, Result};
use crate::execution::ExecutionGateway;
use crate::news::{NewsItem, NewsProvider};
use crate::strategies::NewsSentimentStrategy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleNewsResponse {
    pub action: String,
    pub raw_response: String,
    pub tx_hash: Option<String>,
}

/// News → sentiment → trade, one run per call. Holds no per-run state, so a
/// single instance serves concurrent requests.
pub struct OracleService {
    news: Arc<dyn NewsProvider>,
    engine: OracleEngine,
    gateway: ExecutionGateway,
    strategy: NewsSentimentStrategy,
}

impl OracleService {
    pub fn new(
        news: Arc<dyn NewsProvider>,
        engine: OracleEngine,
        gateway: ExecutionGateway,
        strategy: NewsSentimentStrategy,
    ) -> Self {
        Self {
            news,
            engine,
            gateway,
            strategy,
        }
    }

    pub async fn run_news_sentiment(&self) -> Result<OracleNewsResponse> {
        let asset = self.strategy.asset();

        let mut items = self.news.get_items().await.map_err(|e| {
            error!("❌ News fetch failed: {:#}", e);
            ExecutionError::with_cause("Failed to fetch news", e)
        })?;

        if items.is_empty() {
            warn!("⚠️ No {} news, asking the model with a placeholder item", asset);
            items.push(NewsItem::placeholder(asset));
        }

        let outcome = self.engine.execute(&self.strategy, items.as_slice()).await?;
        let executed = self.gateway.execute_action(outcome.action).await?;

        info!(
            "🏁 Oracle run finished: {} (tx: {})",
            outcome.action,
            executed.as_ref().map_or("none", |r| r.tx_hash.as_str())
        );

        Ok(OracleNewsResponse {
            action: outcome.action.tag().to_string(),
            raw_response: outcome.raw_response,
            tx_hash: executed.map(|r| r.tx_hash),
        })
    }
}
