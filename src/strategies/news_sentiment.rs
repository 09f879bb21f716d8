use serde_json::Value;
use tracing::debug;

use super::extract::first_json_object;
use super::types::{Action, Decision, Sentiment};
use super::OracleStrategy;
use crate::error::{ExecutionError, Result};
use crate::news::NewsItem;

const DEFAULT_ASSET: &str = "ETH";

/// Classifies the overall sentiment of a batch of news for one asset and
/// trades with it: positive news buys, negative news sells.
#[derive(Debug, Clone)]
pub struct NewsSentimentStrategy {
    asset: String,
}

impl NewsSentimentStrategy {
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
        }
    }

    pub fn asset(&self) -> &str {
        &self.asset
    }
}

impl Default for NewsSentimentStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET)
    }
}

impl OracleStrategy<[NewsItem]> for NewsSentimentStrategy {
    fn build_prompt(&self, input: &[NewsItem]) -> String {
        let news_lines = input
            .iter()
            .enumerate()
            .map(|(i, item)| {
                format!(
                    "{}. Title: {}\n   Summary: {}",
                    i + 1,
                    item.title,
                    item.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "You are a crypto sentiment classifier.\n\
             \n\
             Evaluate the overall sentiment for {asset} based on the following news.\n\
             \n\
             Return ONLY valid JSON with no extra text, no markdown, no code blocks:\n\
             \n\
             {{\"sentiment\":\"POSITIVE\"|\"NEGATIVE\"|\"NEUTRAL\",\"confidence\":number}}\n\
             \n\
             News:\n\
             {news_lines}",
            asset = self.asset,
        )
    }

    fn parse_response(&self, raw: &str) -> Result<Decision> {
        let object = first_json_object(raw).map_err(|e| {
            ExecutionError::with_cause(
                format!("Failed to parse LLM response as JSON. Raw: {}", raw),
                e,
            )
            .with_raw_response(raw)
        })?;

        let parsed = Value::Object(object);
        let rendered = parsed.to_string();

        let decision: Decision = serde_json::from_value(parsed).map_err(|e| {
            ExecutionError::with_cause(
                format!("Invalid decision schema. Parsed: {}", rendered),
                e,
            )
            .with_raw_response(raw)
        })?;

        if !decision.confidence.is_finite() || !(0.0..=1.0).contains(&decision.confidence) {
            return Err(ExecutionError::new(format!(
                "Decision confidence {} is outside [0, 1]. Parsed: {}",
                decision.confidence, rendered
            ))
            .with_raw_response(raw));
        }

        debug!(
            "Parsed decision: {} ({:.2})",
            decision.sentiment, decision.confidence
        );
        Ok(decision)
    }

    fn map_to_transaction(&self, decision: &Decision) -> Action {
        match decision.sentiment {
            Sentiment::Positive => Action::Buy,
            Sentiment::Negative => Action::Sell,
            Sentiment::Neutral => Action::NoAction,
        }
    }
}
