use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use super::CompletionProvider;
use crate::config::ChainGptConfig;

const CHAT_MODEL: &str = "general_assistant";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatBlobRequest<'a> {
    model: &'a str,
    question: &'a str,
    chat_history: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatBlobResponse {
    data: ChatBlobData,
}

#[derive(Debug, Deserialize)]
struct ChatBlobData {
    bot: String,
}

/// ChainGPT Web3 LLM, used without chat history.
pub struct ChainGptChatClient {
    http_client: reqwest::Client,
    chat_url: String,
    api_key: String,
}

impl ChainGptChatClient {
    pub fn new(config: &ChainGptConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http_client,
            chat_url: config.chat_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl CompletionProvider for ChainGptChatClient {
    async fn send(&self, prompt: &str) -> Result<String> {
        info!("🤖 Sending prompt to ChainGPT Web3 LLM");

        let request = ChatBlobRequest {
            model: CHAT_MODEL,
            question: prompt,
            chat_history: "off",
        };

        let response = self
            .http_client
            .post(&self.chat_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("ChainGPT chat API returned status {}", response.status());
        }

        let body: ChatBlobResponse = response
            .json()
            .await
            .context("ChainGPT chat API returned an unexpected body")?;

        let raw = body.data.bot;
        info!("Raw LLM response received ({} chars)", raw.len());
        Ok(raw)
    }
}
