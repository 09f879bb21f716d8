#![allow(dead_code)]

use ai_news_oracle::engine::OracleEngine;
use ai_news_oracle::execution::ExecutionGateway;
use ai_news_oracle::ledger::{ContractMethod, LedgerClient};
use ai_news_oracle::llm::CompletionProvider;
use ai_news_oracle::news::{NewsItem, NewsProvider};
use ai_news_oracle::oracle::OracleService;
use ai_news_oracle::strategies::NewsSentimentStrategy;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use ethers::types::TxHash;
use std::sync::{Arc, Mutex};

pub struct FixedNews {
    items: Option<Vec<NewsItem>>,
}

impl FixedNews {
    pub fn with(items: Vec<NewsItem>) -> Arc<Self> {
        Arc::new(Self { items: Some(items) })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { items: None })
    }
}

#[async_trait]
impl NewsProvider for FixedNews {
    async fn get_items(&self) -> Result<Vec<NewsItem>> {
        self.items
            .clone()
            .ok_or_else(|| anyhow!("news feed unavailable"))
    }
}

pub struct FixedLlm {
    reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FixedLlm {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for FixedLlm {
    async fn send(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or_else(|| anyhow!("503 upstream unavailable"))
    }
}

/// Ledger double recording every call it receives.
pub struct RecordingLedger {
    tx_hash: TxHash,
    confirmed_hash: TxHash,
    fail_submit: bool,
    fail_confirm: bool,
    submitted: Mutex<Vec<ContractMethod>>,
    confirmed: Mutex<Vec<TxHash>>,
}

impl RecordingLedger {
    fn build(fail_submit: bool, fail_confirm: bool) -> Arc<Self> {
        Arc::new(Self {
            tx_hash: TxHash::from_low_u64_be(0xbeef),
            // replaced (sped-up) transactions are mined under a new hash
            confirmed_hash: TxHash::from_low_u64_be(0xcafe),
            fail_submit,
            fail_confirm,
            submitted: Mutex::new(Vec::new()),
            confirmed: Mutex::new(Vec::new()),
        })
    }

    pub fn healthy() -> Arc<Self> {
        Self::build(false, false)
    }

    pub fn rejecting() -> Arc<Self> {
        Self::build(true, false)
    }

    pub fn never_confirming() -> Arc<Self> {
        Self::build(false, true)
    }

    /// Hash handed out by `submit`.
    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Hash handed out by `confirm`.
    pub fn confirmed_hash(&self) -> TxHash {
        self.confirmed_hash
    }

    pub fn submitted(&self) -> Vec<ContractMethod> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn confirmed(&self) -> Vec<TxHash> {
        self.confirmed.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.submitted().len() + self.confirmed().len()
    }
}

#[async_trait]
impl LedgerClient for RecordingLedger {
    async fn submit(&self, method: ContractMethod) -> Result<TxHash> {
        self.submitted.lock().unwrap().push(method);
        if self.fail_submit {
            return Err(anyhow!("insufficient funds for gas"));
        }
        Ok(self.tx_hash)
    }

    async fn confirm(&self, tx_hash: TxHash) -> Result<TxHash> {
        self.confirmed.lock().unwrap().push(tx_hash);
        if self.fail_confirm {
            return Err(anyhow!("Transaction {:?} was dropped before confirmation", tx_hash));
        }
        Ok(self.confirmed_hash)
    }
}

pub fn oracle_service(
    news: Arc<FixedNews>,
    llm: Arc<FixedLlm>,
    ledger: Arc<RecordingLedger>,
) -> OracleService {
    OracleService::new(
        news,
        OracleEngine::new(llm),
        ExecutionGateway::new(ledger),
        NewsSentimentStrategy::default(),
    )
}
