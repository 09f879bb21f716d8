pub mod chaingpt;

pub use chaingpt::ChainGptChatClient;

use anyhow::Result;
use async_trait::async_trait;

/// Single-shot text completion: one prompt in, the model's raw text out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn send(&self, prompt: &str) -> Result<String>;
}
