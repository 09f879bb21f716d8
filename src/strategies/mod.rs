pub mod extract;
pub mod news_sentiment;
pub mod types;

pub use news_sentiment::NewsSentimentStrategy;
pub use types::{Action, Decision, Sentiment};

use crate::error::Result;

/// A pluggable decision use case: how to prompt the model, how to validate
/// what it answers, and what to trade on the validated answer.
///
/// Object safe, so callers pick a strategy at call time through
/// `&dyn OracleStrategy<I>`. `I` is the domain input and may be unsized.
pub trait OracleStrategy<I: ?Sized>: Send + Sync {
    /// Pure and deterministic.
    fn build_prompt(&self, input: &I) -> String;

    /// Turn untrusted model text into a typed decision. Every rejection is an
    /// [`ExecutionError`](crate::error::ExecutionError) carrying the raw text.
    fn parse_response(&self, raw: &str) -> Result<Decision>;

    /// Total over the closed decision space.
    fn map_to_transaction(&self, decision: &Decision) -> Action;
}
