use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::error::{ExecutionError, Result};
use crate::llm::CompletionProvider;
use crate::strategies::{Action, Decision, OracleStrategy};

/// Where a single oracle run currently is. Recorded on every log line of the
/// pipeline; once `Submitted`, the only ways out are `Confirmed` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    PromptBuilt,
    LlmCalled,
    DecisionParsed,
    ActionMapped,
    Skipped,
    Submitted,
    Confirmed,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::PromptBuilt => "PROMPT_BUILT",
            PipelineStage::LlmCalled => "LLM_CALLED",
            PipelineStage::DecisionParsed => "DECISION_PARSED",
            PipelineStage::ActionMapped => "ACTION_MAPPED",
            PipelineStage::Skipped => "SKIPPED",
            PipelineStage::Submitted => "SUBMITTED",
            PipelineStage::Confirmed => "CONFIRMED",
            PipelineStage::Failed => "FAILED",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OracleOutcome {
    pub action: Action,
    pub decision: Decision,
    pub raw_response: String,
}

/// Drives any [`OracleStrategy`] against the completion provider.
///
/// One provider call per run, no retries, no fallback decision: the first
/// failure aborts the run and is returned to the caller.
#[derive(Clone)]
pub struct OracleEngine {
    llm: Arc<dyn CompletionProvider>,
}

impl OracleEngine {
    pub fn new(llm: Arc<dyn CompletionProvider>) -> Self {
        Self { llm }
    }

    /// Accepts a concrete strategy or a `&dyn OracleStrategy<I>` picked at
    /// call time.
    pub async fn execute<S, I>(&self, strategy: &S, input: &I) -> Result<OracleOutcome>
    where
        S: OracleStrategy<I> + ?Sized,
        I: ?Sized + Sync,
    {
        let prompt = strategy.build_prompt(input);
        info!(stage = %PipelineStage::PromptBuilt, "Prompt built, calling LLM");

        let raw_response = self.llm.send(&prompt).await.map_err(|e| {
            error!(stage = %PipelineStage::Failed, "❌ LLM request failed: {:#}", e);
            ExecutionError::with_cause("LLM request failed", e)
        })?;
        debug!(stage = %PipelineStage::LlmCalled, "Raw LLM output: {}", raw_response);

        let decision = strategy.parse_response(&raw_response).map_err(|e| {
            error!(
                stage = %PipelineStage::Failed,
                "❌ Decision validation failed. Raw LLM output: {}", raw_response
            );
            e
        })?;
        debug!(
            stage = %PipelineStage::DecisionParsed,
            "Decision: {} ({:.2})", decision.sentiment, decision.confidence
        );

        let action = strategy.map_to_transaction(&decision);
        info!(stage = %PipelineStage::ActionMapped, "🎯 Decision mapped to action: {}", action);

        Ok(OracleOutcome {
            action,
            decision,
            raw_response,
        })
    }
}
