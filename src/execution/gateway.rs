use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::engine::PipelineStage;
use crate::error::{ExecutionError, Result};
use crate::ledger::{ContractMethod, LedgerClient};
use crate::strategies::Action;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub tx_hash: String,
    pub action: Action,
}

/// Turns an [`Action`] into at most one ledger transaction.
#[derive(Clone)]
pub struct ExecutionGateway {
    ledger: Arc<dyn LedgerClient>,
}

impl ExecutionGateway {
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self { ledger }
    }

    /// `NO_ACTION` never reaches the ledger and yields `None`. Otherwise the
    /// matching contract method is submitted once and awaited until mined;
    /// nothing is ever resubmitted.
    pub async fn execute_action(&self, action: Action) -> Result<Option<ExecutionResult>> {
        let method = match action {
            Action::Buy => ContractMethod::Buy,
            Action::Sell => ContractMethod::Sell,
            Action::NoAction => {
                info!(stage = %PipelineStage::Skipped, "⏭️  Action is NO_ACTION, skipping ledger execution");
                return Ok(None);
            }
        };

        info!("🚀 Executing contract method: {}()", method.name());

        let submitted = self.ledger.submit(method).await.map_err(|e| {
            error!(stage = %PipelineStage::Failed, "❌ Submission failed for {}: {:#}", action, e);
            ExecutionError::with_cause(format!("Transaction failed for action {}", action), e)
        })?;
        info!(stage = %PipelineStage::Submitted, "📤 Transaction submitted: {:?}", submitted);

        let confirmed = self.ledger.confirm(submitted).await.map_err(|e| {
            error!(
                stage = %PipelineStage::Failed,
                "❌ Confirmation failed for {:?}: {:#}", submitted, e
            );
            ExecutionError::with_cause(
                format!("Transaction confirmation failed for action {}", action),
                e,
            )
        })?;
        info!(stage = %PipelineStage::Confirmed, "✅ Transaction confirmed: {:?}", confirmed);

        Ok(Some(ExecutionResult {
            tx_hash: format!("{:?}", confirmed),
            action,
        }))
    }
}
