pub mod contract;
pub mod ethers_client;

pub use ethers_client::EthersLedger;

use anyhow::Result;
use async_trait::async_trait;
use ethers::types::TxHash;

/// Mutating, zero-argument methods of the trade executor contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractMethod {
    Buy,
    Sell,
}

impl ContractMethod {
    pub fn name(&self) -> &'static str {
        match self {
            ContractMethod::Buy => "buy",
            ContractMethod::Sell => "sell",
        }
    }
}

/// Ledger holding the trade executor contract.
///
/// Submission and confirmation are separate calls so the caller controls
/// the one-submission-per-action rule.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Sign and broadcast a call to `method`. Returns once the node accepted it.
    async fn submit(&self, method: ContractMethod) -> Result<TxHash>;

    /// Wait until `tx_hash` is mined and succeeded.
    async fn confirm(&self, tx_hash: TxHash) -> Result<TxHash>;
}
