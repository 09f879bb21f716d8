use anyhow::{anyhow, Result};
use async_trait::async_trait;
use ethers::prelude::*;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

use super::contract::TradeExecutor;
use super::{ContractMethod, LedgerClient};
use crate::config::LedgerConfig;

type HttpProvider = Provider<Http>;
type SignerClient = SignerMiddleware<HttpProvider, LocalWallet>;

/// JSON-RPC ledger client signing with a local private key.
pub struct EthersLedger {
    client: Arc<SignerClient>,
    contract: TradeExecutor<SignerClient>,
}

impl EthersLedger {
    pub async fn new(config: &LedgerConfig) -> Result<Self> {
        let provider = HttpProvider::try_from(config.rpc_url.as_str())?;
        let chain_id = provider.get_chainid().await?.as_u64();
        let wallet = LocalWallet::from_str(&config.private_key)?.with_chain_id(chain_id);
        let signer_address = wallet.address();

        let client = Arc::new(SignerMiddleware::new(provider, wallet));

        let address = Address::from_str(&config.contract_address)?;
        let contract = TradeExecutor::new(address, client.clone());

        info!(
            "🔗 Ledger ready: chain {} | signer {:?} | contract {:?}",
            chain_id, signer_address, address
        );

        Ok(Self { client, contract })
    }
}

#[async_trait]
impl LedgerClient for EthersLedger {
    async fn submit(&self, method: ContractMethod) -> Result<TxHash> {
        let call = match method {
            ContractMethod::Buy => self.contract.buy(),
            ContractMethod::Sell => self.contract.sell(),
        };

        let pending = call.send().await?;
        let tx_hash = pending.tx_hash();
        debug!("{}() accepted by node: {:?}", method.name(), tx_hash);
        Ok(tx_hash)
    }

    async fn confirm(&self, tx_hash: TxHash) -> Result<TxHash> {
        let receipt = PendingTransaction::new(tx_hash, self.client.provider()).await?;
        ensure_mined(tx_hash, receipt)
    }
}

/// A missing receipt means the transaction was dropped; status 0 means it
/// reverted. Pre-Byzantium receipts carry no status and count as mined.
fn ensure_mined(tx_hash: TxHash, receipt: Option<TransactionReceipt>) -> Result<TxHash> {
    let receipt = receipt
        .ok_or_else(|| anyhow!("Transaction {:?} was dropped before confirmation", tx_hash))?;

    if receipt.status == Some(U64::zero()) {
        anyhow::bail!("Transaction {:?} reverted", tx_hash);
    }

    debug!(
        "Transaction {:?} mined in block {:?}",
        receipt.transaction_hash, receipt.block_number
    );
    Ok(receipt.transaction_hash)
}
