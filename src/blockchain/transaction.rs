//! Transaction building and receipt monitoring.
//!
//! # Responsibilities
//! - Encode the `initialize()` call from a static ABI descriptor
//! - Build the legacy transaction request from live chain state
//! - Poll for the receipt until it arrives or the wait times out

use alloy::primitives::{Address, Bytes, TxHash};
use alloy::sol;
use alloy::sol_types::SolCall;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::blockchain::client::ChainRpc;
use crate::blockchain::types::{BlockchainError, BlockchainResult, InitializeTx, ReceiptOutcome};

sol! {
    /// Admin bootstrap surface of the app registry.
    #[derive(Debug, PartialEq, Eq)]
    interface IAppRegistry {
        /// Sets the caller as the first admin. Succeeds once per deployment.
        function initialize() external;
    }
}

/// ABI-encoded call data for `initialize()`.
pub fn initialize_calldata() -> Bytes {
    Bytes::from(IAppRegistry::initializeCall {}.abi_encode())
}

/// Builds the initialize transaction for one contract.
pub struct TxBuilder<'a, R> {
    client: &'a R,
    contract: Address,
    chain_id: u64,
    gas_limit: u64,
}

impl<'a, R: ChainRpc> TxBuilder<'a, R> {
    /// Create a new transaction builder.
    pub fn new(client: &'a R, contract: Address, chain_id: u64, gas_limit: u64) -> Self {
        Self {
            client,
            contract,
            chain_id,
            gas_limit,
        }
    }

    /// Build the request for `from`, querying its pending nonce and the
    /// current gas price.
    pub async fn build(&self, from: Address) -> BlockchainResult<InitializeTx> {
        let nonce = self.client.pending_nonce(from).await?;
        let gas_price = self.client.gas_price().await?;

        tracing::debug!(
            nonce,
            gas_price,
            gas_limit = self.gas_limit,
            "Built initialize transaction"
        );

        Ok(InitializeTx {
            from,
            nonce,
            chain_id: self.chain_id,
            gas_limit: self.gas_limit,
            gas_price,
            to: self.contract,
            input: initialize_calldata(),
        })
    }
}

/// Wait for a transaction's receipt.
///
/// # Arguments
/// * `client` - RPC to poll
/// * `tx_hash` - Transaction hash to monitor
/// * `wait` - Maximum time to wait for the receipt
/// * `poll_interval` - Delay between `eth_getTransactionReceipt` calls
///
/// A poll that times out or hits a transport error counts as "still
/// pending"; only `wait` bounds the loop. Elapsing `wait` yields
/// [`BlockchainError::ConfirmationTimeout`]; the transaction itself stays
/// pending on the network.
pub async fn wait_for_receipt<R: ChainRpc>(
    client: &R,
    tx_hash: TxHash,
    wait: Duration,
    poll_interval: Duration,
) -> BlockchainResult<ReceiptOutcome> {
    let result = timeout(wait, async {
        let mut ticker = interval(poll_interval);

        loop {
            ticker.tick().await;

            match client.transaction_receipt(tx_hash).await {
                Ok(Some(receipt)) => return Ok(receipt),
                Ok(None) => tracing::debug!(tx_hash = %tx_hash, "Transaction pending"),
                Err(e @ (BlockchainError::Timeout(_) | BlockchainError::Rpc(_))) => {
                    tracing::warn!(tx_hash = %tx_hash, error = %e, "Receipt poll failed, still waiting");
                }
                Err(e) => return Err(e),
            }
        }
    })
    .await;

    match result {
        Ok(outcome) => outcome,
        Err(_) => Err(BlockchainError::ConfirmationTimeout(wait.as_secs())),
    }
}
